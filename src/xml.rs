//! The XML renderer for blocks.

use std::cmp;
use std::fmt::{self, Write};

use crate::character_set::character_set;
use crate::nodes::{Block, NodeMacro, NodeRaw};

const MAX_INDENT: u32 = 40;

/// Formats blocks as an XML tree, for inspecting what a macro produced.
pub fn format_blocks(blocks: &[Block], output: &mut dyn Write) -> fmt::Result {
    output.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    output.write_str("<blocks>\n")?;
    let mut f = XmlFormatter { output, indent: 2 };
    for block in blocks {
        f.format(block)?;
    }
    f.output.write_str("</blocks>\n")
}

struct XmlFormatter<'o> {
    output: &'o mut dyn Write,
    indent: u32,
}

impl<'o> XmlFormatter<'o> {
    fn escape(&mut self, buffer: &str) -> fmt::Result {
        let bytes = buffer.as_bytes();
        const XML_UNSAFE: [bool; 256] = character_set(b"&<>\"\0");

        let mut offset = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if XML_UNSAFE[byte as usize] {
                let esc: &str = match byte {
                    b'"' => "&quot;",
                    b'&' => "&amp;",
                    b'<' => "&lt;",
                    b'>' => "&gt;",
                    b'\0' => "\u{fffd}",
                    _ => unreachable!(),
                };
                self.output.write_str(&buffer[offset..i])?;
                self.output.write_str(esc)?;
                offset = i + 1;
            }
        }
        self.output.write_str(&buffer[offset..])?;
        Ok(())
    }

    fn format(&mut self, root: &Block) -> fmt::Result {
        // Traverse iteratively with a work stack: render the opening tag, push the block back
        // for its closing tag, then push the children in reverse order.
        enum Phase {
            Pre,
            Post,
        }
        let mut stack = vec![(root, Phase::Pre)];

        while let Some((block, phase)) = stack.pop() {
            match phase {
                Phase::Pre => {
                    self.format_block(block, true)?;
                    if let Some(children) = block.children() {
                        if !children.is_empty() {
                            stack.push((block, Phase::Post));
                            for ch in children.iter().rev() {
                                stack.push((ch, Phase::Pre));
                            }
                        }
                    }
                }
                Phase::Post => self.format_block(block, false)?,
            }
        }

        Ok(())
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..(cmp::min(self.indent, MAX_INDENT)) {
            self.output.write_str(" ")?;
        }
        Ok(())
    }

    fn format_block(&mut self, block: &Block, entering: bool) -> fmt::Result {
        let has_children = block.children().map_or(false, |c| !c.is_empty());

        if !entering {
            self.indent -= 2;
            self.indent()?;
            return writeln!(self.output, "</{}>", block.xml_node_name());
        }

        self.indent()?;
        write!(self.output, "<{}", block.xml_node_name())?;

        let mut was_literal = false;

        match *block {
            Block::Raw(NodeRaw {
                ref literal,
                syntax,
            }) => {
                write!(self.output, " syntax=\"{}\" xml:space=\"preserve\">", syntax)?;
                self.escape(literal)?;
                write!(self.output, "</{}", block.xml_node_name())?;
                was_literal = true;
            }
            Block::Text(ref literal) => {
                self.output.write_str(" xml:space=\"preserve\">")?;
                self.escape(literal)?;
                write!(self.output, "</{}", block.xml_node_name())?;
                was_literal = true;
            }
            Block::MetaData(ref nmd) => {
                for (key, value) in nmd.metadata.iter() {
                    self.output.write_str(" ")?;
                    self.output.write_str(key)?;
                    self.output.write_str("=\"")?;
                    self.escape(value)?;
                    self.output.write_str("\"")?;
                }
            }
            Block::Macro(NodeMacro {
                ref id,
                ref parameters,
                ref content,
                inline,
            }) => {
                self.output.write_str(" id=\"")?;
                self.escape(id)?;
                write!(self.output, "\" inline=\"{}\"", inline)?;
                for (name, value) in parameters {
                    self.output.write_str(" ")?;
                    self.output.write_str(name)?;
                    self.output.write_str("=\"")?;
                    self.escape(value)?;
                    self.output.write_str("\"")?;
                }
                if let Some(content) = content {
                    self.output.write_str(" xml:space=\"preserve\">")?;
                    self.escape(content)?;
                    write!(self.output, "</{}", block.xml_node_name())?;
                    was_literal = true;
                }
            }
            Block::Group(..) | Block::Paragraph(..) | Block::Space | Block::NewLine => {}
        }

        if has_children {
            self.indent += 2;
        } else if !was_literal {
            self.output.write_str(" /")?;
        }
        self.output.write_str(">\n")
    }
}
