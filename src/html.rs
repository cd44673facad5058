//! The HTML renderer for blocks, and the escaping used for link targets.

use std::fmt::{self, Write};

use crate::character_set::character_set;
use crate::nodes::{Block, NodeMacro, NodeMetaData, NodeRaw, Syntax, SyntaxFamily};

/// Formats blocks as HTML.  `syntax` is the syntax the host is rendering to; metadata is only
/// written out for annotated syntaxes.
pub fn format_blocks(blocks: &[Block], syntax: Syntax, output: &mut dyn Write) -> fmt::Result {
    HtmlFormatter::new(syntax, output).format_all(blocks)
}

/// Formats blocks as HTML into a new string.
pub fn blocks_to_html(blocks: &[Block], syntax: Syntax) -> String {
    let mut s = String::new();
    // Writing to a String can't fail.
    let _ = format_blocks(blocks, syntax, &mut s);
    s
}

/// Writes `buffer` to `output`, escaping it for use in HTML text or a double- or single-quoted
/// attribute.  `{` is escaped too so the result can't open wiki markup when echoed back.
///
/// Every escape is a character reference, so an HTML parser reads back exactly `buffer`.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    const HTML_UNSAFE: [bool; 256] = character_set(b"&<>\"'{");

    let bytes = buffer.as_bytes();
    let mut offset = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            let esc: &str = match byte {
                b'"' => "&quot;",
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'\'' => "&#39;",
                b'{' => "&#123;",
                _ => unreachable!(),
            };
            output.write_str(&buffer[offset..i])?;
            output.write_str(esc)?;
            offset = i + 1;
        }
    }
    output.write_str(&buffer[offset..])?;
    Ok(())
}

/// [`escape`] into a new string.
pub fn escape_string(buffer: &str) -> String {
    let mut s = String::with_capacity(buffer.len());
    let _ = escape(&mut s, buffer);
    s
}

/// Writes an opening HTML tag, escaping attribute values.
///
/// ```
/// # use link_group::html;
/// let mut out = String::new();
/// html::write_opening_tag(&mut out, "a", vec![("href", "/a?b=1&c=2")]).unwrap();
/// assert_eq!(out, "<a href=\"/a?b=1&amp;c=2\">");
/// ```
pub fn write_opening_tag<Str>(
    output: &mut dyn Write,
    tag: &str,
    attributes: impl IntoIterator<Item = (Str, Str)>,
) -> fmt::Result
where
    Str: AsRef<str>,
{
    write!(output, "<{}", tag)?;
    for (attr, val) in attributes {
        write!(output, " {}=\"", attr.as_ref())?;
        escape(output, val.as_ref())?;
        output.write_str("\"")?;
    }
    output.write_str(">")
}

struct HtmlFormatter<'o> {
    output: &'o mut dyn Write,
    annotated: bool,
}

impl<'o> HtmlFormatter<'o> {
    fn new(syntax: Syntax, output: &'o mut dyn Write) -> Self {
        HtmlFormatter {
            output,
            annotated: syntax.family() == SyntaxFamily::AnnotatedEditable,
        }
    }

    fn format_all(&mut self, blocks: &[Block]) -> fmt::Result {
        for block in blocks {
            self.format(block)?;
        }
        Ok(())
    }

    fn format(&mut self, block: &Block) -> fmt::Result {
        match *block {
            Block::Raw(NodeRaw { ref literal, syntax }) => match syntax {
                Syntax::Html5
                | Syntax::Xhtml1
                | Syntax::AnnotatedHtml5
                | Syntax::AnnotatedXhtml1 => self.output.write_str(literal),
                Syntax::Plain => escape(self.output, literal),
                Syntax::Wiki => self.output.write_str("<!-- raw wiki markup omitted -->"),
            },
            Block::Group(ref children) => {
                self.output.write_str("<div>")?;
                self.format_all(children)?;
                self.output.write_str("</div>")
            }
            Block::Paragraph(ref children) => {
                self.output.write_str("<p>")?;
                self.format_all(children)?;
                self.output.write_str("</p>")
            }
            Block::Text(ref literal) => escape(self.output, literal),
            Block::Space => self.output.write_str(" "),
            Block::NewLine => self.output.write_str("<br />"),
            Block::MetaData(ref nmd) => self.format_metadata(block, nmd),
            Block::Macro(ref nm) => self.format_macro(nm),
        }
    }

    fn format_metadata(&mut self, block: &Block, nmd: &NodeMetaData) -> fmt::Result {
        if !self.annotated || nmd.metadata.is_empty() {
            return self.format_all(&nmd.children);
        }

        let tag = if block.is_inline() { "span" } else { "div" };
        let attributes = nmd
            .metadata
            .iter()
            .map(|(key, value)| (format!("data-{}", key), value.to_string()));
        write_opening_tag(self.output, tag, attributes)?;
        self.format_all(&nmd.children)?;
        write!(self.output, "</{}>", tag)
    }

    fn format_macro(&mut self, nm: &NodeMacro) -> fmt::Result {
        let tag = if nm.inline { "span" } else { "div" };

        if nm.id == "error" {
            write!(self.output, "<{} class=\"box errormessage\">", tag)?;
            if let Some(title) = nm.parameters.get("title") {
                self.output.write_str("<strong>")?;
                escape(self.output, title)?;
                self.output.write_str("</strong>")?;
                if nm.content.is_some() {
                    self.output.write_str(" ")?;
                }
            }
        } else {
            write_opening_tag(self.output, tag, vec![("data-macro", nm.id.as_str())])?;
        }

        if let Some(ref content) = nm.content {
            escape(self.output, content)?;
        }
        write!(self.output, "</{}>", tag)
    }
}
