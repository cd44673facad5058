//! A content parser for plain text.

use crate::adapters::{ContentParser, ParseError};
use crate::nodes::Block;
use crate::MacroContext;

/// Reads content as plain text: paragraphs separated by blank lines, words separated by spaces,
/// and line breaks kept.  No markup is interpreted.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextParser;

impl ContentParser for PlainTextParser {
    fn parse(
        &self,
        content: &str,
        _context: &MacroContext,
        inline: bool,
    ) -> Result<Vec<Block>, ParseError> {
        if let Some(offset) = content.find('\0') {
            return Err(ParseError {
                offset,
                message: "NUL byte in content".to_string(),
            });
        }

        let content = content.replace("\r\n", "\n");
        if inline {
            return Ok(inlines(content.trim_matches('\n')));
        }

        Ok(content
            .split("\n\n")
            .map(|p| p.trim_matches('\n'))
            .filter(|p| !p.trim().is_empty())
            .map(|p| Block::Paragraph(inlines(p)))
            .collect())
    }
}

fn inlines(text: &str) -> Vec<Block> {
    let mut blocks = vec![];

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            blocks.push(Block::NewLine);
        }
        for (j, word) in line.split(' ').enumerate() {
            if j > 0 {
                blocks.push(Block::Space);
            }
            if !word.is_empty() {
                blocks.push(Block::Text(word.to_string()));
            }
        }
    }

    blocks
}
