use super::*;

fn parse(content: &str, inline: bool) -> Result<Vec<Block>, ParseError> {
    PlainTextParser.parse(content, &MacroContext::default(), inline)
}

#[test]
fn paragraphs() {
    compare_blocks(
        &parse("Hello world\n\nSecond line\nthird\n", false).unwrap(),
        &[
            Block::Paragraph(vec![text("Hello"), Block::Space, text("world")]),
            Block::Paragraph(vec![
                text("Second"),
                Block::Space,
                text("line"),
                Block::NewLine,
                text("third"),
            ]),
        ],
    );
}

#[test]
fn crlf_and_blank_paragraphs() {
    compare_blocks(
        &parse("one\r\n\r\n  \n\ntwo", false).unwrap(),
        &[
            Block::Paragraph(vec![text("one")]),
            Block::Paragraph(vec![text("two")]),
        ],
    );
    assert!(parse("\n\n", false).unwrap().is_empty());
}

#[test]
fn inline_is_flat() {
    let blocks = parse("a  b\nc\n", true).unwrap();
    compare_blocks(
        &blocks,
        &[
            text("a"),
            Block::Space,
            Block::Space,
            text("b"),
            Block::NewLine,
            text("c"),
        ],
    );
    assert!(blocks.iter().all(Block::is_inline));
}

#[test]
fn markup_is_not_interpreted() {
    compare_html(
        &parse("<b>**{{html}}**</b>", true).unwrap(),
        Syntax::Html5,
        "&lt;b&gt;**&#123;&#123;html}}**&lt;/b&gt;",
    );
}

#[test]
fn nul_is_rejected() {
    assert_eq!(
        parse("ab\0c", false),
        Err(ParseError {
            offset: 2,
            message: "NUL byte in content".to_string(),
        })
    );
}
