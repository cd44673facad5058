use crate::nodes::{MetaData, NodeMacro, NodeMetaData, NodeRaw};
use crate::xml;

use super::*;

fn sample() -> Vec<Block> {
    vec![
        Block::raw_html("<a href=\"/x\">"),
        Block::Group(vec![Block::Paragraph(vec![
            text("Hi"),
            Block::Space,
            text("<there>"),
            Block::NewLine,
        ])]),
        Block::raw_html("</a>"),
    ]
}

fn editable(inline: bool) -> Block {
    let mut metadata = MetaData::new();
    metadata.add(MetaData::NON_GENERATED_CONTENT, "blocks");
    let children = if inline {
        vec![text("Hi")]
    } else {
        vec![Block::Paragraph(vec![text("Hi")])]
    };
    Block::MetaData(NodeMetaData { children, metadata })
}

#[test]
fn html_anchor_tree() {
    compare_html(
        &sample(),
        Syntax::Html5,
        "<a href=\"/x\"><div><p>Hi &lt;there&gt;<br /></p></div></a>",
    );
}

#[test]
fn html_error_block() {
    compare_html(
        &[Block::error("Invalid <link>", "The link to [x] was blocked")],
        Syntax::Xhtml1,
        "<div class=\"box errormessage\"><strong>Invalid &lt;link&gt;</strong> \
         The link to [x] was blocked</div>",
    );
}

#[test]
fn html_other_macros() {
    let block = Block::Macro(NodeMacro {
        id: "toc".to_string(),
        parameters: Default::default(),
        content: None,
        inline: true,
    });
    compare_html(&[block], Syntax::Html5, "<span data-macro=\"toc\"></span>");
}

#[test]
fn html_metadata_only_in_annotated_syntaxes() {
    compare_html(
        &[editable(true)],
        Syntax::AnnotatedXhtml1,
        "<span data-non-generated-content=\"blocks\">Hi</span>",
    );
    compare_html(
        &[editable(false)],
        Syntax::AnnotatedHtml5,
        "<div data-non-generated-content=\"blocks\"><p>Hi</p></div>",
    );
    compare_html(&[editable(false)], Syntax::Html5, "<p>Hi</p>");
}

#[test]
fn html_raw_in_other_syntaxes() {
    let raw = |syntax| {
        Block::Raw(NodeRaw {
            literal: "<b>x</b>".to_string(),
            syntax,
        })
    };
    compare_html(&[raw(Syntax::Plain)], Syntax::Html5, "&lt;b&gt;x&lt;/b&gt;");
    compare_html(
        &[raw(Syntax::Wiki)],
        Syntax::Html5,
        "<!-- raw wiki markup omitted -->",
    );
    compare_html(&[raw(Syntax::Xhtml1)], Syntax::Html5, "<b>x</b>");
}

#[test]
fn xml_anchor_tree() {
    let mut out = String::new();
    xml::format_blocks(&sample(), &mut out).unwrap();
    pretty_assertions::assert_eq!(
        out,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<blocks>\n",
            "  <raw syntax=\"html/5.0\" xml:space=\"preserve\">&lt;a href=&quot;/x&quot;&gt;</raw>\n",
            "  <group>\n",
            "    <paragraph>\n",
            "      <text xml:space=\"preserve\">Hi</text>\n",
            "      <space />\n",
            "      <text xml:space=\"preserve\">&lt;there&gt;</text>\n",
            "      <newline />\n",
            "    </paragraph>\n",
            "  </group>\n",
            "  <raw syntax=\"html/5.0\" xml:space=\"preserve\">&lt;/a&gt;</raw>\n",
            "</blocks>\n",
        )
    );
}

#[test]
fn xml_error_and_metadata() {
    let mut out = String::new();
    xml::format_blocks(
        &[Block::error("T", "a & b"), editable(true), Block::Group(vec![])],
        &mut out,
    )
    .unwrap();
    pretty_assertions::assert_eq!(
        out,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<blocks>\n",
            "  <macro id=\"error\" inline=\"false\" title=\"T\" xml:space=\"preserve\">a &amp; b</macro>\n",
            "  <metadata non-generated-content=\"blocks\">\n",
            "    <text xml:space=\"preserve\">Hi</text>\n",
            "  </metadata>\n",
            "  <group />\n",
            "</blocks>\n",
        )
    );
}

#[test]
fn syntax_ids() {
    for syntax in &Syntax::ALL {
        assert_eq!(syntax.id().parse::<Syntax>(), Ok(*syntax));
    }
    assert_eq!("HTML/5.0".parse::<Syntax>(), Ok(Syntax::Html5));
    assert!("markdown/1.2".parse::<Syntax>().is_err());
    assert_eq!(Syntax::family_of(None), crate::SyntaxFamily::Other);
    assert_eq!(
        Syntax::family_of(Some(Syntax::AnnotatedXhtml1)),
        crate::SyntaxFamily::AnnotatedEditable
    );
}
