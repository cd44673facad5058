//! The render-tree blocks a macro consumes and produces.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The core render-tree node enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A fragment of output written verbatim in the given syntax.  Never escaped by a formatter,
    /// so whoever builds one is responsible for escaping anything user-supplied inside it.
    Raw(NodeRaw),

    /// A grouping block.  Rendered as a `<div>` by the HTML formatter.
    Group(Vec<Block>),

    /// A transparent wrapper carrying metadata about its children for the host's editing UI.
    MetaData(NodeMetaData),

    /// A nested macro call which the host expands after this one returns.
    Macro(NodeMacro),

    /// **Content**.  A paragraph.  Contains inline content.
    Paragraph(Vec<Block>),

    /// **Content**.  A run of text without whitespace.
    Text(String),

    /// **Content**.  A single inter-word space.
    Space,

    /// **Content**.  A line break inside a paragraph.
    NewLine,
}

/// A raw output fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRaw {
    /// The fragment, as written to the output.
    pub literal: String,

    /// The syntax the fragment is written in.
    pub syntax: Syntax,
}

/// Children together with the metadata describing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMetaData {
    /// The wrapped blocks.
    pub children: Vec<Block>,

    /// Metadata about `children`.
    pub metadata: MetaData,
}

/// A macro call left in the tree for the host to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMacro {
    /// The macro identifier, e.g. `error`.
    pub id: String,

    /// Named macro parameters.
    pub parameters: BTreeMap<String, String>,

    /// The raw macro content, if any.
    pub content: Option<String>,

    /// Whether the call sits inline.
    pub inline: bool,
}

/// Ordered key/value metadata attached to a [`NodeMetaData`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetaData(BTreeMap<String, String>);

impl MetaData {
    /// Marks content that was authored by the user rather than generated by a macro.  The value
    /// names the kind of content, as declared by the macro's content descriptor.
    pub const NON_GENERATED_CONTENT: &'static str = "non-generated-content";

    /// Empty metadata.
    pub fn new() -> Self {
        MetaData(BTreeMap::new())
    }

    /// Adds (or replaces) an entry.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up an entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Block {
    /// A raw fragment of HTML 5.
    pub fn raw_html<S: Into<String>>(literal: S) -> Self {
        Block::Raw(NodeRaw {
            literal: literal.into(),
            syntax: Syntax::Html5,
        })
    }

    /// A non-inline `error` macro call carrying a title and a description.
    pub fn error<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert("title".to_string(), title.into());
        Block::Macro(NodeMacro {
            id: "error".to_string(),
            parameters,
            content: Some(description.into()),
            inline: false,
        })
    }

    /// Whether this block may sit inside a paragraph.
    pub fn is_inline(&self) -> bool {
        match *self {
            Block::Text(..) | Block::Space | Block::NewLine | Block::Raw(..) => true,
            Block::Macro(ref nm) => nm.inline,
            Block::MetaData(ref nmd) => nmd.children.iter().all(Block::is_inline),
            Block::Group(..) | Block::Paragraph(..) => false,
        }
    }

    /// The children of a container block, if it is one.
    pub fn children(&self) -> Option<&[Block]> {
        match *self {
            Block::Group(ref children) | Block::Paragraph(ref children) => Some(children),
            Block::MetaData(ref nmd) => Some(&nmd.children),
            _ => None,
        }
    }

    pub(crate) fn xml_node_name(&self) -> &'static str {
        match *self {
            Block::Raw(..) => "raw",
            Block::Group(..) => "group",
            Block::MetaData(..) => "metadata",
            Block::Macro(..) => "macro",
            Block::Paragraph(..) => "paragraph",
            Block::Text(..) => "text",
            Block::Space => "space",
            Block::NewLine => "newline",
        }
    }
}

/// An output syntax the host can render to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// HTML 5.
    Html5,

    /// XHTML 1.0.
    Xhtml1,

    /// HTML 5 annotated with editing metadata, as consumed by WYSIWYG editors.
    AnnotatedHtml5,

    /// XHTML 1.0 annotated with editing metadata.
    AnnotatedXhtml1,

    /// Plain text.
    Plain,

    /// Wiki markup.
    Wiki,
}

/// The two kinds of output a macro distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxFamily {
    /// An editable, annotated HTML syntax.
    AnnotatedEditable,

    /// Anything else.
    Other,
}

impl Syntax {
    /// All known syntaxes.
    pub const ALL: [Syntax; 6] = [
        Syntax::Html5,
        Syntax::Xhtml1,
        Syntax::AnnotatedHtml5,
        Syntax::AnnotatedXhtml1,
        Syntax::Plain,
        Syntax::Wiki,
    ];

    /// The identifier of this syntax, e.g. `html/5.0`.
    pub fn id(&self) -> &'static str {
        match *self {
            Syntax::Html5 => "html/5.0",
            Syntax::Xhtml1 => "xhtml/1.0",
            Syntax::AnnotatedHtml5 => "annotatedhtml/5.0",
            Syntax::AnnotatedXhtml1 => "annotatedxhtml/1.0",
            Syntax::Plain => "plain/1.0",
            Syntax::Wiki => "xwiki/2.1",
        }
    }

    /// Which family this syntax belongs to.
    pub fn family(&self) -> SyntaxFamily {
        match *self {
            Syntax::AnnotatedHtml5 | Syntax::AnnotatedXhtml1 => SyntaxFamily::AnnotatedEditable,
            Syntax::Html5 | Syntax::Xhtml1 | Syntax::Plain | Syntax::Wiki => SyntaxFamily::Other,
        }
    }

    /// The family of an optional target syntax; no syntax at all is [`SyntaxFamily::Other`].
    pub fn family_of(syntax: Option<Syntax>) -> SyntaxFamily {
        syntax.map_or(SyntaxFamily::Other, |s| s.family())
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a syntax identifier is not known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown syntax [{0}]")]
pub struct UnknownSyntax(pub String);

impl FromStr for Syntax {
    type Err = UnknownSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Syntax::ALL
            .iter()
            .find(|syntax| syntax.id().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownSyntax(s.to_string()))
    }
}
