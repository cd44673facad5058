//! Document references and the parameters of the link-group macro.

use std::collections::HashMap;
use std::fmt;

use crate::MacroError;

/// Characters escaped with a backslash inside a serialized reference.
const ESCAPED: [char; 3] = ['\\', '.', ':'];

/// A reference to a document: a wiki, a non-empty chain of nested spaces, and a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentReference {
    wiki: String,
    spaces: Vec<String>,
    page: String,
}

/// Returned when a reference can't be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// Nothing to parse.
    #[error("empty document reference")]
    Empty,

    /// A reference needs at least one space before the page name.
    #[error("document reference [{0}] names no space")]
    MissingSpace(String),

    /// One of the names making up the reference is empty.
    #[error("document reference [{0}] contains an empty name")]
    EmptyName(String),
}

impl DocumentReference {
    /// Builds a reference, checking that no name is empty and that there's at least one space.
    pub fn new<W, S, P>(wiki: W, spaces: S, page: P) -> Result<Self, ReferenceError>
    where
        W: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        P: Into<String>,
    {
        let reference = DocumentReference {
            wiki: wiki.into(),
            spaces: spaces.into_iter().map(Into::into).collect(),
            page: page.into(),
        };

        if reference.spaces.is_empty() {
            return Err(ReferenceError::MissingSpace(reference.serialize()));
        }
        if reference.wiki.is_empty()
            || reference.page.is_empty()
            || reference.spaces.iter().any(String::is_empty)
        {
            return Err(ReferenceError::EmptyName(reference.serialize()));
        }

        Ok(reference)
    }

    /// Parses `[wiki:]Space[.Space...].Page`.  A backslash escapes the next character.  When no
    /// wiki is given, `default_wiki` is used.
    pub fn parse(input: &str, default_wiki: &str) -> Result<Self, ReferenceError> {
        if input.trim().is_empty() {
            return Err(ReferenceError::Empty);
        }

        let mut wiki = None;
        let mut names = vec![];
        let mut current = String::new();
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => current.push('\\'),
                },
                ':' if wiki.is_none() && names.is_empty() => {
                    wiki = Some(std::mem::take(&mut current));
                }
                '.' => names.push(std::mem::take(&mut current)),
                c => current.push(c),
            }
        }
        names.push(current);

        let page = names.pop().unwrap_or_default();
        let wiki = wiki.unwrap_or_else(|| default_wiki.to_string());
        DocumentReference::new(wiki, names, page)
    }

    /// The wiki the document lives in.
    pub fn wiki(&self) -> &str {
        &self.wiki
    }

    /// The chain of spaces, outermost first.
    pub fn spaces(&self) -> &[String] {
        &self.spaces
    }

    /// The page name.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// The canonical string form, `wiki:Space.Page`.  Always succeeds, and [`parse`] reads it
    /// back to an equal reference.
    ///
    /// [`parse`]: DocumentReference::parse
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        push_escaped(&mut out, &self.wiki);
        out.push(':');
        for space in &self.spaces {
            push_escaped(&mut out, space);
            out.push('.');
        }
        push_escaped(&mut out, &self.page);
        out
    }
}

fn push_escaped(out: &mut String, name: &str) {
    for c in name.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}

impl fmt::Display for DocumentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Parameters of the link-group macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGroupParameters {
    /// The document to link to.
    pub reference: DocumentReference,
}

impl LinkGroupParameters {
    /// The name of the mandatory reference parameter.
    pub const REFERENCE: &'static str = "reference";

    /// Builds the parameters from the raw values written in the macro call.  Parameter names are
    /// matched case-insensitively.
    pub fn from_parameters(
        parameters: &HashMap<String, String>,
        default_wiki: &str,
    ) -> Result<Self, MacroError> {
        let raw = parameters
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(Self::REFERENCE))
            .map(|(_, value)| value)
            .ok_or(MacroError::MissingParameter(Self::REFERENCE))?;

        let reference =
            DocumentReference::parse(raw, default_wiki).map_err(|source| {
                MacroError::InvalidReference {
                    value: raw.clone(),
                    source,
                }
            })?;

        Ok(LinkGroupParameters { reference })
    }
}

impl From<DocumentReference> for LinkGroupParameters {
    fn from(reference: DocumentReference) -> Self {
        LinkGroupParameters { reference }
    }
}
