//! Adapter traits for the services a macro depends on.
//!
//! The host supplies one implementation of each trait; see the `plugins` module for simple
//! implementations.  Every adapter must be safe to share between threads, since a host may
//! render several documents at once with the same macro instance.

use url::Url;

use crate::nodes::Block;
use crate::reference::DocumentReference;
use crate::MacroContext;

/// Looks up documents.
pub trait DocumentResolver: Send + Sync {
    /// Whether a document exists at `reference`.
    fn exists(&self, reference: &DocumentReference) -> Result<bool, LookupError>;

    /// The URL at which the document at `reference` is served.
    fn url(&self, reference: &DocumentReference) -> Result<String, LookupError>;
}

/// Returned by a [`DocumentResolver`] when a lookup can't be completed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The document store has no document at this reference.
    #[error("no document at [{0}]")]
    NotFound(String),

    /// The document store failed.
    #[error("document store failure: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Decides whether a location may be linked to.
pub trait UrlSecurityAdapter: Send + Sync {
    /// Parses `location` and checks it against the URL security policy.  The returned URL is safe
    /// to emit as a link target.
    fn parse_to_safe_uri(&self, location: &str) -> Result<Url, UrlPolicyError>;
}

/// Returned by a [`UrlSecurityAdapter`] for a location which must not be linked to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlPolicyError {
    /// The location is not a URL at all.
    #[error("malformed location: {0}")]
    Syntax(#[from] url::ParseError),

    /// The location points at a host outside the trusted domains.
    #[error("domain [{0}] is not trusted")]
    UntrustedDomain(String),

    /// The location uses a scheme outside the trusted schemes.
    #[error("scheme [{0}] is not trusted")]
    UntrustedScheme(String),
}

impl UrlPolicyError {
    /// Whether the location parsed fine but was refused by the policy.
    pub fn is_security(&self) -> bool {
        !matches!(self, UrlPolicyError::Syntax(..))
    }
}

/// Rights a user can hold on the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Right {
    /// Viewing the document.
    View,

    /// Editing the document.
    Edit,
}

/// Answers permission questions about the current user and document.
pub trait AuthorizationAdapter: Send + Sync {
    /// Whether the current user holds `right` on the current document.
    fn has_access(&self, right: Right) -> bool;
}

/// Translates messages into the current user's language.
pub trait LocalizationAdapter: Send + Sync {
    /// The plain-text translation of `key`, with positional `parameters` substituted.
    fn translate(&self, key: &str, parameters: &[&str]) -> String;
}

/// Parses macro content into blocks.
pub trait ContentParser: Send + Sync {
    /// Parses `content`.  When `inline` is set the result must only hold inline blocks.
    fn parse(
        &self,
        content: &str,
        context: &MacroContext,
        inline: bool,
    ) -> Result<Vec<Block>, ParseError>;
}

/// Returned by a [`ContentParser`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse content at offset {offset}: {message}")]
pub struct ParseError {
    /// Byte offset of the problem in the content.
    pub offset: usize,

    /// What went wrong.
    pub message: String,
}

/// The services a macro call needs, borrowed from the host.
#[derive(Clone, Copy)]
pub struct Services<'s> {
    /// Document lookups.
    pub documents: &'s dyn DocumentResolver,

    /// The URL security policy.
    pub security: &'s dyn UrlSecurityAdapter,

    /// Permission checks.
    pub authorization: &'s dyn AuthorizationAdapter,

    /// Message translation.
    pub localization: &'s dyn LocalizationAdapter,

    /// Parsing of macro content.
    pub parser: &'s dyn ContentParser,
}

impl<'s> std::fmt::Debug for Services<'s> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        formatter.write_str("<link_group::adapters::Services>")
    }
}
