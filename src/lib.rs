//! A wiki macro which wraps arbitrary content in a clickable link to a document, without ever
//! linking somewhere the URL security policy doesn't trust.
//!
//! Given a document reference, the macro resolves the URL of the document (falling back to the
//! serialized reference when there's no such document), checks it against the policy, and
//! produces one of four outputs:
//!
//! * an unsafe location, for someone who can edit the page: an error report naming the location;
//! * an unsafe location, for anyone else: nothing;
//! * a safe location, rendered for a WYSIWYG editor: the content marked as user-authored;
//! * a safe location, otherwise: the content between `<a href="...">` and `</a>`.
//!
//! ```
//! use link_group::plugins::{
//!     DefaultTranslations, FixedRights, PlainTextParser, StaticDocuments, TrustedDomains,
//! };
//! use link_group::{html, LinkGroup, MacroContext, Options, Services, Syntax};
//! use std::collections::HashMap;
//!
//! let options = Options::default();
//! let documents = StaticDocuments::new();
//! let security = TrustedDomains::new(&options.policy).unwrap();
//! let rights = FixedRights::editor();
//! let macro_ = LinkGroup::new(
//!     Services {
//!         documents: &documents,
//!         security: &security,
//!         authorization: &rights,
//!         localization: &DefaultTranslations,
//!         parser: &PlainTextParser,
//!     },
//!     options.render,
//! );
//!
//! let mut parameters = HashMap::new();
//! parameters.insert("reference".to_string(), "Main.Missing".to_string());
//! let context = MacroContext {
//!     target_syntax: Some(Syntax::Html5),
//!     ..MacroContext::default()
//! };
//!
//! let blocks = macro_.execute_raw(&parameters, Some("hi"), &context).unwrap();
//! assert!(html::blocks_to_html(&blocks, Syntax::Html5).starts_with(
//!     "<div class=\"box errormessage\"><strong>Invalid link</strong> \
//!      The link to [xwiki:Main.Missing] was blocked"
//! ));
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![allow(
    unknown_lints,
    clippy::doc_markdown,
    cyclomatic_complexity,
    clippy::bool_to_int_with_if,
    clippy::too_many_arguments
)]

pub mod adapters;
mod character_set;
pub mod html;
mod link_group;
pub mod nodes;
mod options;
pub mod plugins;
mod reference;
pub mod render;
pub mod resolver;
pub mod validator;
pub mod xml;

pub use crate::adapters::{
    AuthorizationAdapter, ContentParser, DocumentResolver, LocalizationAdapter, LookupError,
    ParseError, Right, Services, UrlPolicyError, UrlSecurityAdapter,
};
pub use crate::link_group::{
    LinkGroup, MacroContext, MacroDescriptor, MacroError, INVALID_URI_ERROR_DESCRIPTION,
    INVALID_URI_ERROR_HEADER,
};
pub use crate::nodes::{Block, MetaData, Syntax, SyntaxFamily};
pub use crate::options::{Options, RenderOptions, UrlPolicyOptions, DEFAULT_BASE_URL};
pub use crate::reference::{DocumentReference, LinkGroupParameters, ReferenceError};
pub use crate::resolver::ResolvedLocation;
pub use crate::validator::{SafeUri, Validation};

#[cfg(feature = "bon")]
pub use crate::options::{RenderOptionsBuilder, UrlPolicyOptionsBuilder};
