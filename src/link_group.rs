//! The link-group macro.

use std::collections::HashMap;

use tracing::debug;

use crate::adapters::{ParseError, Right, Services};
use crate::nodes::{Block, MetaData, Syntax};
use crate::options::RenderOptions;
use crate::reference::{LinkGroupParameters, ReferenceError};
use crate::render::{self, Shape};
use crate::resolver;
use crate::validator::{self, Validation};

/// Translation key of the error report's title.
pub const INVALID_URI_ERROR_HEADER: &str =
    "org.xwiki.contrib.link-format.invalid-uri-error.header";

/// Translation key of the error report's description; takes the location as parameter `{0}`.
pub const INVALID_URI_ERROR_DESCRIPTION: &str =
    "org.xwiki.contrib.link-format.invalid-uri-error.description";

/// Where and how a macro call is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroContext {
    /// Whether the call sits inside a paragraph.
    pub inline: bool,

    /// The syntax the host is rendering to, if known.
    pub target_syntax: Option<Syntax>,

    /// The wiki relative references are resolved in.
    pub default_wiki: String,
}

impl Default for MacroContext {
    fn default() -> Self {
        MacroContext {
            inline: false,
            target_syntax: None,
            default_wiki: "xwiki".to_string(),
        }
    }
}

/// Returned when a macro call can't produce any output.
#[derive(Debug, thiserror::Error)]
pub enum MacroError {
    /// A mandatory parameter was not given.
    #[error("missing mandatory parameter [{0}]")]
    MissingParameter(&'static str),

    /// The reference parameter is not a document reference.
    #[error("invalid reference [{value}]")]
    InvalidReference {
        /// The raw parameter value.
        value: String,
        /// Why it didn't parse.
        #[source]
        source: ReferenceError,
    },

    /// The macro content could not be parsed.
    #[error("failed to parse the macro content")]
    ContentParse(#[from] ParseError),
}

/// What a macro declares about itself to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroDescriptor {
    /// The macro identifier used in markup.
    pub id: &'static str,

    /// The human-readable name.
    pub name: &'static str,

    /// What the macro does.
    pub description: &'static str,

    /// What the macro content is for.
    pub content_description: &'static str,

    /// Whether content must be given.
    pub content_mandatory: bool,

    /// The kind of content, as recorded in non-generated-content metadata.
    pub content_type: &'static str,

    /// Categories the macro is listed under.
    pub default_categories: &'static [&'static str],
}

const DESCRIPTOR: MacroDescriptor = MacroDescriptor {
    id: "link-group",
    name: "Link group",
    description:
        "The link to point with the clickable macro. Can be a document reference or a http link.",
    content_description: "The content to be displayed in the link.",
    content_mandatory: false,
    content_type: "blocks",
    default_categories: &["Formatting"],
};

/// Wraps its content in a link to a document, provided the link is safe.
///
/// ```
/// # use link_group::*;
/// # use link_group::plugins::*;
/// let mut documents = StaticDocuments::new();
/// let target = DocumentReference::parse("Main.Help", "xwiki").unwrap();
/// documents.insert(target.clone(), "/bin/view/Main/Help");
///
/// let security = TrustedDomains::new(&UrlPolicyOptions::default()).unwrap();
/// let services = Services {
///     documents: &documents,
///     security: &security,
///     authorization: &FixedRights::none(),
///     localization: &DefaultTranslations,
///     parser: &PlainTextParser,
/// };
///
/// let macro_ = LinkGroup::new(services, RenderOptions::default());
/// let context = MacroContext { inline: true, ..MacroContext::default() };
/// let blocks = macro_.execute(&target.into(), Some("Get help"), &context).unwrap();
/// assert_eq!(
///     html::blocks_to_html(&blocks, Syntax::Html5),
///     "<a href=\"/bin/view/Main/Help\">Get help</a>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LinkGroup<'s> {
    services: Services<'s>,
    options: RenderOptions,
}

impl<'s> LinkGroup<'s> {
    /// A macro using `services`, rendering links per `options`.
    pub fn new(services: Services<'s>, options: RenderOptions) -> Self {
        LinkGroup { services, options }
    }

    /// Describes this macro.
    pub fn descriptor(&self) -> &'static MacroDescriptor {
        &DESCRIPTOR
    }

    /// The macro can be used inside a paragraph.
    pub fn supports_inline_mode(&self) -> bool {
        true
    }

    /// Executes the macro with raw parameter values.
    pub fn execute_raw(
        &self,
        parameters: &HashMap<String, String>,
        content: Option<&str>,
        context: &MacroContext,
    ) -> Result<Vec<Block>, MacroError> {
        let parameters = LinkGroupParameters::from_parameters(parameters, &context.default_wiki)?;
        self.execute(&parameters, content, context)
    }

    /// Executes the macro.
    ///
    /// An unsafe target never fails the call: editors get an error report, everyone else gets
    /// no output.  Only a content parse failure is an error.
    pub fn execute(
        &self,
        parameters: &LinkGroupParameters,
        content: Option<&str>,
        context: &MacroContext,
    ) -> Result<Vec<Block>, MacroError> {
        let location = resolver::resolve(&parameters.reference, self.services.documents);
        let validation = validator::validate(location.as_str(), self.services.security);

        let family = Syntax::family_of(context.target_syntax);
        let shape = render::select(&validation, family, || {
            self.services.authorization.has_access(Right::Edit)
        });
        debug!(location = location.as_str(), ?shape, "rendering link group");

        match shape {
            Shape::ErrorReport => Ok(render::error_report(
                self.services
                    .localization
                    .translate(INVALID_URI_ERROR_HEADER, &[]),
                self.services
                    .localization
                    .translate(INVALID_URI_ERROR_DESCRIPTION, &[location.as_str()]),
            )),
            Shape::Suppressed => Ok(vec![]),
            Shape::EditableContent => {
                let content = self.parse_content(content, context)?;
                Ok(render::editable_content(
                    content,
                    context.inline,
                    self.non_generated_content_metadata(),
                ))
            }
            Shape::Anchor => {
                debug_assert!(matches!(validation, Validation::Safe(..)));
                let content = self.parse_content(content, context)?;
                Ok(render::anchor(
                    location.as_str(),
                    content,
                    context.inline,
                    &self.options,
                ))
            }
        }
    }

    fn parse_content(
        &self,
        content: Option<&str>,
        context: &MacroContext,
    ) -> Result<Vec<Block>, MacroError> {
        match content {
            Some(content) if !content.is_empty() => Ok(self
                .services
                .parser
                .parse(content, context, context.inline)?),
            _ => Ok(vec![]),
        }
    }

    fn non_generated_content_metadata(&self) -> MetaData {
        let mut metadata = MetaData::new();
        metadata.add(MetaData::NON_GENERATED_CONTENT, DESCRIPTOR.content_type);
        metadata
    }
}
