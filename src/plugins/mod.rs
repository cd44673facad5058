//! Simple implementations of the adapter traits, for hosts without their own services and for
//! the command-line tool.

mod documents;
mod plain_text;
mod rights;
pub(crate) mod translations;
mod trusted_domains;

pub use documents::StaticDocuments;
pub use plain_text::PlainTextParser;
pub use rights::FixedRights;
pub use translations::DefaultTranslations;
pub use trusted_domains::TrustedDomains;
