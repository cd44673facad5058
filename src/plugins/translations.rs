//! Built-in English messages.

use phf::phf_map;

use crate::adapters::LocalizationAdapter;
use crate::link_group::{INVALID_URI_ERROR_DESCRIPTION, INVALID_URI_ERROR_HEADER};

static MESSAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "org.xwiki.contrib.link-format.invalid-uri-error.header" => "Invalid link",
    "org.xwiki.contrib.link-format.invalid-uri-error.description" =>
        "The link to [{0}] was blocked because it is not considered safe. If it is legitimate, \
         add its domain to the trusted domains of the URL security configuration.",
};

/// Translates the macro's own messages into English.  Unknown keys translate to themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTranslations;

impl DefaultTranslations {
    /// The keys this translator knows.
    pub const KEYS: [&'static str; 2] = [INVALID_URI_ERROR_HEADER, INVALID_URI_ERROR_DESCRIPTION];
}

impl LocalizationAdapter for DefaultTranslations {
    fn translate(&self, key: &str, parameters: &[&str]) -> String {
        match MESSAGES.get(key) {
            Some(message) => substitute(message, parameters),
            None => key.to_string(),
        }
    }
}

/// Replaces `{0}`, `{1}`, ... with the matching parameter.  Placeholders without a parameter are
/// left as they are.
pub(crate) fn substitute(message: &str, parameters: &[&str]) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let parameter = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|ix| parameters.get(ix))
                .map(|p| (close, *p))
        });

        match parameter {
            Some((close, p)) => {
                out.push_str(p);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
