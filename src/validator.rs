//! Checks a location against the URL security policy.

use std::fmt;

use tracing::{debug, warn};
use url::Url;

use crate::adapters::UrlSecurityAdapter;

/// A location the URL security policy accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUri(Url);

impl SafeUri {
    /// The URL, serialized.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SafeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of validating a location.  Why a location is unsafe isn't kept; it is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The location may be linked to.
    Safe(SafeUri),

    /// The location is malformed or refused by the policy.
    Unsafe,
}

impl Validation {
    /// Whether the location may be linked to.
    pub fn is_safe(&self) -> bool {
        matches!(self, Validation::Safe(..))
    }
}

/// Validates `location` with `security`.
pub fn validate(location: &str, security: &dyn UrlSecurityAdapter) -> Validation {
    match security.parse_to_safe_uri(location) {
        Ok(url) => Validation::Safe(SafeUri(url)),
        Err(e) => {
            warn!(
                "Possible phishing attack, attempting to open a link to [{}], this request has \
                 been blocked. If the request was legitimate, please check the URL security \
                 configuration. You might need to add the domain related to this request to the \
                 list of trusted domains.",
                location
            );
            debug!(security = e.is_security(), "original error preventing to create a link: {}", e);
            Validation::Unsafe
        }
    }
}
