//! Turns a document reference into the location a link should point to.

use tracing::error;

use crate::adapters::DocumentResolver;
use crate::reference::DocumentReference;

/// The location a link points to: the URL of an existing document, or the serialized reference
/// when there's no such document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    location: String,
    exists: bool,
}

impl ResolvedLocation {
    /// The location string.
    pub fn as_str(&self) -> &str {
        &self.location
    }

    /// Whether the location is the URL of an existing document.
    pub fn exists(&self) -> bool {
        self.exists
    }
}

/// Resolves `reference` to a location.
///
/// A failing lookup is logged and treated as a missing document.
pub fn resolve(
    reference: &DocumentReference,
    documents: &dyn DocumentResolver,
) -> ResolvedLocation {
    let fallback = ResolvedLocation {
        location: reference.serialize(),
        exists: false,
    };

    let lookup = documents.exists(reference).and_then(|exists| {
        if exists {
            documents.url(reference).map(Some)
        } else {
            Ok(None)
        }
    });

    match lookup {
        Ok(Some(location)) => ResolvedLocation {
            location,
            exists: true,
        },
        Ok(None) => fallback,
        Err(e) => {
            error!(reference = %reference, error = %e, "can't check if reference exists");
            fallback
        }
    }
}
