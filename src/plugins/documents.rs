//! An in-memory document store.

use std::collections::HashMap;

use crate::adapters::{DocumentResolver, LookupError};
use crate::reference::DocumentReference;

/// A fixed set of documents, each served at a known URL.
#[derive(Debug, Default, Clone)]
pub struct StaticDocuments {
    urls: HashMap<DocumentReference, String>,
}

impl StaticDocuments {
    /// An empty store.
    pub fn new() -> Self {
        StaticDocuments::default()
    }

    /// Adds a document served at `url`.
    pub fn insert<U: Into<String>>(&mut self, reference: DocumentReference, url: U) {
        self.urls.insert(reference, url.into());
    }
}

impl DocumentResolver for StaticDocuments {
    fn exists(&self, reference: &DocumentReference) -> Result<bool, LookupError> {
        Ok(self.urls.contains_key(reference))
    }

    fn url(&self, reference: &DocumentReference) -> Result<String, LookupError> {
        self.urls
            .get(reference)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(reference.serialize()))
    }
}

