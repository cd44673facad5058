//! A fixed set of rights.

use std::collections::HashSet;

use crate::adapters::{AuthorizationAdapter, Right};

/// Grants the same rights whatever is asked.
#[derive(Debug, Default, Clone)]
pub struct FixedRights(HashSet<Right>);

impl FixedRights {
    /// No rights at all.
    pub fn none() -> Self {
        FixedRights(HashSet::new())
    }

    /// Viewing only.
    pub fn viewer() -> Self {
        FixedRights::none().with(Right::View)
    }

    /// Viewing and editing.
    pub fn editor() -> Self {
        FixedRights::viewer().with(Right::Edit)
    }

    /// These rights plus `right`.
    pub fn with(mut self, right: Right) -> Self {
        self.0.insert(right);
        self
    }
}

impl AuthorizationAdapter for FixedRights {
    fn has_access(&self, right: Right) -> bool {
        self.0.contains(&right)
    }
}
