//! Result types for query execution.

use crate::document::{ElementId, ViewElement};

/// Result of one query execution: the surviving views in
/// collection-native order, plus scan statistics.
#[derive(Debug)]
pub struct QueryResults<'d> {
    /// Views in result order, borrowed from the document.
    pub views: Vec<&'d ViewElement>,
    /// Number of candidates the native filter materialized.
    pub scanned_count: usize,
    /// Number of candidates surviving the object-predicate chain.
    pub returned_count: usize,
}

impl<'d> QueryResults<'d> {
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'d ViewElement> + '_ {
        self.views.iter().copied()
    }

    /// The result identities in order.
    pub fn ids(&self) -> Vec<ElementId> {
        self.views.iter().map(|v| v.id()).collect()
    }

    /// The result names in order, for diagnostics and tests.
    pub fn names(&self) -> Vec<&'d str> {
        self.views.iter().map(|v| v.name()).collect()
    }
}
