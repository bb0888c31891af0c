//! Object predicates: constraints that need a materialized candidate.

use std::fmt;

use crate::document::{Document, ViewElement};

/// An in-memory predicate over one materialized candidate.
///
/// The test is pure; evaluation order across a chain matters only for
/// performance. Each predicate carries a human-readable reason used in
/// plan diagnostics and log events.
pub struct ObjectPredicate {
    reason: String,
    test: Box<dyn Fn(&Document, &ViewElement) -> bool>,
}

impl ObjectPredicate {
    pub fn new(
        reason: impl Into<String>,
        test: impl Fn(&Document, &ViewElement) -> bool + 'static,
    ) -> Self {
        Self {
            reason: reason.into(),
            test: Box::new(test),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn evaluate(&self, doc: &Document, view: &ViewElement) -> bool {
        (self.test)(doc, view)
    }
}

impl fmt::Debug for ObjectPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPredicate")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}
