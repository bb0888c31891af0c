//! The immutable query plan.

use super::native::NativeFilter;
use super::predicate::ObjectPredicate;

/// One invocation's query plan: the composed native filter handed to the
/// collection engine, followed by the ordered in-memory predicate chain.
///
/// A plan is built fresh per invocation and consumed by value by the
/// executor; it is never persisted or cached.
#[derive(Debug)]
pub struct QueryPlan {
    /// Composed native filter, pushed down before materialization.
    pub native: NativeFilter,
    /// In-memory predicates, applied lazily per candidate in this order.
    pub object_predicates: Vec<ObjectPredicate>,
}

impl QueryPlan {
    /// One-line plan shape for log events.
    pub fn summary(&self) -> String {
        format!(
            "native_leaves={} object_predicates={}",
            self.native.leaf_count(),
            self.object_predicates.len()
        )
    }

    /// The predicate reasons in evaluation order, for diagnostics.
    pub fn predicate_reasons(&self) -> Vec<&str> {
        self.object_predicates
            .iter()
            .map(ObjectPredicate::reason)
            .collect()
    }
}
