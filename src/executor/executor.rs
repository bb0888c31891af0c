//! Query execution.
//!
//! Execution flow (strict order):
//! 1. Acquire one scoped collector from the document
//! 2. Materialize the native-filtered candidate set, once
//! 3. Apply the object-predicate chain lazily per candidate, in plan
//!    order, short-circuiting on the first failing predicate
//! 4. Return the survivors in collection-native order
//!
//! The collector is released on every exit path, the document is never
//! re-queried, and no candidate is mutated.

use crate::document::Document;
use crate::observability::{Logger, Severity};
use crate::planner::QueryPlan;

use super::errors::ExecutorResult;
use super::result::QueryResults;

/// Execution options, conservative by default.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Emit a structured `query_executed` event per successful run.
    pub log_events: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { log_events: false }
    }
}

impl QueryOptions {
    /// Options with event logging enabled.
    pub fn logged() -> Self {
        Self { log_events: true }
    }
}

/// Executes query plans against one document.
pub struct QueryExecutor<'d> {
    doc: &'d Document,
    options: QueryOptions,
}

impl<'d> QueryExecutor<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self {
            doc,
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(doc: &'d Document, options: QueryOptions) -> Self {
        Self { doc, options }
    }

    /// Executes a plan, consuming it.
    ///
    /// Deterministic: the same plan against an unchanged document yields
    /// the same ordered results. An empty candidate set is a valid result;
    /// the predicate chain is never invoked for it.
    pub fn execute(&self, plan: QueryPlan) -> ExecutorResult<QueryResults<'d>> {
        let collector = self.doc.open_collector()?;
        let candidates = collector.matching(&plan.native);

        let mut scanned_count = 0;
        let mut views = Vec::new();

        for element in candidates {
            // The native filter composes onto the base view class filter,
            // so non-view elements only appear under a degenerate opaque
            // filter; they are not candidates.
            let Some(view) = element.as_view() else {
                continue;
            };
            scanned_count += 1;

            if plan
                .object_predicates
                .iter()
                .all(|predicate| predicate.evaluate(self.doc, view))
            {
                views.push(view);
            }
        }

        let results = QueryResults {
            returned_count: views.len(),
            scanned_count,
            views,
        };

        if self.options.log_events {
            Logger::log(
                Severity::Info,
                "query_executed",
                &[
                    ("plan", &plan.summary()),
                    ("returned", &results.returned_count.to_string()),
                    ("scanned", &results.scanned_count.to_string()),
                ],
            );
        }

        Ok(results)
    }
}
