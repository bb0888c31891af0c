//! viewfinder - criteria-driven view queries over an in-memory CAD
//! document model.
//!
//! Given a set of optional, independently toggleable criteria, builds a
//! query plan that pushes every engine-expressible constraint into the
//! document's collection engine before materializing anything, then
//! applies the remaining constraints as a lazy in-memory predicate chain.
//!
//! ```
//! use viewfinder::criteria::ViewCriteria;
//! use viewfinder::document::{Document, ViewElement, ViewKind};
//!
//! let mut doc = Document::new();
//! doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Level 1"));
//! doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Level 2"));
//!
//! let criteria = ViewCriteria::any().with_name("Level 1*");
//! let results = viewfinder::run_query(&doc, &criteria).unwrap();
//! assert_eq!(results.names(), vec!["Level 1"]);
//! ```

pub mod criteria;
pub mod document;
pub mod executor;
pub mod observability;
pub mod planner;

use criteria::ViewCriteria;
use document::Document;
use executor::{ExecutorResult, QueryExecutor, QueryOptions, QueryResults};
use planner::QueryPlanner;

/// Plans and executes one view query with default options.
pub fn run_query<'d>(
    doc: &'d Document,
    criteria: &ViewCriteria,
) -> ExecutorResult<QueryResults<'d>> {
    run_query_with(doc, criteria, QueryOptions::default())
}

/// Plans and executes one view query.
///
/// The plan is built fresh from the criteria, consumed by the executor,
/// and discarded; nothing is cached between invocations.
pub fn run_query_with<'d>(
    doc: &'d Document,
    criteria: &ViewCriteria,
    options: QueryOptions,
) -> ExecutorResult<QueryResults<'d>> {
    let plan = QueryPlanner::plan(criteria);
    QueryExecutor::with_options(doc, options).execute(plan)
}
