//! Executor subsystem.
//!
//! Consumes one [`QueryPlan`](crate::planner::QueryPlan) against one
//! document and produces the ordered result sequence.
//!
//! # Invariants
//!
//! - One engine-level query per invocation, never a re-query
//! - The collector is released on every exit path
//! - Object predicates evaluate lazily in plan order, short-circuiting
//! - Candidates are never mutated

mod errors;
mod executor;
mod result;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult, Severity};
pub use executor::{QueryExecutor, QueryOptions};
pub use result::QueryResults;
