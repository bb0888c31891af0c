//! Plan Builder subsystem.
//!
//! Classifies every present criterion as either a native predicate the
//! collection engine can evaluate before materializing anything, or an
//! object predicate evaluated per materialized candidate, and composes
//! both into one immutable [`QueryPlan`].
//!
//! # Design Principles
//!
//! - Deterministic: same criteria → same plan
//! - Pushdown first: every engine-expressible constraint narrows the
//!   candidate set before materialization
//! - Fixed chain order: object predicates always evaluate in the same
//!   order, with the structural exclusions last
//! - Absent ≠ empty: an unsupplied criterion is no constraint; a supplied
//!   "none" value is a specific one

mod native;
mod pattern;
mod plan;
mod planner;
mod predicate;

pub use native::{NativeFilter, NativePredicate, ParamOp};
pub use pattern::{has_wildcard, like_match};
pub use plan::QueryPlan;
pub use planner::QueryPlanner;
pub use predicate::ObjectPredicate;
