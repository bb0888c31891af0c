//! The in-memory document model and its collection engine.
//!
//! Queries treat everything here as read-only: elements are materialized
//! through a scoped [`Collector`] and never mutated. The document also
//! answers the one capability lookup the planner cannot push down:
//! resolving a view's type descriptor to its system family.

mod collector;
mod document;
mod element;
mod types;

pub use collector::Collector;
pub use document::{Document, DocumentError};
pub use element::{Element, ElementId, ViewElement, ViewFamilyType};
pub use types::{BuiltInParam, Discipline, ElementClass, ViewFamily, ViewKind};
