//! Scoped access to the document's collection engine.
//!
//! A [`Collector`] is the transient engine resource behind one query: it is
//! acquired for a single native-filtered materialization and released when
//! dropped. The document refuses to open collectors after the host has
//! invalidated it, and tracks the open count so release-on-every-path is
//! observable.

use crate::planner::NativeFilter;

use super::document::{Document, DocumentError};
use super::element::Element;

/// A scoped collection cursor over one document.
pub struct Collector<'d> {
    doc: &'d Document,
}

impl<'d> Collector<'d> {
    pub(super) fn open(doc: &'d Document) -> Result<Self, DocumentError> {
        doc.register_collector()?;
        Ok(Self { doc })
    }

    /// Runs one engine-level query: every element passing the native filter,
    /// in collection-native order (ascending element id).
    pub fn matching(&self, filter: &NativeFilter) -> Vec<&'d Element> {
        self.doc
            .iter_elements()
            .filter(|element| filter.matches(element))
            .collect()
    }
}

impl Drop for Collector<'_> {
    fn drop(&mut self) {
        self.doc.release_collector();
    }
}

impl Document {
    /// Acquires a scoped collector.
    ///
    /// Fails with [`DocumentError::Unavailable`] once the host has
    /// invalidated the document.
    pub fn open_collector(&self) -> Result<Collector<'_>, DocumentError> {
        Collector::open(self)
    }
}
