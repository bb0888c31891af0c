//! The in-memory document: an ordered element table plus the bookkeeping
//! needed to hand out scoped collectors.

use std::cell::Cell;
use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use super::element::{Element, ElementId, ViewElement, ViewFamilyType};
use super::types::ViewFamily;

/// Errors raised by document access.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The host has invalidated the document (closed or unloaded it);
    /// no further collectors can be opened against it.
    #[error("document is no longer available")]
    Unavailable,
}

/// An in-memory CAD document owning a table of elements.
///
/// Elements are keyed by ascending [`ElementId`]; that iteration order is
/// the collection-native order every query result preserves. The document
/// is read-only to queries; mutation happens only through the host-facing
/// insertion methods.
#[derive(Debug)]
pub struct Document {
    elements: BTreeMap<ElementId, Element>,
    next_id: i64,
    available: Cell<bool>,
    open_collectors: Cell<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            next_id: 0,
            available: Cell::new(true),
            open_collectors: Cell::new(0),
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts a view element, assigning its identity. Returns the new id.
    pub fn add_view(&mut self, mut view: ViewElement) -> ElementId {
        let id = self.allocate_id();
        view.assign_identity(id, Uuid::new_v4());
        self.elements.insert(id, Element::View(view));
        id
    }

    /// Inserts a view-family type descriptor. Returns the new id.
    pub fn add_family_type(&mut self, family: ViewFamily) -> ElementId {
        let id = self.allocate_id();
        self.elements
            .insert(id, Element::FamilyType(ViewFamilyType::new(id, family)));
        id
    }

    /// Fetches an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Resolves a candidate's declared type descriptor to its system family.
    ///
    /// Returns `None` when the type reference is invalid, dangling, or does
    /// not point at a view-family type; such candidates simply never match a
    /// family predicate.
    pub fn view_family_of(&self, view: &ViewElement) -> Option<ViewFamily> {
        self.elements
            .get(&view.type_id())?
            .as_family_type()
            .map(|t| t.family())
    }

    /// Marks the document unavailable. Subsequent collector acquisition
    /// fails; queries in flight are unaffected.
    pub fn invalidate(&self) {
        self.available.set(false);
    }

    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    /// Number of elements of any class in the table.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of collectors currently open against this document.
    pub fn open_collector_count(&self) -> usize {
        self.open_collectors.get()
    }

    pub(super) fn register_collector(&self) -> Result<(), DocumentError> {
        if !self.available.get() {
            return Err(DocumentError::Unavailable);
        }
        self.open_collectors.set(self.open_collectors.get() + 1);
        Ok(())
    }

    pub(super) fn release_collector(&self) {
        let open = self.open_collectors.get();
        debug_assert!(open > 0, "collector released twice");
        self.open_collectors.set(open.saturating_sub(1));
    }

    pub(super) fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::types::ViewKind;

    #[test]
    fn test_ids_ascend_in_insertion_order() {
        let mut doc = Document::new();
        let a = doc.add_view(ViewElement::new(ViewKind::FloorPlan, "A"));
        let b = doc.add_view(ViewElement::new(ViewKind::Section, "B"));
        let c = doc.add_family_type(ViewFamily::Section);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_family_capability_lookup() {
        let mut doc = Document::new();
        let type_id = doc.add_family_type(ViewFamily::Elevation);
        let view_id =
            doc.add_view(ViewElement::new(ViewKind::Elevation, "North").with_type(type_id));

        let view = doc.element(view_id).unwrap().as_view().unwrap();
        assert_eq!(doc.view_family_of(view), Some(ViewFamily::Elevation));
    }

    #[test]
    fn test_family_lookup_dangling_type() {
        let mut doc = Document::new();
        let view_id = doc.add_view(
            ViewElement::new(ViewKind::FloorPlan, "Orphan").with_type(ElementId(9999)),
        );

        let view = doc.element(view_id).unwrap().as_view().unwrap();
        assert_eq!(doc.view_family_of(view), None);
    }

    #[test]
    fn test_family_lookup_through_non_type_element() {
        let mut doc = Document::new();
        let other_view = doc.add_view(ViewElement::new(ViewKind::Section, "S1"));
        let view_id =
            doc.add_view(ViewElement::new(ViewKind::Section, "S2").with_type(other_view));

        let view = doc.element(view_id).unwrap().as_view().unwrap();
        assert_eq!(doc.view_family_of(view), None);
    }

    #[test]
    fn test_invalidate() {
        let doc = Document::new();
        assert!(doc.is_available());
        doc.invalidate();
        assert!(!doc.is_available());
        assert!(doc.register_collector().is_err());
    }
}
