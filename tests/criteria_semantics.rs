//! Criteria Semantics Tests
//!
//! "Not supplied" and "supplied with a none-like value" are different
//! states with different meanings. These tests pin the distinction
//! end-to-end, plus the presence-gated boolean semantics and the derived
//! system-family classification.

use viewfinder::criteria::{Input, ViewCriteria};
use viewfinder::document::{Discipline, Document, ViewElement, ViewFamily, ViewKind};
use viewfinder::run_query;

// =============================================================================
// Helper Functions
// =============================================================================

fn doc_with_templates() -> Document {
    let mut doc = Document::new();
    doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Level 1"));
    doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Plan Template").as_template());
    doc.add_view(ViewElement::new(ViewKind::Section, "Assembly View").as_assembly());
    doc.add_view(ViewElement::new(ViewKind::DraftingView, "Draft").printable(false));
    doc
}

// =============================================================================
// Presence-Gated Booleans
// =============================================================================

/// An unconnected boolean slot filters nothing.
#[test]
fn test_absent_booleans_keep_everything() {
    let doc = doc_with_templates();
    let results = run_query(&doc, &ViewCriteria::any()).unwrap();
    assert_eq!(results.len(), 4);
}

#[test]
fn test_is_template_true_and_false_partition_views() {
    let doc = doc_with_templates();

    let templates =
        run_query(&doc, &ViewCriteria::any().with_is_template(true)).unwrap();
    assert_eq!(templates.names(), vec!["Plan Template"]);

    let non_templates =
        run_query(&doc, &ViewCriteria::any().with_is_template(false)).unwrap();
    assert_eq!(non_templates.len(), 3);
    assert!(!non_templates.names().contains(&"Plan Template"));
}

#[test]
fn test_is_assembly_filters_assembly_views() {
    let doc = doc_with_templates();

    let assemblies =
        run_query(&doc, &ViewCriteria::any().with_is_assembly(true)).unwrap();
    assert_eq!(assemblies.names(), vec!["Assembly View"]);
}

#[test]
fn test_is_printable_false_selects_unprintable() {
    let doc = doc_with_templates();

    let unprintable =
        run_query(&doc, &ViewCriteria::any().with_is_printable(false)).unwrap();
    assert_eq!(unprintable.names(), vec!["Draft"]);
}

// =============================================================================
// Present vs Absent
// =============================================================================

/// Absent discipline keeps blank-discipline views; the sentinel keeps only
/// them. Two different constraints from the same "no discipline" idea.
#[test]
fn test_absent_vs_sentinel_discipline_differ() {
    let mut doc = Document::new();
    doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Blank"));
    doc.add_view(
        ViewElement::new(ViewKind::FloorPlan, "Arch").with_discipline(Discipline::Architectural),
    );

    let absent = run_query(&doc, &ViewCriteria::any()).unwrap();
    assert_eq!(absent.len(), 2);

    let sentinel =
        run_query(&doc, &ViewCriteria::any().with_discipline(Discipline::NotSet)).unwrap();
    assert_eq!(sentinel.names(), vec!["Blank"]);
}

/// The same distinction expressed directly on the input type.
#[test]
fn test_input_states_are_distinct() {
    let absent: Input<Option<i32>> = Input::Absent;
    let present_none: Input<Option<i32>> = Input::Present(None);
    assert_ne!(absent, present_none);
}

// =============================================================================
// System Family
// =============================================================================

#[test]
fn test_system_family_resolved_through_type_descriptor() {
    let mut doc = Document::new();
    let drafting_type = doc.add_family_type(ViewFamily::Drafting);
    let section_type = doc.add_family_type(ViewFamily::Section);

    doc.add_view(ViewElement::new(ViewKind::DraftingView, "Draft").with_type(drafting_type));
    doc.add_view(ViewElement::new(ViewKind::Section, "Section A").with_type(section_type));

    let criteria = ViewCriteria::any().with_system_family(ViewFamily::Drafting);
    let results = run_query(&doc, &criteria).unwrap();
    assert_eq!(results.names(), vec!["Draft"]);
}

/// A view without a resolvable type descriptor never matches a family
/// criterion, and is untouched when the criterion is absent.
#[test]
fn test_unresolvable_type_descriptor() {
    let mut doc = Document::new();
    doc.add_view(ViewElement::new(ViewKind::Section, "Orphan"));

    let constrained = run_query(
        &doc,
        &ViewCriteria::any().with_system_family(ViewFamily::Section),
    )
    .unwrap();
    assert!(constrained.is_empty());

    let unconstrained = run_query(&doc, &ViewCriteria::any()).unwrap();
    assert_eq!(unconstrained.names(), vec!["Orphan"]);
}

// =============================================================================
// Family Types Are Not Candidates
// =============================================================================

/// Type descriptors share the element table but never appear as results.
#[test]
fn test_family_type_elements_not_returned() {
    let mut doc = Document::new();
    doc.add_family_type(ViewFamily::FloorPlan);
    doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Level 1"));

    let results = run_query(&doc, &ViewCriteria::any()).unwrap();
    assert_eq!(results.names(), vec!["Level 1"]);
    assert_eq!(results.scanned_count, 1);
}
