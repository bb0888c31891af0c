//! Native filters: constraints the collection engine evaluates itself,
//! before any candidate is materialized.
//!
//! A native filter is a tree of class checks and single-parameter
//! predicates composed by logical AND. Filters are plain serializable data
//! so a host can construct an opaque filter on its side of the binding
//! layer and pass it through unchanged.

use serde::{Deserialize, Serialize};

use crate::document::{BuiltInParam, Element, ElementClass, ElementId};

use super::pattern::like_match;

/// Comparison applied to one built-in parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamOp {
    /// Integer equality against the parameter's integer value
    EqInt(i32),
    /// String equality against the parameter's string value
    EqStr(String),
    /// Wildcard match against the parameter's string value
    LikeStr(String),
    /// Identity equality against the parameter's reference value
    EqRef(ElementId),
}

impl ParamOp {
    pub fn op_name(&self) -> &'static str {
        match self {
            ParamOp::EqInt(_) => "eq_int",
            ParamOp::EqStr(_) => "eq_str",
            ParamOp::LikeStr(_) => "like_str",
            ParamOp::EqRef(_) => "eq_ref",
        }
    }
}

/// An indexed, engine-pushable constraint over a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativePredicate {
    pub param: BuiltInParam,
    pub op: ParamOp,
}

impl NativePredicate {
    pub fn eq_int(param: BuiltInParam, value: i32) -> Self {
        Self {
            param,
            op: ParamOp::EqInt(value),
        }
    }

    pub fn eq_str(param: BuiltInParam, value: impl Into<String>) -> Self {
        Self {
            param,
            op: ParamOp::EqStr(value.into()),
        }
    }

    pub fn like_str(param: BuiltInParam, pattern: impl Into<String>) -> Self {
        Self {
            param,
            op: ParamOp::LikeStr(pattern.into()),
        }
    }

    pub fn eq_ref(param: BuiltInParam, id: ElementId) -> Self {
        Self {
            param,
            op: ParamOp::EqRef(id),
        }
    }

    /// Evaluates this predicate against an element.
    ///
    /// Strict semantics: a parameter the element does not carry, or carries
    /// with a different type, never matches. No coercion.
    pub fn matches(&self, element: &Element) -> bool {
        let Some(view) = element.as_view() else {
            return false;
        };
        match &self.op {
            ParamOp::EqInt(expected) => view.param_int(self.param) == Some(*expected),
            ParamOp::EqStr(expected) => view.param_str(self.param) == Some(expected.as_str()),
            ParamOp::LikeStr(pattern) => view
                .param_str(self.param)
                .is_some_and(|value| like_match(value, pattern)),
            ParamOp::EqRef(expected) => view.param_ref(self.param) == Some(*expected),
        }
    }
}

/// A composable native filter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeFilter {
    /// Matches every element
    PassAll,
    /// Matches elements of one class
    Class(ElementClass),
    /// Matches elements passing a parameter predicate
    Param(NativePredicate),
    /// Matches elements passing every sub-filter
    All(Vec<NativeFilter>),
}

impl NativeFilter {
    /// The base filter every view query starts from.
    pub fn views() -> Self {
        NativeFilter::Class(ElementClass::View)
    }

    /// ANDs another filter onto this one, flattening nested `All` nodes on
    /// the left spine so plans stay inspectable.
    pub fn and(self, other: NativeFilter) -> Self {
        match self {
            NativeFilter::All(mut filters) => {
                filters.push(other);
                NativeFilter::All(filters)
            }
            first => NativeFilter::All(vec![first, other]),
        }
    }

    /// Evaluates the filter tree against an element.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            NativeFilter::PassAll => true,
            NativeFilter::Class(class) => element.class() == *class,
            NativeFilter::Param(predicate) => predicate.matches(element),
            NativeFilter::All(filters) => filters.iter().all(|f| f.matches(element)),
        }
    }

    /// Number of predicate leaves, for plan diagnostics.
    pub fn leaf_count(&self) -> usize {
        match self {
            NativeFilter::PassAll => 0,
            NativeFilter::Class(_) | NativeFilter::Param(_) => 1,
            NativeFilter::All(filters) => filters.iter().map(NativeFilter::leaf_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Discipline, Document, ViewElement, ViewKind};

    fn doc_with_view(view: ViewElement) -> (Document, ElementId) {
        let mut doc = Document::new();
        let id = doc.add_view(view);
        (doc, id)
    }

    #[test]
    fn test_class_filter() {
        let mut doc = Document::new();
        doc.add_view(ViewElement::new(ViewKind::FloorPlan, "Plan"));
        doc.add_family_type(crate::document::ViewFamily::FloorPlan);

        let filter = NativeFilter::views();
        let collector = doc.open_collector().unwrap();
        assert_eq!(collector.matching(&filter).len(), 1);
    }

    #[test]
    fn test_eq_int_on_blank_discipline_never_matches() {
        let (doc, id) = doc_with_view(ViewElement::new(ViewKind::FloorPlan, "Plan"));
        let element = doc.element(id).unwrap();

        let p = NativePredicate::eq_int(BuiltInParam::ViewDiscipline, 1);
        assert!(!p.matches(element));
    }

    #[test]
    fn test_eq_str_blank_discipline() {
        let (doc, id) = doc_with_view(ViewElement::new(ViewKind::FloorPlan, "Plan"));
        let element = doc.element(id).unwrap();

        let blank = NativePredicate::eq_str(BuiltInParam::ViewDiscipline, "");
        assert!(blank.matches(element));

        let (doc, id) = doc_with_view(
            ViewElement::new(ViewKind::FloorPlan, "Plan").with_discipline(Discipline::Electrical),
        );
        assert!(!blank.matches(doc.element(id).unwrap()));
    }

    #[test]
    fn test_like_predicate() {
        let (doc, id) = doc_with_view(ViewElement::new(ViewKind::FloorPlan, "Level 1 - Plan"));
        let element = doc.element(id).unwrap();

        assert!(NativePredicate::like_str(BuiltInParam::ViewName, "Level 1*").matches(element));
        assert!(!NativePredicate::like_str(BuiltInParam::ViewName, "Level 2*").matches(element));
    }

    #[test]
    fn test_ref_predicate_unassigned_template() {
        let (doc, id) = doc_with_view(ViewElement::new(ViewKind::Section, "S"));
        let element = doc.element(id).unwrap();

        let none = NativePredicate::eq_ref(BuiltInParam::ViewTemplate, ElementId::INVALID);
        assert!(none.matches(element));

        let some = NativePredicate::eq_ref(BuiltInParam::ViewTemplate, ElementId(3));
        assert!(!some.matches(element));
    }

    #[test]
    fn test_and_flattens_left_spine() {
        let filter = NativeFilter::views()
            .and(NativeFilter::PassAll)
            .and(NativeFilter::Param(NativePredicate::eq_str(
                BuiltInParam::ViewName,
                "x",
            )));

        match filter {
            NativeFilter::All(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected All, got {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch_never_matches() {
        let (doc, id) = doc_with_view(ViewElement::new(ViewKind::FloorPlan, "Plan"));
        let element = doc.element(id).unwrap();

        // Name is a string parameter; an integer predicate on it is a
        // caller contract violation and simply matches nothing.
        let p = NativePredicate::eq_int(BuiltInParam::ViewName, 7);
        assert!(!p.matches(element));
    }

    #[test]
    fn test_serde_round_trip_for_host_boundary() {
        let filter = NativeFilter::views().and(NativeFilter::Param(NativePredicate::eq_int(
            BuiltInParam::ViewDiscipline,
            2,
        )));
        let json = serde_json::to_string(&filter).unwrap();
        let back: NativeFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(filter, back);
    }
}
