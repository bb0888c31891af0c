//! Plan construction.
//!
//! Produces deterministic plans: same criteria, same plan. The rule order
//! below is a contract, not a heuristic. Native predicates narrow the
//! candidate set inside the engine before anything is materialized, and the
//! object-predicate chain is appended in a fixed order so results and
//! diagnostics are stable across invocations.
//!
//! Rule order:
//! 1. Base class filter (always): element is a view.
//! 2. Opaque caller filter, ANDed in.
//! 3. Discipline: "not set" sentinel → string equality against the blank
//!    field; any other value → integer equality against its code.
//! 4. Name, else title-on-sheet: exact equality without wildcards,
//!    like-match with them.
//! 5. Template reference: identity equality, invalid id for "no template".
//! 6. Per-candidate criteria, fixed order: system family, is-template,
//!    is-assembly, is-printable.
//! 7. Structural exclusions, always appended last: no internal/browser
//!    kinds, no internal keynote or titleblock-revision schedules.

use crate::criteria::{Input, ViewCriteria};
use crate::document::{BuiltInParam, ElementId, ViewKind};

use super::native::{NativeFilter, NativePredicate};
use super::pattern::has_wildcard;
use super::plan::QueryPlan;
use super::predicate::ObjectPredicate;

/// Builds query plans from criteria sets.
pub struct QueryPlanner;

impl QueryPlanner {
    /// Builds the plan for one invocation.
    ///
    /// Absent criteria contribute nothing; present criteria become native
    /// predicates where the engine can evaluate them and object predicates
    /// where only a materialized candidate can.
    pub fn plan(criteria: &ViewCriteria) -> QueryPlan {
        let mut native = NativeFilter::views();

        if let Input::Present(filter) = &criteria.filter {
            native = native.and(filter.clone());
        }

        if let Input::Present(discipline) = &criteria.discipline {
            let predicate = match discipline.code() {
                // Explicitly blank discipline: the field itself is empty.
                None => NativePredicate::eq_str(BuiltInParam::ViewDiscipline, ""),
                Some(code) => NativePredicate::eq_int(BuiltInParam::ViewDiscipline, code),
            };
            native = native.and(NativeFilter::Param(predicate));
        }

        if let Some((param, value)) = criteria.name_constraint() {
            let predicate = if has_wildcard(value) {
                NativePredicate::like_str(param, value)
            } else {
                NativePredicate::eq_str(param, value)
            };
            native = native.and(NativeFilter::Param(predicate));
        }

        if let Input::Present(template) = criteria.template {
            let id = template.unwrap_or(ElementId::INVALID);
            native = native.and(NativeFilter::Param(NativePredicate::eq_ref(
                BuiltInParam::ViewTemplate,
                id,
            )));
        }

        let mut object_predicates = Vec::new();

        if let Input::Present(family) = criteria.system_family {
            object_predicates.push(ObjectPredicate::new(
                format!("view system family is {family:?}"),
                move |doc, view| doc.view_family_of(view) == Some(family),
            ));
        }

        if let Input::Present(expected) = criteria.is_template {
            object_predicates.push(ObjectPredicate::new(
                format!("is_template == {expected}"),
                move |_, view| view.is_template() == expected,
            ));
        }

        if let Input::Present(expected) = criteria.is_assembly {
            object_predicates.push(ObjectPredicate::new(
                format!("is_assembly == {expected}"),
                move |_, view| view.is_assembly() == expected,
            ));
        }

        if let Input::Present(expected) = criteria.is_printable {
            object_predicates.push(ObjectPredicate::new(
                format!("is_printable == {expected}"),
                move |_, view| view.can_be_printed() == expected,
            ));
        }

        // Structural exclusions are not user-controlled: system-generated
        // views pass the class filter but are never meaningful results.
        object_predicates.push(ObjectPredicate::new(
            "view kind is not an internal or browser kind",
            |_, view| !view.kind().is_internal(),
        ));
        object_predicates.push(ObjectPredicate::new(
            "schedule is not an internal keynote or titleblock revision schedule",
            |_, view| {
                view.kind() != ViewKind::Schedule
                    || (!view.is_internal_keynote_schedule()
                        && !view.is_titleblock_revision_schedule())
            },
        ));

        QueryPlan {
            native,
            object_predicates,
        }
    }
}
