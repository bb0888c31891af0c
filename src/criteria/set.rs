//! The full criteria set for one view query.

use crate::document::{BuiltInParam, Discipline, ElementId, ViewFamily};
use crate::planner::NativeFilter;

use super::input::Input;

/// The optional criteria a caller may supply, each independently
/// toggleable. Every slot defaults to [`Input::Absent`]; construction is
/// builder-style.
///
/// `name` and `title_on_sheet` are mutually exclusive in priority: when
/// both are present, `name` is used and `title_on_sheet` is silently
/// ignored. [`ViewCriteria::name_constraint`] resolves that rule.
#[derive(Debug, Clone, Default)]
pub struct ViewCriteria {
    /// Opaque caller-supplied native filter, ANDed into the plan.
    pub filter: Input<NativeFilter>,
    /// Discipline, including the explicit "not set" sentinel.
    pub discipline: Input<Discipline>,
    /// View system family, resolved per candidate via its type descriptor.
    pub system_family: Input<ViewFamily>,
    /// View name, exact or wildcard.
    pub name: Input<String>,
    /// Title on sheet, exact or wildcard; ignored when `name` is present.
    pub title_on_sheet: Input<String>,
    /// View template reference; present-with-`None` selects views with no
    /// template assigned.
    pub template: Input<Option<ElementId>>,
    pub is_template: Input<bool>,
    pub is_assembly: Input<bool>,
    pub is_printable: Input<bool>,
}

impl ViewCriteria {
    /// Criteria imposing no constraint beyond the base view filter.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: NativeFilter) -> Self {
        self.filter = Input::Present(filter);
        self
    }

    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = Input::Present(discipline);
        self
    }

    pub fn with_system_family(mut self, family: ViewFamily) -> Self {
        self.system_family = Input::Present(family);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Input::Present(name.into());
        self
    }

    pub fn with_title_on_sheet(mut self, title: impl Into<String>) -> Self {
        self.title_on_sheet = Input::Present(title.into());
        self
    }

    /// Constrains to views whose template is the given view.
    pub fn with_template(mut self, template: ElementId) -> Self {
        self.template = Input::Present(Some(template));
        self
    }

    /// Constrains to views with no template assigned.
    pub fn with_no_template(mut self) -> Self {
        self.template = Input::Present(None);
        self
    }

    pub fn with_is_template(mut self, value: bool) -> Self {
        self.is_template = Input::Present(value);
        self
    }

    pub fn with_is_assembly(mut self, value: bool) -> Self {
        self.is_assembly = Input::Present(value);
        self
    }

    pub fn with_is_printable(mut self, value: bool) -> Self {
        self.is_printable = Input::Present(value);
        self
    }

    /// Resolves the name/title priority rule: the name constraint wins,
    /// the title constraint applies only when no name was supplied.
    ///
    /// Returns the parameter to constrain and the supplied text.
    pub fn name_constraint(&self) -> Option<(BuiltInParam, &str)> {
        if let Input::Present(name) = &self.name {
            return Some((BuiltInParam::ViewName, name.as_str()));
        }
        if let Input::Present(title) = &self.title_on_sheet {
            return Some((BuiltInParam::ViewDescription, title.as_str()));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let criteria = ViewCriteria::any();
        assert!(criteria.filter.is_absent());
        assert!(criteria.discipline.is_absent());
        assert!(criteria.name_constraint().is_none());
    }

    #[test]
    fn test_name_wins_over_title() {
        let criteria = ViewCriteria::any()
            .with_name("Level 1")
            .with_title_on_sheet("Ground Floor");

        let (param, value) = criteria.name_constraint().unwrap();
        assert_eq!(param, BuiltInParam::ViewName);
        assert_eq!(value, "Level 1");
    }

    #[test]
    fn test_title_applies_without_name() {
        let criteria = ViewCriteria::any().with_title_on_sheet("Ground Floor");

        let (param, value) = criteria.name_constraint().unwrap();
        assert_eq!(param, BuiltInParam::ViewDescription);
        assert_eq!(value, "Ground Floor");
    }

    #[test]
    fn test_no_template_is_present() {
        let criteria = ViewCriteria::any().with_no_template();
        assert!(criteria.template.is_present());
        assert_eq!(criteria.template.value(), Some(&None));
    }
}
