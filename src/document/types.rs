//! Classification enums for document elements.
//!
//! These mirror the host document model: a view's kind is its concrete
//! presentation type, its system family is the classification carried by the
//! view-family type descriptor, and its discipline is an optionally-blank
//! integer-coded field.

use serde::{Deserialize, Serialize};

/// Element classes the collection engine can filter on without
/// materializing the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementClass {
    /// View elements (plans, sections, schedules, sheets, ...)
    #[serde(rename = "view")]
    View,
    /// View-family type descriptors
    #[serde(rename = "view_family_type")]
    ViewFamilyType,
}

/// Concrete kind of a view element.
///
/// `Internal`, `ProjectBrowser` and `SystemBrowser` are system-generated
/// kinds that are mechanically views but never meaningful to a caller;
/// every query excludes them unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    FloorPlan,
    CeilingPlan,
    Elevation,
    Section,
    ThreeD,
    DraftingView,
    Legend,
    Schedule,
    DrawingSheet,
    Walkthrough,
    Rendering,
    Internal,
    ProjectBrowser,
    SystemBrowser,
}

impl ViewKind {
    /// True for system-generated kinds that queries never return.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ViewKind::Internal | ViewKind::ProjectBrowser | ViewKind::SystemBrowser
        )
    }
}

/// System family carried by a view-family type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewFamily {
    FloorPlan,
    CeilingPlan,
    Elevation,
    Section,
    ThreeDimensional,
    Drafting,
    Legend,
    Schedule,
    Sheet,
    Walkthrough,
    ImageView,
}

/// View discipline, an integer-coded field that may be intentionally blank.
///
/// `NotSet` is an explicit sentinel: a caller supplying it asks for views
/// whose discipline field is blank, which is a different constraint from not
/// supplying a discipline at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    NotSet,
    Architectural,
    Structural,
    Mechanical,
    Electrical,
    Coordination,
}

impl Discipline {
    /// Integer code stored in the discipline field.
    ///
    /// `NotSet` has no code; it denotes the blank field, not a value in it.
    pub fn code(&self) -> Option<i32> {
        match self {
            Discipline::NotSet => None,
            Discipline::Architectural => Some(1),
            Discipline::Structural => Some(2),
            Discipline::Mechanical => Some(4),
            Discipline::Electrical => Some(8),
            Discipline::Coordination => Some(4095),
        }
    }

    /// Label used when the discipline field is read as a string.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::NotSet => "",
            Discipline::Architectural => "Architectural",
            Discipline::Structural => "Structural",
            Discipline::Mechanical => "Mechanical",
            Discipline::Electrical => "Electrical",
            Discipline::Coordination => "Coordination",
        }
    }
}

/// Built-in parameters the collection engine can evaluate natively,
/// without materializing the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltInParam {
    /// View name
    ViewName,
    /// Title on sheet (description field)
    ViewDescription,
    /// Integer-coded discipline, blank when unset
    ViewDiscipline,
    /// Reference to the assigned view template, invalid id when unassigned
    ViewTemplate,
}

impl BuiltInParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltInParam::ViewName => "view_name",
            BuiltInParam::ViewDescription => "view_description",
            BuiltInParam::ViewDiscipline => "view_discipline",
            BuiltInParam::ViewTemplate => "view_template",
        }
    }
}
