//! Element types held by a document.
//!
//! Views and their type descriptors share one element table; the collection
//! engine tells them apart by element class. A view element exposes its
//! built-in parameters through typed accessors so native predicates can be
//! evaluated uniformly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{BuiltInParam, Discipline, ElementClass, ViewFamily, ViewKind};

/// Numeric element identity, unique within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub i64);

impl ElementId {
    /// The invalid identity. A view's template reference holds this value
    /// when no template is assigned.
    pub const INVALID: ElementId = ElementId(-1);

    /// True unless this is the invalid identity.
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A view element: one candidate object for a query.
#[derive(Debug, Clone)]
pub struct ViewElement {
    id: ElementId,
    unique_id: Uuid,
    kind: ViewKind,
    name: String,
    /// Title on sheet; blank when never set.
    title_on_sheet: String,
    /// Blank when the discipline field was never set.
    discipline: Option<Discipline>,
    /// Descriptor element carrying the system family classification.
    type_id: ElementId,
    template_id: Option<ElementId>,
    is_template: bool,
    is_assembly: bool,
    can_be_printed: bool,
    internal_keynote_schedule: bool,
    titleblock_revision_schedule: bool,
}

impl ViewElement {
    /// Creates a view with the given kind and name. Identity fields are
    /// assigned when the view is inserted into a document.
    pub fn new(kind: ViewKind, name: impl Into<String>) -> Self {
        Self {
            id: ElementId::INVALID,
            unique_id: Uuid::nil(),
            kind,
            name: name.into(),
            title_on_sheet: String::new(),
            discipline: None,
            type_id: ElementId::INVALID,
            template_id: None,
            is_template: false,
            is_assembly: false,
            can_be_printed: true,
            internal_keynote_schedule: false,
            titleblock_revision_schedule: false,
        }
    }

    /// Sets the title shown on sheets.
    pub fn with_title_on_sheet(mut self, title: impl Into<String>) -> Self {
        self.title_on_sheet = title.into();
        self
    }

    /// Sets the discipline field.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = Some(discipline);
        self
    }

    /// Sets the view-family type descriptor reference.
    pub fn with_type(mut self, type_id: ElementId) -> Self {
        self.type_id = type_id;
        self
    }

    /// Assigns a view template.
    pub fn with_template(mut self, template_id: ElementId) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Marks this view as a template.
    pub fn as_template(mut self) -> Self {
        self.is_template = true;
        self
    }

    /// Marks this view as an assembly view.
    pub fn as_assembly(mut self) -> Self {
        self.is_assembly = true;
        self
    }

    /// Sets whether this view can be printed.
    pub fn printable(mut self, printable: bool) -> Self {
        self.can_be_printed = printable;
        self
    }

    /// Marks a schedule as the document's internal keynote schedule.
    pub fn as_internal_keynote_schedule(mut self) -> Self {
        self.internal_keynote_schedule = true;
        self
    }

    /// Marks a schedule as a titleblock revision schedule.
    pub fn as_titleblock_revision_schedule(mut self) -> Self {
        self.titleblock_revision_schedule = true;
        self
    }

    pub(super) fn assign_identity(&mut self, id: ElementId, unique_id: Uuid) {
        self.id = id;
        self.unique_id = unique_id;
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title_on_sheet(&self) -> &str {
        &self.title_on_sheet
    }

    pub fn type_id(&self) -> ElementId {
        self.type_id
    }

    pub fn is_template(&self) -> bool {
        self.is_template
    }

    pub fn is_assembly(&self) -> bool {
        self.is_assembly
    }

    pub fn can_be_printed(&self) -> bool {
        self.can_be_printed
    }

    pub fn is_internal_keynote_schedule(&self) -> bool {
        self.internal_keynote_schedule
    }

    pub fn is_titleblock_revision_schedule(&self) -> bool {
        self.titleblock_revision_schedule
    }

    /// Reads a built-in parameter as an integer.
    ///
    /// A blank field reads as `None`, which no integer predicate matches.
    pub fn param_int(&self, param: BuiltInParam) -> Option<i32> {
        match param {
            BuiltInParam::ViewDiscipline => self.discipline.and_then(|d| d.code()),
            _ => None,
        }
    }

    /// Reads a built-in parameter as a string.
    ///
    /// The discipline field reads as the empty string when blank, so a
    /// string-equality predicate against `""` selects exactly the views
    /// whose discipline was explicitly never set.
    pub fn param_str(&self, param: BuiltInParam) -> Option<&str> {
        match param {
            BuiltInParam::ViewName => Some(&self.name),
            BuiltInParam::ViewDescription => Some(&self.title_on_sheet),
            BuiltInParam::ViewDiscipline => {
                Some(self.discipline.map(|d| d.label()).unwrap_or(""))
            }
            BuiltInParam::ViewTemplate => None,
        }
    }

    /// Reads a built-in parameter as an element reference.
    ///
    /// The template field reads as [`ElementId::INVALID`] when unassigned,
    /// so an equality predicate against the invalid id selects the views
    /// with no template.
    pub fn param_ref(&self, param: BuiltInParam) -> Option<ElementId> {
        match param {
            BuiltInParam::ViewTemplate => {
                Some(self.template_id.unwrap_or(ElementId::INVALID))
            }
            _ => None,
        }
    }
}

/// A view-family type descriptor element.
#[derive(Debug, Clone)]
pub struct ViewFamilyType {
    id: ElementId,
    family: ViewFamily,
}

impl ViewFamilyType {
    pub(super) fn new(id: ElementId, family: ViewFamily) -> Self {
        Self { id, family }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn family(&self) -> ViewFamily {
        self.family
    }
}

/// One entry in the document's element table.
#[derive(Debug, Clone)]
pub enum Element {
    View(ViewElement),
    FamilyType(ViewFamilyType),
}

impl Element {
    pub fn class(&self) -> ElementClass {
        match self {
            Element::View(_) => ElementClass::View,
            Element::FamilyType(_) => ElementClass::ViewFamilyType,
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::View(v) => v.id(),
            Element::FamilyType(t) => t.id(),
        }
    }

    /// Narrows to a view element, the engine-level equivalent of a cast.
    pub fn as_view(&self) -> Option<&ViewElement> {
        match self {
            Element::View(v) => Some(v),
            Element::FamilyType(_) => None,
        }
    }

    pub fn as_family_type(&self) -> Option<&ViewFamilyType> {
        match self {
            Element::FamilyType(t) => Some(t),
            Element::View(_) => None,
        }
    }
}
