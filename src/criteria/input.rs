//! Tri-state optional inputs.
//!
//! A host binding layer distinguishes a slot nobody touched from a slot
//! explicitly supplied with a value, including a value that means "none".
//! [`Input`] carries that distinction into the planner: the raw value is
//! structurally unreachable unless the input is present.

use serde::{Deserialize, Serialize};

/// One optional input slot: absent, or present with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Input<T> {
    /// The caller never supplied this slot; it imposes no constraint.
    Absent,
    /// The caller explicitly supplied this value.
    Present(T),
}

impl<T> Input<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Input::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Input::Absent)
    }

    /// The supplied value, or `None` when absent.
    pub fn value(&self) -> Option<&T> {
        match self {
            Input::Present(value) => Some(value),
            Input::Absent => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Input<U> {
        match self {
            Input::Present(value) => Input::Present(f(value)),
            Input::Absent => Input::Absent,
        }
    }
}

impl<T> Default for Input<T> {
    fn default() -> Self {
        Input::Absent
    }
}

impl<T> From<Option<T>> for Input<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Input::Present(v),
            None => Input::Absent,
        }
    }
}
