//! Timeline step data model.

use serde::{Deserialize, Serialize};

/// One step on the timeline: a title line, a date line below it, and a
/// completion flag supplied by the caller. Items are never mutated by the
/// widget once added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub date: String,
    pub checked: bool,
}

impl Item {
    pub fn new(title: impl Into<String>, date: impl Into<String>, checked: bool) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            checked,
        }
    }
}
