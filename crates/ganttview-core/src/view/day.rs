//! Day labels above the hour axis.

use serde::{Deserialize, Serialize};

use crate::validate::{check_finite, check_non_negative, Violation};

/// A day caption with its pre-computed horizontal placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLabel {
    pub label: String,
    pub left: f64,
    pub width: f64,
}

impl DayLabel {
    pub fn new(label: impl Into<String>, left: f64, width: f64) -> Self {
        Self {
            label: label.into(),
            left,
            width,
        }
    }

    /// Right edge of the label.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        self.collect_violations("", &mut out);
        out
    }

    pub(crate) fn collect_violations(&self, prefix: &str, out: &mut Vec<Violation>) {
        check_finite(prefix, "left", self.left, out);
        check_non_negative(prefix, "width", self.width, out);
    }
}
