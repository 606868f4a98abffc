//! Structural validation of view-model values.
//!
//! Every shape reports [`Violation`]s against its own fields; a frame adds
//! cross-record checks on top. Field paths use the wire (camelCase) names so
//! a report can be matched back to the JSON that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Knobs controlling how strict validation is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Slack allowed when comparing a split offset against its band height.
    pub tolerance: f64,
    /// Enables the hour-marker consistency checks (first-day flags, ordering).
    pub consistency_checks: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            consistency_checks: true,
        }
    }
}

/// What is wrong with a single field or record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViolationKind {
    /// Value must be strictly positive
    NonPositive { value: f64 },
    /// Value must not be below zero
    Negative { value: f64 },
    /// Value is NaN or infinite
    NotFinite,
    /// Split offset falls outside `[0, height]`
    SplitOutOfRange { split: f64, height: f64 },
    /// `isFirstDayStart` set on a marker that does not start a day
    FirstDayStartNotStartOfDay,
    /// A second marker claims to be the first day start
    MultipleFirstDayStarts { first: usize },
    /// Marker is earlier than the one before it
    HoursOutOfOrder { previous: usize },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { value } => write!(f, "must be positive, got {value}"),
            Self::Negative { value } => write!(f, "must not be negative, got {value}"),
            Self::NotFinite => write!(f, "must be a finite number"),
            Self::SplitOutOfRange { split, height } => {
                write!(f, "split {split} lies outside [0, {height}]")
            }
            Self::FirstDayStartNotStartOfDay => {
                write!(f, "isFirstDayStart is set but isStartOfDay is not")
            }
            Self::MultipleFirstDayStarts { first } => {
                write!(f, "first day start already flagged on hourMarkers[{first}]")
            }
            Self::HoursOutOfOrder { previous } => {
                write!(f, "earlier than hourMarkers[{previous}]")
            }
        }
    }
}

/// A violation located by its field path, e.g. `bars[3].barWidth`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub path: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Ordered collection of violations found in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations whose path starts with `prefix` (e.g. `"bars[2]"`).
    pub fn at<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.path.starts_with(prefix))
    }

    /// Collapse into a `Result`, keeping the first violation as the message.
    ///
    /// # Errors
    /// Returns [`ValidationError::Violations`] when the report is not empty.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.violations.first() {
            None => Ok(()),
            Some(first) => Err(ValidationError::Violations {
                count: self.violations.len(),
                first: first.to_string(),
            }),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Join a record prefix and a field name into a path.
pub(crate) fn field_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Record a violation unless `value` is finite. Returns whether it was.
pub(crate) fn check_finite(
    prefix: &str,
    field: &str,
    value: f64,
    out: &mut Vec<Violation>,
) -> bool {
    if value.is_finite() {
        true
    } else {
        out.push(Violation::new(field_path(prefix, field), ViolationKind::NotFinite));
        false
    }
}

pub(crate) fn check_non_negative(prefix: &str, field: &str, value: f64, out: &mut Vec<Violation>) {
    if check_finite(prefix, field, value, out) && value < 0.0 {
        out.push(Violation::new(
            field_path(prefix, field),
            ViolationKind::Negative { value },
        ));
    }
}

pub(crate) fn check_positive(prefix: &str, field: &str, value: f64, out: &mut Vec<Violation>) {
    if check_finite(prefix, field, value, out) && value <= 0.0 {
        out.push(Violation::new(
            field_path(prefix, field),
            ViolationKind::NonPositive { value },
        ));
    }
}
