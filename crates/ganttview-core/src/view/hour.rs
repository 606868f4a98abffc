//! Hour markers along the time axis.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::validate::{check_positive, field_path, ValidationOptions, Violation, ViolationKind};

/// A labelled tick on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourMarker {
    pub date_time: DateTime<FixedOffset>,
    pub label: String,
    pub is_start_of_day: bool,
    #[serde(default)]
    pub is_first_day_start: bool,
    pub span_hours: f64,
}

impl HourMarker {
    /// Create a marker spanning one hour.
    pub fn new(date_time: DateTime<FixedOffset>, label: impl Into<String>) -> Self {
        Self {
            date_time,
            label: label.into(),
            is_start_of_day: false,
            is_first_day_start: false,
            span_hours: 1.0,
        }
    }

    /// Mark as the start of a day
    pub fn with_start_of_day(mut self, start_of_day: bool) -> Self {
        self.is_start_of_day = start_of_day;
        self
    }

    /// Mark as the first day start of the axis
    pub fn with_first_day_start(mut self, first: bool) -> Self {
        self.is_first_day_start = first;
        self
    }

    /// Set the number of hours covered
    pub fn with_span_hours(mut self, hours: f64) -> Self {
        self.span_hours = hours;
        self
    }

    /// Field-level violations of this marker.
    pub fn violations(&self, opts: &ValidationOptions) -> Vec<Violation> {
        let mut out = Vec::new();
        self.collect_violations("", opts, &mut out);
        out
    }

    pub(crate) fn collect_violations(
        &self,
        prefix: &str,
        opts: &ValidationOptions,
        out: &mut Vec<Violation>,
    ) {
        check_positive(prefix, "spanHours", self.span_hours, out);
        if opts.consistency_checks && self.is_first_day_start && !self.is_start_of_day {
            out.push(Violation::new(
                field_path(prefix, "isFirstDayStart"),
                ViolationKind::FirstDayStartNotStartOfDay,
            ));
        }
    }
}
