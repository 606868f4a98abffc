//! Background bands grouping rows into sections.

use serde::{Deserialize, Serialize};

use crate::validate::{
    check_finite, check_non_negative, field_path, ValidationOptions, Violation, ViolationKind,
};

/// A labelled horizontal band drawn behind the event bars.
///
/// The compact wire variant (`top`, `split`) is accepted on input and
/// deserializes into the same record; output always uses the long names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandRegion {
    pub label: String,
    #[serde(alias = "top")]
    pub top_offset: f64,
    pub height: f64,
    pub background_color: String,
    pub border_color: String,
    /// Offset from the band top dividing it into two halves.
    #[serde(default, alias = "split", skip_serializing_if = "Option::is_none")]
    pub split_offset: Option<f64>,
}

/// Compact wire variant of [`BandRegion`].
pub type SectionBand = BandRegion;

impl BandRegion {
    pub fn new(label: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            label: label.into(),
            top_offset,
            height,
            background_color: String::new(),
            border_color: String::new(),
            split_offset: None,
        }
    }

    pub fn with_colors(
        mut self,
        background_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        self.background_color = background_color.into();
        self.border_color = border_color.into();
        self
    }

    pub fn with_split(mut self, split_offset: f64) -> Self {
        self.split_offset = Some(split_offset);
        self
    }

    /// Bottom edge of the band.
    pub fn bottom(&self) -> f64 {
        self.top_offset + self.height
    }

    /// Heights of the upper and lower halves, if the band is split.
    pub fn halves(&self) -> Option<(f64, f64)> {
        self.split_offset.map(|split| (split, self.height - split))
    }

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
        check_finite(prefix, "topOffset", self.top_offset, out);
        check_non_negative(prefix, "height", self.height, out);

        let Some(split) = self.split_offset else {
            return;
        };
        if !check_finite(prefix, "splitOffset", split, out) || !self.height.is_finite() {
            return;
        }
        if split < -opts.tolerance || split > self.height + opts.tolerance {
            out.push(Violation::new(
                field_path(prefix, "splitOffset"),
                ViolationKind::SplitOutOfRange {
                    split,
                    height: self.height,
                },
            ));
        }
    }
}
