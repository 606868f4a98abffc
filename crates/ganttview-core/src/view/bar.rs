//! Event bars: the scheduled items drawn on the chart.

use serde::{Deserialize, Serialize};

use crate::validate::{check_finite, check_non_negative, Violation};

/// A positioned bar for one scheduled event.
///
/// Lane and sublane are already assigned upstream; this type only carries
/// them. The compact wire variant (`left`, `width`, `lane`, `sublane`, no
/// milestone flag) deserializes into the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedEventBar {
    pub label: String,
    #[serde(alias = "left")]
    pub left_offset: f64,
    #[serde(alias = "width")]
    pub bar_width: f64,
    #[serde(alias = "lane")]
    pub lane_index: u32,
    /// Row within the lane used to stack overlapping bars.
    #[serde(alias = "sublane")]
    pub sublane_index: u32,
    pub time_range_label: String,
    pub fill_color: String,
    pub border_color: String,
    pub duration_hours_label: String,
    pub group_key: String,
    pub is_target_event: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    pub corner_radius: f64,
    #[serde(default)]
    pub is_milestone: bool,
}

/// Compact wire variant of [`RenderedEventBar`].
pub type VisibleEventBar = RenderedEventBar;

impl RenderedEventBar {
    /// Create a bar in sublane 0 with empty labels and colors.
    pub fn new(
        label: impl Into<String>,
        left_offset: f64,
        bar_width: f64,
        lane_index: u32,
    ) -> Self {
        Self {
            label: label.into(),
            left_offset,
            bar_width,
            lane_index,
            sublane_index: 0,
            time_range_label: String::new(),
            fill_color: String::new(),
            border_color: String::new(),
            duration_hours_label: String::new(),
            group_key: String::new(),
            is_target_event: false,
            section_name: None,
            corner_radius: 0.0,
            is_milestone: false,
        }
    }

    pub fn with_sublane(mut self, sublane_index: u32) -> Self {
        self.sublane_index = sublane_index;
        self
    }

    pub fn with_group(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = group_key.into();
        self
    }

    pub fn with_section(mut self, section_name: impl Into<String>) -> Self {
        self.section_name = Some(section_name.into());
        self
    }

    pub fn with_labels(
        mut self,
        time_range_label: impl Into<String>,
        duration_hours_label: impl Into<String>,
    ) -> Self {
        self.time_range_label = time_range_label.into();
        self.duration_hours_label = duration_hours_label.into();
        self
    }

    pub fn with_colors(
        mut self,
        fill_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        self.fill_color = fill_color.into();
        self.border_color = border_color.into();
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_target(mut self, target: bool) -> Self {
        self.is_target_event = target;
        self
    }

    pub fn with_milestone(mut self, milestone: bool) -> Self {
        self.is_milestone = milestone;
        self
    }

    /// Right edge of the bar.
    pub fn right(&self) -> f64 {
        self.left_offset + self.bar_width
    }

    /// `(lane, sublane)` pair identifying the row the bar is drawn in.
    pub fn row(&self) -> (u32, u32) {
        (self.lane_index, self.sublane_index)
    }

    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        self.collect_violations("", &mut out);
        out
    }

    pub(crate) fn collect_violations(&self, prefix: &str, out: &mut Vec<Violation>) {
        check_finite(prefix, "leftOffset", self.left_offset, out);
        check_non_negative(prefix, "barWidth", self.bar_width, out);
        check_non_negative(prefix, "cornerRadius", self.corner_radius, out);
    }
}
