//! A full render pass worth of timeline shapes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::{BandRegion, DayLabel, HourMarker, RenderedEventBar};
use crate::error::Result;
use crate::validate::{ValidationOptions, ValidationReport, Violation, ViolationKind};

/// Markers, day labels, bands and bars produced for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    #[serde(default)]
    pub hour_markers: Vec<HourMarker>,
    #[serde(default)]
    pub day_labels: Vec<DayLabel>,
    #[serde(default)]
    pub bands: Vec<BandRegion>,
    #[serde(default)]
    pub bars: Vec<RenderedEventBar>,
}

/// Counts describing a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub hour_markers: usize,
    pub day_labels: usize,
    pub bands: usize,
    pub bars: usize,
    pub lanes: u64,
    pub groups: usize,
    pub sections: usize,
    pub target_bars: usize,
    pub milestones: usize,
}

impl TimelineFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a frame from its JSON form.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        let frame: Self = serde_json::from_str(json)?;
        tracing::debug!(
            markers = frame.hour_markers.len(),
            days = frame.day_labels.len(),
            bands = frame.bands.len(),
            bars = frame.bars.len(),
            "parsed timeline frame"
        );
        Ok(frame)
    }

    /// Read and parse a frame from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading timeline frame");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Bars clustered by group key, keys sorted, bars in frame order.
    pub fn groups(&self) -> BTreeMap<&str, Vec<&RenderedEventBar>> {
        let mut groups: BTreeMap<&str, Vec<&RenderedEventBar>> = BTreeMap::new();
        for bar in &self.bars {
            groups.entry(bar.group_key.as_str()).or_default().push(bar);
        }
        groups
    }

    pub fn bars_in_lane(&self, lane: u32) -> impl Iterator<Item = &RenderedEventBar> {
        self.bars.iter().filter(move |b| b.lane_index == lane)
    }

    /// Highest lane index plus one, or 0 when there are no bars.
    pub fn lane_count(&self) -> u64 {
        self.bars
            .iter()
            .map(|b| u64::from(b.lane_index) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Distinct section names in first-seen order.
    pub fn sections(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.bars
            .iter()
            .filter_map(|b| b.section_name.as_deref())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn target_bars(&self) -> impl Iterator<Item = &RenderedEventBar> {
        self.bars.iter().filter(|b| b.is_target_event)
    }

    pub fn milestones(&self) -> impl Iterator<Item = &RenderedEventBar> {
        self.bars.iter().filter(|b| b.is_milestone)
    }

    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            hour_markers: self.hour_markers.len(),
            day_labels: self.day_labels.len(),
            bands: self.bands.len(),
            bars: self.bars.len(),
            lanes: self.lane_count(),
            groups: self.groups().len(),
            sections: self.sections().len(),
            target_bars: self.target_bars().count(),
            milestones: self.milestones().count(),
        }
    }

    /// Check every record plus the cross-marker consistency rules.
    pub fn validate(&self, opts: &ValidationOptions) -> ValidationReport {
        let mut out = Vec::new();

        let mut first_day_start: Option<usize> = None;
        for (i, marker) in self.hour_markers.iter().enumerate() {
            let prefix = format!("hourMarkers[{i}]");
            marker.collect_violations(&prefix, opts, &mut out);
            if !opts.consistency_checks {
                continue;
            }
            if marker.is_first_day_start {
                match first_day_start {
                    Some(first) => out.push(Violation::new(
                        format!("{prefix}.isFirstDayStart"),
                        ViolationKind::MultipleFirstDayStarts { first },
                    )),
                    None => first_day_start = Some(i),
                }
            }
            if i > 0 && marker.date_time < self.hour_markers[i - 1].date_time {
                out.push(Violation::new(
                    format!("{prefix}.dateTime"),
                    ViolationKind::HoursOutOfOrder { previous: i - 1 },
                ));
            }
        }

        for (i, day) in self.day_labels.iter().enumerate() {
            day.collect_violations(&format!("dayLabels[{i}]"), &mut out);
        }
        for (i, band) in self.bands.iter().enumerate() {
            band.collect_violations(&format!("bands[{i}]"), opts, &mut out);
        }
        for (i, bar) in self.bars.iter().enumerate() {
            bar.collect_violations(&format!("bars[{i}]"), &mut out);
        }

        let report = ValidationReport::new(out);
        if report.is_valid() {
            tracing::debug!("timeline frame is valid");
        } else {
            tracing::warn!(violations = report.len(), "timeline frame failed validation");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample() -> TimelineFrame {
        TimelineFrame {
            hour_markers: vec![
                HourMarker::new(at("2024-03-04T00:00:00Z"), "Mon")
                    .with_start_of_day(true)
                    .with_first_day_start(true),
                HourMarker::new(at("2024-03-04T06:00:00Z"), "06:00").with_span_hours(6.0),
            ],
            day_labels: vec![DayLabel::new("Mon 4", 0.0, 480.0)],
            bands: vec![BandRegion::new("Welding", 0.0, 60.0).with_split(30.0)],
            bars: vec![
                RenderedEventBar::new("A", 0.0, 40.0, 0)
                    .with_group("order-1")
                    .with_section("Welding"),
                RenderedEventBar::new("B", 20.0, 40.0, 0)
                    .with_sublane(1)
                    .with_group("order-2")
                    .with_section("Welding")
                    .with_target(true),
                RenderedEventBar::new("C", 80.0, 0.0, 2)
                    .with_group("order-1")
                    .with_section("Paint")
                    .with_milestone(true),
            ],
        }
    }

    #[test]
    fn test_groups_cluster_by_key_in_frame_order() {
        let frame = sample();
        let groups = frame.groups();
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["order-1", "order-2"]);
        let labels: Vec<_> = groups["order-1"].iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn test_lane_queries() {
        let frame = sample();
        assert_eq!(frame.lane_count(), 3);
        assert_eq!(frame.bars_in_lane(0).count(), 2);
        assert_eq!(frame.bars_in_lane(1).count(), 0);
        assert_eq!(TimelineFrame::new().lane_count(), 0);
    }

    #[test]
    fn test_lane_count_covers_highest_lane_index() {
        let frame = TimelineFrame {
            bars: vec![RenderedEventBar::new("top", 0.0, 1.0, u32::MAX)],
            ..TimelineFrame::default()
        };
        assert_eq!(frame.lane_count(), u64::from(u32::MAX) + 1);
        assert_eq!(frame.summary().lanes, 4_294_967_296);
    }

    #[test]
    fn test_sections_keep_first_seen_order() {
        assert_eq!(sample().sections(), vec!["Welding", "Paint"]);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(
            summary,
            FrameSummary {
                hour_markers: 2,
                day_labels: 1,
                bands: 1,
                bars: 3,
                lanes: 3,
                groups: 2,
                sections: 2,
                target_bars: 1,
                milestones: 1,
            }
        );
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(sample().validate(&ValidationOptions::default()).is_valid());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let frame = TimelineFrame::from_json(r#"{"bars":[]}"#).unwrap();
        assert_eq!(frame, TimelineFrame::new());
    }

    #[test]
    fn test_paths_are_indexed() {
        let mut frame = sample();
        frame.bars[2].bar_width = -1.0;
        frame.bands[0].split_offset = Some(61.0);
        let report = frame.validate(&ValidationOptions::default());
        let paths: Vec<_> = report.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["bands[0].splitOffset", "bars[2].barWidth"]);
    }

    #[test]
    fn test_second_first_day_start_is_reported() {
        let mut frame = sample();
        frame.hour_markers.push(
            HourMarker::new(at("2024-03-05T00:00:00Z"), "Tue")
                .with_start_of_day(true)
                .with_first_day_start(true),
        );
        let report = frame.validate(&ValidationOptions::default());
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::MultipleFirstDayStarts { first: 0 }
        );
    }

    #[test]
    fn test_out_of_order_markers() {
        let mut frame = sample();
        frame.hour_markers.swap(0, 1);
        let report = frame.validate(&ValidationOptions::default());
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations[0].path, "hourMarkers[1].dateTime");

        let relaxed = ValidationOptions {
            consistency_checks: false,
            ..ValidationOptions::default()
        };
        assert!(frame.validate(&relaxed).is_valid());
    }

    #[test]
    fn test_equal_timestamps_are_in_order() {
        let mut frame = sample();
        let t = frame.hour_markers[1].date_time;
        frame.hour_markers.push(HourMarker::new(t, "06:00 again"));
        assert!(frame.validate(&ValidationOptions::default()).is_valid());
    }

    #[test]
    fn test_json_roundtrip_keeps_frame() {
        let frame = sample();
        let json = frame.to_json(false).unwrap();
        assert!(json.contains("\"hourMarkers\""));
        assert_eq!(TimelineFrame::from_json(&json).unwrap(), frame);
    }
}
