//! # ganttview Core Library
//!
//! This library holds the data contract between a timeline/Gantt layout pass
//! and the renderer that paints it. A CLI binary exposes the same operations
//! for inspecting frames produced elsewhere.
//!
//! ## Architecture
//!
//! - **View**: hour markers, day labels, section bands and event bars, plus
//!   the [`TimelineFrame`] that bundles one render pass
//! - **Validation**: structural checks reported as field-addressed violations
//! - **Storage**: TOML-based configuration under `~/.config/ganttview`
//!
//! ## Key Components
//!
//! - [`TimelineFrame`]: Container for one render pass
//! - [`ValidationReport`]: Result of checking a frame
//! - [`Config`]: Application configuration management

pub mod error;
pub mod storage;
pub mod validate;
pub mod view;

pub use error::{ConfigError, CoreError, ValidationError};
pub use storage::Config;
pub use validate::{ValidationOptions, ValidationReport, Violation, ViolationKind};
pub use view::{
    BandRegion, DayLabel, FrameSummary, HourMarker, RenderedEventBar, SectionBand, TimelineFrame,
    VisibleEventBar,
};
