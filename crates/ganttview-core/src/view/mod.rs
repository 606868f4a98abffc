//! Timeline view-model shapes.
//!
//! These are the values an upstream layout pass hands to the renderer:
//! - Hour markers and day labels describing the time axis
//! - Section bands drawn behind the rows
//! - Event bars with their pre-assigned lane and sublane
//!
//! Nothing here computes positions; the types carry and check them.

mod band;
mod bar;
mod day;
mod frame;
mod hour;

pub use band::{BandRegion, SectionBand};
pub use bar::{RenderedEventBar, VisibleEventBar};
pub use day::DayLabel;
pub use frame::{FrameSummary, TimelineFrame};
pub use hour::HourMarker;
