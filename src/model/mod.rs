pub mod calendar;
pub mod chart;
pub mod date;
pub mod palette;
pub mod progress;
pub mod stage;
pub mod store;
pub mod timeline;

pub use calendar::{Calendar, DayFill, MonthGrid};
pub use chart::TimelineChart;
pub use progress::{overall_progress, stage_status, StatusCounts};
pub use stage::{Stage, StageDraft};
pub use store::StageStore;
pub use timeline::{TimelineScale, TimelineViewport};
