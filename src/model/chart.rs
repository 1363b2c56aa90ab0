use chrono::{Days, NaiveDate};
use egui::Color32;

use super::date::format_date;
use super::palette::palette;
use super::stage::Stage;
use crate::error::RenderError;

/// Days of padding on either side of the stage range.
pub const RANGE_MARGIN_DAYS: u64 = 3;

/// One horizontal bar on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    /// Row from the top; equals the stage's position in the store.
    pub row: usize,
    pub label: String,
    pub start: NaiveDate,
    pub duration_days: i64,
    pub color: Color32,
    pub hover: Vec<String>,
}

impl BarSegment {
    pub fn end(&self) -> NaiveDate {
        self.start + chrono::Duration::days(self.duration_days)
    }
}

/// Everything needed to draw or export the stage timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineChart {
    pub bars: Vec<BarSegment>,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub today: NaiveDate,
}

impl TimelineChart {
    /// Build bars for every stage in store order.
    pub fn build(stages: &[Stage], today: NaiveDate) -> Result<Self, RenderError> {
        let min_start = stages.iter().map(|s| s.start).min().ok_or(RenderError::NoStages)?;
        let max_end = stages.iter().map(|s| s.end).max().ok_or(RenderError::NoStages)?;

        let range_start = min_start
            .checked_sub_days(Days::new(RANGE_MARGIN_DAYS))
            .ok_or(RenderError::DateOutOfRange(min_start))?;
        let range_end = max_end
            .checked_add_days(Days::new(RANGE_MARGIN_DAYS))
            .ok_or(RenderError::DateOutOfRange(max_end))?;

        let colors = palette(stages.len());
        let bars = stages
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(row, (stage, color))| BarSegment {
                row,
                label: stage.description.clone(),
                start: stage.start,
                duration_days: stage.duration_days(),
                color,
                hover: vec![
                    stage.description.clone(),
                    format!("Start: {}", format_date(stage.start)),
                    format!("End: {}", format_date(stage.end)),
                    format!("Owner: {}", stage.owner),
                ],
            })
            .collect();

        Ok(Self {
            bars,
            range_start,
            range_end,
            today,
        })
    }

    pub fn range_days(&self) -> i64 {
        (self.range_end - self.range_start).num_days()
    }

    /// Whether the today marker falls inside the visible range.
    pub fn today_visible(&self) -> bool {
        self.range_start <= self.today && self.today <= self.range_end
    }
}
