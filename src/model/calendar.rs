use chrono::{Datelike, NaiveDate};
use egui::Color32;

use super::palette::{css_color, palette};
use super::progress::stage_progress;
use super::stage::Stage;

/// Degrees of a full circle per percentage point.
pub const DEGREES_PER_PERCENT: f64 = 3.6;

/// One colored slice of a day circle shared by several stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Index of the stage in the store.
    pub stage: usize,
    pub color: Color32,
    pub from_deg: f64,
    pub to_deg: f64,
}

impl Arc {
    pub fn span(&self) -> f64 {
        self.to_deg - self.from_deg
    }
}

/// How a single calendar day is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum DayFill {
    /// No stage runs on this day.
    Empty,
    /// Exactly one stage is active.
    Solid { stage: usize, color: Color32, progress_pct: f64 },
    /// Several stages overlap; arcs follow store order.
    Split { arcs: Vec<Arc>, mean_pct: f64 },
}

impl DayFill {
    /// Percentage shown under the day, if any stage is active.
    pub fn label(&self) -> Option<String> {
        match self {
            DayFill::Empty => None,
            DayFill::Solid { progress_pct, .. } => Some(format!("{:.0}%", progress_pct)),
            DayFill::Split { mean_pct, .. } => Some(format!("{:.0}%", mean_pct)),
        }
    }

    /// Store indices of the stages active on this day.
    pub fn active_stages(&self) -> Vec<usize> {
        match self {
            DayFill::Empty => Vec::new(),
            DayFill::Solid { stage, .. } => vec![*stage],
            DayFill::Split { arcs, .. } => arcs.iter().map(|a| a.stage).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub fill: DayFill,
}

/// One month of the calendar laid out on a Monday-first 7-column grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before the first day (Monday = 0).
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// e.g. "July 2025"
    pub fn title(&self) -> String {
        match self.days.first() {
            Some(cell) => cell.date.format("%B %Y").to_string(),
            None => format!("{}/{}", self.month, self.year),
        }
    }

    /// Cells row by row, `None` for leading blanks and trailing padding.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let mut cells: Vec<Option<&DayCell>> = vec![None; self.leading_blanks];
        cells.extend(self.days.iter().map(Some));
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// Day-by-day view over the full date range of all stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calendar {
    pub months: Vec<MonthGrid>,
}

impl Calendar {
    /// Aggregate every day between the earliest start and the latest end.
    pub fn build(stages: &[Stage]) -> Self {
        let (Some(range_start), Some(range_end)) = (
            stages.iter().map(|s| s.start).min(),
            stages.iter().map(|s| s.end).max(),
        ) else {
            return Self::default();
        };
        let colors = palette(stages.len());

        let mut months: Vec<MonthGrid> = Vec::new();
        for date in range_start.iter_days().take_while(|d| *d <= range_end) {
            let cell = DayCell {
                date,
                fill: day_fill(stages, &colors, date),
            };
            if let DayFill::Split { arcs, .. } = &cell.fill {
                log::trace!("{}: {}", date, conic_gradient(arcs));
            }
            match months.last_mut() {
                Some(m) if m.year == date.year() && m.month == date.month() => m.days.push(cell),
                _ => months.push(MonthGrid {
                    year: date.year(),
                    month: date.month(),
                    leading_blanks: date.weekday().num_days_from_monday() as usize,
                    days: vec![cell],
                }),
            }
        }
        log::debug!(
            "Calendar built: {} months from {} to {}",
            months.len(),
            range_start,
            range_end
        );
        Self { months }
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.months.iter().flat_map(|m| m.days.iter())
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|c| c.date == date)
    }
}

/// Render data for `date`, using each active stage's progress as of that day.
pub fn day_fill(stages: &[Stage], colors: &[Color32], date: NaiveDate) -> DayFill {
    let active: Vec<(usize, f64)> = stages
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active_on(date))
        .map(|(i, s)| (i, stage_progress(s, date) * 100.0))
        .collect();
    let color_of = |i: usize| colors.get(i).copied().unwrap_or(Color32::GRAY);

    match active.as_slice() {
        [] => DayFill::Empty,
        [(i, pct)] => DayFill::Solid {
            stage: *i,
            color: color_of(*i),
            progress_pct: *pct,
        },
        many => {
            let mut angle = 0.0;
            let arcs = many
                .iter()
                .map(|(i, pct)| {
                    let from = angle;
                    angle += pct * DEGREES_PER_PERCENT;
                    Arc {
                        stage: *i,
                        color: color_of(*i),
                        from_deg: from,
                        to_deg: angle,
                    }
                })
                .collect();
            let mean_pct = many.iter().map(|(_, p)| p).sum::<f64>() / many.len() as f64;
            DayFill::Split { arcs, mean_pct }
        }
    }
}

/// CSS `conic-gradient(...)` for a split day, without a trailing separator.
pub fn conic_gradient(arcs: &[Arc]) -> String {
    let stops: Vec<String> = arcs
        .iter()
        .map(|a| format!("{} {}deg {}deg", css_color(a.color), a.from_deg, a.to_deg))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}
