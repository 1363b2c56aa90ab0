use chrono::NaiveDate;

/// Tick spacing of the timeline header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineScale {
    Days,
    Weeks,
    Months,
}

const MIN_PIXELS_PER_DAY: f32 = 2.0;
const MAX_PIXELS_PER_DAY: f32 = 80.0;

/// Maps timeline dates to horizontal pixel offsets.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date.
    pub end: NaiveDate,
    /// Pixels per day (controls zoom level).
    pub pixels_per_day: f32,
    /// Multiplier applied on top of the fitted scale.
    pub zoom: f32,
}

impl TimelineViewport {
    /// Fit `[start, end]` into `width` pixels at zoom 1.
    pub fn fit(start: NaiveDate, end: NaiveDate, width: f32) -> Self {
        let mut viewport = Self {
            start,
            end,
            pixels_per_day: MIN_PIXELS_PER_DAY,
            zoom: 1.0,
        };
        viewport.refit(width);
        viewport
    }

    /// Recompute pixels per day for a new width, keeping the zoom factor.
    pub fn refit(&mut self, width: f32) {
        let days = (self.end - self.start).num_days().max(1) as f32;
        self.pixels_per_day =
            (width / days * self.zoom).clamp(MIN_PIXELS_PER_DAY, MAX_PIXELS_PER_DAY);
    }

    /// Convert a date to an x-pixel offset from the viewport start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Total width in pixels for the visible range.
    pub fn total_width(&self) -> f32 {
        self.date_to_x(self.end)
    }

    /// Finest tick spacing that still leaves room for a `dd.mm.yy` label.
    pub fn scale(&self) -> TimelineScale {
        if self.pixels_per_day >= 20.0 {
            TimelineScale::Days
        } else if self.pixels_per_day >= 8.0 {
            TimelineScale::Weeks
        } else {
            TimelineScale::Months
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.2).min(8.0);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 1.2).max(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fit_spans_width() {
        let vp = TimelineViewport::fit(ymd(2025, 1, 1), ymd(2025, 1, 21), 400.0);
        assert_eq!(vp.pixels_per_day, 20.0);
        assert_eq!(vp.date_to_x(ymd(2025, 1, 11)), 200.0);
        assert_eq!(vp.total_width(), 400.0);
    }

    #[test]
    fn test_fit_is_clamped() {
        let vp = TimelineViewport::fit(ymd(2025, 1, 1), ymd(2025, 1, 2), 1000.0);
        assert_eq!(vp.pixels_per_day, MAX_PIXELS_PER_DAY);
        let vp = TimelineViewport::fit(ymd(2020, 1, 1), ymd(2025, 1, 1), 100.0);
        assert_eq!(vp.pixels_per_day, MIN_PIXELS_PER_DAY);
    }

    #[test]
    fn test_scale_follows_density() {
        let mut vp = TimelineViewport::fit(ymd(2025, 1, 1), ymd(2025, 1, 21), 400.0);
        assert_eq!(vp.scale(), TimelineScale::Days);
        vp.pixels_per_day = 10.0;
        assert_eq!(vp.scale(), TimelineScale::Weeks);
        vp.pixels_per_day = 3.0;
        assert_eq!(vp.scale(), TimelineScale::Months);
    }

    #[test]
    fn test_zoom_bounds() {
        let mut vp = TimelineViewport::fit(ymd(2025, 1, 1), ymd(2025, 1, 21), 400.0);
        vp.zoom_out();
        assert_eq!(vp.zoom, 1.0);
        vp.zoom_in();
        vp.refit(400.0);
        assert!(vp.pixels_per_day > 20.0);
    }
}
