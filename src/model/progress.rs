use chrono::NaiveDate;

use super::stage::Stage;

/// Display status of a stage relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    /// Integer percentage, truncated, at most 100.
    InProgress(u8),
    Completed,
}

impl StageStatus {
    pub fn label(&self) -> String {
        match self {
            StageStatus::Pending => "Pending".to_string(),
            StageStatus::InProgress(pct) => format!("In progress ({}%)", pct),
            StageStatus::Completed => "Completed".to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StageStatus::Pending => egui_phosphor::regular::CLOCK,
            StageStatus::InProgress(_) => egui_phosphor::regular::HOURGLASS,
            StageStatus::Completed => egui_phosphor::regular::CHECK_CIRCLE,
        }
    }
}

/// Completion fraction of `stage` at `today`, in `[0, 1]`.
///
/// Zero-length stages stay at 0 while `today` is on their single day and
/// jump to 1 the day after.
pub fn stage_progress(stage: &Stage, today: NaiveDate) -> f64 {
    if today > stage.end {
        1.0
    } else if today >= stage.start {
        let duration = stage.duration_days();
        if duration > 0 {
            let elapsed = (today - stage.start).num_days();
            (elapsed as f64 / duration as f64).clamp(0.0, 1.0)
        } else {
            0.0
        }
    } else {
        0.0
    }
}

/// Mean progress across all stages as a percentage; 0 when there are none.
///
/// Every stage weighs the same regardless of its duration.
pub fn overall_progress(stages: &[Stage], today: NaiveDate) -> f64 {
    if stages.is_empty() {
        return 0.0;
    }
    let total: f64 = stages.iter().map(|s| stage_progress(s, today)).sum();
    total / stages.len() as f64 * 100.0
}

pub fn stage_status(stage: &Stage, today: NaiveDate) -> StageStatus {
    if today > stage.end {
        StageStatus::Completed
    } else if today >= stage.start {
        let pct = (stage_progress(stage, today) * 100.0).floor().min(100.0);
        StageStatus::InProgress(pct as u8)
    } else {
        StageStatus::Pending
    }
}

/// Per-band stage counts for the summary metrics row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

impl StatusCounts {
    pub fn compute(stages: &[Stage], today: NaiveDate) -> Self {
        let mut counts = Self {
            total: stages.len(),
            ..Default::default()
        };
        for stage in stages {
            match stage_status(stage, today) {
                StageStatus::Completed => counts.completed += 1,
                StageStatus::InProgress(_) => counts.in_progress += 1,
                StageStatus::Pending => {}
            }
        }
        counts
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed - self.in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stage(start: NaiveDate, end: NaiveDate) -> Stage {
        Stage::new("stage", "owner", start, end).unwrap()
    }

    #[test]
    fn test_progress_bands() {
        let s = stage(ymd(2025, 1, 1), ymd(2025, 1, 11));
        assert_eq!(stage_progress(&s, ymd(2024, 12, 31)), 0.0);
        assert_eq!(stage_progress(&s, ymd(2025, 1, 1)), 0.0);
        assert_eq!(stage_progress(&s, ymd(2025, 1, 6)), 0.5);
        assert_eq!(stage_progress(&s, ymd(2025, 1, 11)), 1.0);
        assert_eq!(stage_progress(&s, ymd(2025, 1, 12)), 1.0);
    }

    #[test]
    fn test_zero_length_stage_is_zero_on_its_day() {
        let s = stage(ymd(2025, 3, 1), ymd(2025, 3, 1));
        assert_eq!(stage_progress(&s, ymd(2025, 3, 1)), 0.0);
        assert_eq!(stage_progress(&s, ymd(2025, 3, 2)), 1.0);
        assert_eq!(stage_status(&s, ymd(2025, 3, 1)), StageStatus::InProgress(0));
    }

    #[test]
    fn test_overall_empty_is_zero() {
        assert_eq!(overall_progress(&[], ymd(2025, 1, 1)), 0.0);
    }

    #[test]
    fn test_overall_is_unweighted_mean() {
        let today = ymd(2025, 1, 6);
        let stages = vec![
            // 50%, short
            stage(ymd(2025, 1, 1), ymd(2025, 1, 11)),
            // done, long
            stage(ymd(2024, 1, 1), ymd(2024, 12, 31)),
            // not started
            stage(ymd(2025, 2, 1), ymd(2025, 2, 2)),
            // not started, very long
            stage(ymd(2025, 3, 1), ymd(2026, 3, 1)),
        ];
        assert!((overall_progress(&stages, today) - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_status_truncates_percentage() {
        let s = stage(ymd(2025, 1, 1), ymd(2025, 1, 4));
        // 1/3 elapsed
        assert_eq!(stage_status(&s, ymd(2025, 1, 2)), StageStatus::InProgress(33));
        assert_eq!(stage_status(&s, ymd(2025, 1, 4)), StageStatus::InProgress(100));
        assert_eq!(stage_status(&s, ymd(2025, 1, 5)), StageStatus::Completed);
        assert_eq!(stage_status(&s, ymd(2024, 12, 1)), StageStatus::Pending);
    }

    #[test]
    fn test_status_counts() {
        let today = ymd(2025, 1, 6);
        let stages = vec![
            stage(ymd(2025, 1, 1), ymd(2025, 1, 11)),
            stage(ymd(2024, 1, 1), ymd(2024, 12, 31)),
            stage(ymd(2025, 2, 1), ymd(2025, 2, 2)),
        ];
        let counts = StatusCounts::compute(&stages, today);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.pending(), 1);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(StageStatus::InProgress(42).label(), "In progress (42%)");
        assert_eq!(StageStatus::Completed.label(), "Completed");
    }
}
