use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::date::{format_date, parse_date};
use crate::error::ValidationError;

/// One schedulable unit of project work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stable identity for UI widgets; never used for ordering.
    pub id: Uuid,
    pub description: String,
    /// One or more responsible people, free text.
    pub owner: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub notes: Option<String>,
}

impl Stage {
    /// Build a stage, enforcing non-empty text and `start <= end`.
    pub fn new(
        description: impl Into<String>,
        owner: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        let owner = owner.into();
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if owner.trim().is_empty() {
            return Err(ValidationError::MissingField("owner"));
        }
        if start > end {
            return Err(ValidationError::InvertedRange);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            description,
            owner,
            start,
            end,
            notes: None,
        })
    }

    /// Attach notes; blank text is treated as no notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Length of the stage in whole days (`end - start`).
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether the stage's date range includes `date`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `dd.mm.yy - dd.mm.yy`
    pub fn period_label(&self) -> String {
        format!("{} - {}", format_date(self.start), format_date(self.end))
    }
}

/// Raw text of the "add stage" form, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDraft {
    pub description: String,
    pub owner: String,
    pub start: String,
    pub end: String,
    pub notes: String,
}

impl StageDraft {
    /// Empty draft with both dates pre-filled with `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            owner: String::new(),
            start: format_date(today),
            end: format_date(today),
            notes: String::new(),
        }
    }

    /// Reset every field back to the defaults for `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Validate the draft into a [`Stage`].
    ///
    /// Checks run in form order: required text, then date syntax, then range.
    pub fn validate(&self) -> Result<Stage, ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if self.owner.trim().is_empty() {
            return Err(ValidationError::MissingField("owner"));
        }
        let start = parse_date(&self.start).ok_or_else(|| ValidationError::InvalidDate {
            field: "start date",
            input: self.start.clone(),
        })?;
        let end = parse_date(&self.end).ok_or_else(|| ValidationError::InvalidDate {
            field: "end date",
            input: self.end.clone(),
        })?;

        Ok(Stage::new(self.description.trim(), self.owner.trim(), start, end)?
            .with_notes(self.notes.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(description: &str, owner: &str, start: &str, end: &str) -> StageDraft {
        StageDraft {
            description: description.into(),
            owner: owner.into(),
            start: start.into(),
            end: end.into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_new_draft_prefills_today() {
        let d = StageDraft::new(ymd(2025, 7, 15));
        assert_eq!(d.start, "15.07.25");
        assert_eq!(d.end, "15.07.25");
        assert!(d.description.is_empty());
    }

    #[test]
    fn test_validate_ok() {
        let mut d = draft(" Prototype ", "Ana, Bruno", "01.07.25", "15.07.25");
        d.notes = "needs review".into();
        let stage = d.validate().unwrap();
        assert_eq!(stage.description, "Prototype");
        assert_eq!(stage.owner, "Ana, Bruno");
        assert_eq!(stage.start, ymd(2025, 7, 1));
        assert_eq!(stage.end, ymd(2025, 7, 15));
        assert_eq!(stage.notes.as_deref(), Some("needs review"));
        assert_eq!(stage.duration_days(), 14);
    }

    #[test]
    fn test_validate_blank_notes_become_none() {
        let mut d = draft("Build", "Ana", "01.07.25", "02.07.25");
        d.notes = "   ".into();
        assert_eq!(d.validate().unwrap().notes, None);
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(
            draft("", "Ana", "01.07.25", "02.07.25").validate(),
            Err(ValidationError::MissingField("description"))
        );
        assert_eq!(
            draft("Build", "  ", "01.07.25", "02.07.25").validate(),
            Err(ValidationError::MissingField("owner"))
        );
    }

    #[test]
    fn test_validate_bad_dates() {
        let err = draft("Build", "Ana", "31.02.25", "02.07.25").validate();
        assert!(matches!(
            err,
            Err(ValidationError::InvalidDate { field: "start date", .. })
        ));
        let err = draft("Build", "Ana", "01.07.25", "2025-07-02").validate();
        assert!(matches!(
            err,
            Err(ValidationError::InvalidDate { field: "end date", .. })
        ));
    }

    #[test]
    fn test_validate_inverted_range() {
        assert_eq!(
            draft("Build", "Ana", "10.07.25", "02.07.25").validate(),
            Err(ValidationError::InvertedRange)
        );
    }

    #[test]
    fn test_is_active_on_is_inclusive() {
        let s = Stage::new("A", "B", ymd(2025, 1, 1), ymd(2025, 1, 3)).unwrap();
        assert!(s.is_active_on(ymd(2025, 1, 1)));
        assert!(s.is_active_on(ymd(2025, 1, 3)));
        assert!(!s.is_active_on(ymd(2025, 1, 4)));
        assert!(!s.is_active_on(ymd(2024, 12, 31)));
    }
}
