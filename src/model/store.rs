use super::stage::{Stage, StageDraft};
use crate::error::ValidationError;

/// Ordered, in-memory list of stages. Insertion order is display order.
///
/// Mutations hand back the resulting state; repainting is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct StageStore {
    stages: Vec<Stage>,
}

impl StageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Append an already validated stage.
    pub fn push(&mut self, stage: Stage) -> &[Stage] {
        log::info!(
            "Added stage '{}' ({} → {})",
            stage.description,
            stage.start,
            stage.end
        );
        self.stages.push(stage);
        &self.stages
    }

    /// Validate a form draft and append it. On error the store is untouched.
    pub fn submit(&mut self, draft: &StageDraft) -> Result<&[Stage], ValidationError> {
        match draft.validate() {
            Ok(stage) => Ok(self.push(stage)),
            Err(e) => {
                log::warn!("Rejected stage submission: {:?}", e);
                Err(e)
            }
        }
    }

    /// Remove the stage at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Stage> {
        if index >= self.stages.len() {
            log::warn!("Ignoring removal of stage #{} (only {})", index, self.stages.len());
            return None;
        }
        let removed = self.stages.remove(index);
        log::info!("Removed stage '{}'", removed.description);
        Some(removed)
    }

    /// Drop every stage, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.stages.len();
        self.stages.clear();
        log::info!("Cleared {} stages", count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stage(name: &str) -> Stage {
        Stage::new(name, "Team", ymd(2025, 1, 1), ymd(2025, 1, 10)).unwrap()
    }

    fn names(store: &StageStore) -> Vec<&str> {
        store.stages().iter().map(|s| s.description.as_str()).collect()
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut store = StageStore::new();
        store.push(stage("a"));
        let state = store.push(stage("b"));
        assert_eq!(state.len(), 2);
        assert_eq!(names(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_submit_rejects_inverted_range_without_mutation() {
        let mut store = StageStore::new();
        store.push(stage("a"));
        let draft = StageDraft {
            description: "late".into(),
            owner: "Ana".into(),
            start: "20.01.25".into(),
            end: "10.01.25".into(),
            notes: String::new(),
        };
        assert_eq!(store.submit(&draft), Err(ValidationError::InvertedRange));
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn test_submit_appends_valid_draft() {
        let mut store = StageStore::new();
        let mut draft = StageDraft::new(ymd(2025, 1, 1));
        draft.description = "Kickoff".into();
        draft.owner = "Ana".into();
        let state = store.submit(&draft).unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state[0].start, ymd(2025, 1, 1));
    }

    #[test]
    fn test_remove_by_index() {
        let mut store = StageStore::new();
        for n in ["a", "b", "c", "d"] {
            store.push(stage(n));
        }
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.description, "b");
        assert_eq!(names(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = StageStore::new();
        store.push(stage("a"));
        assert!(store.remove(3).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = StageStore::new();
        store.push(stage("a"));
        store.push(stage("b"));
        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
    }
}
