// Selection coordinator
//
// The single source of truth for "which country is selected". Every chart
// and the inspector read it; only AppState writes it.

use crate::data::CountryRecord;

/// At most one selected record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    current: Option<CountryRecord>,
}

impl Selection {
    /// Select `record`, replacing any previous selection
    ///
    /// Selecting the already-selected record leaves it selected.
    pub fn select(&mut self, record: CountryRecord) {
        self.current = Some(record);
    }

    /// Drop the selection; no-op when nothing is selected
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&CountryRecord> {
        self.current.as_ref()
    }

    /// Whether the record with `id` is the selected one
    pub fn is_selected(&self, id: &str) -> bool {
        self.current.is_some_and(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COUNTRIES;

    #[test]
    fn test_empty_by_default() {
        let selection = Selection::default();
        assert!(selection.current().is_none());
        assert!(!selection.is_selected("USA"));
    }

    #[test]
    fn test_reselect_replaces() {
        let mut selection = Selection::default();
        selection.select(COUNTRIES[0]);
        selection.select(COUNTRIES[1]);
        assert!(!selection.is_selected(COUNTRIES[0].id));
        assert!(selection.is_selected(COUNTRIES[1].id));
    }

    #[test]
    fn test_select_same_twice_is_idempotent() {
        let mut selection = Selection::default();
        selection.select(COUNTRIES[3]);
        selection.select(COUNTRIES[3]);
        assert_eq!(selection.current(), Some(&COUNTRIES[3]));
    }

    #[test]
    fn test_clear_without_selection_is_noop() {
        let mut selection = Selection::default();
        selection.clear();
        assert!(selection.current().is_none());
    }
}
