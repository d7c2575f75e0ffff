//! Lifecycle controller.
//!
//! [`Board`] is the command surface of the system: every user action
//! (report, resolve, search, initial load) is one method. It owns the
//! record store and a [`View`], and re-renders the affected collection
//! after each change.
//!
//! Items have two states. `Active` records live in their collection;
//! a confirmed resolve deletes them, which is the terminal `Resolved`
//! state. Declining the confirmation leaves the record untouched.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info};

use crate::error::Result;
use crate::factory::{self, encode_image};
use crate::model::{Collection, FoundItem, FoundReport, LostItem, LostReport};
use crate::query::{self, SearchOutcome};
use crate::render::View;
use crate::storage::{KeyValueStore, RecordStore};

/// Outcome of a resolve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Confirmed and removed.
    Resolved,
    /// Confirmed, but no record had that id.
    NotFound,
    /// The user declined; nothing changed.
    Declined,
}

/// The lost & found board: record store plus view.
pub struct Board<S, V> {
    records: RecordStore<S>,
    view: V,
}

impl<S: KeyValueStore, V: View> Board<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self {
            records: RecordStore::new(store),
            view,
        }
    }

    /// Read access to the record store.
    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initial render of both collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the view fails.
    pub fn load(&mut self) -> Result<()> {
        self.render_lost()?;
        self.render_found()
    }

    /// Render the current lost collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the view fails.
    pub fn render_lost(&mut self) -> Result<()> {
        let items = self.records.list::<LostItem>()?;
        self.view.render_lost(&items)
    }

    /// Render the current found collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the view fails.
    pub fn render_found(&mut self) -> Result<()> {
        let items = self.records.list::<FoundItem>()?;
        self.view.render_found(&items)
    }

    /// Report a lost item.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or view fails.
    pub fn report_lost(&mut self, report: LostReport) -> Result<LostItem> {
        let existing = self.records.list::<LostItem>()?;
        let item = factory::new_lost(report, &existing, &Local::now());
        self.records.append(&item)?;
        info!(id = item.id, name = %item.item_name, "lost item reported");

        self.view.notify("Lost item reported successfully!")?;
        self.render_lost()?;
        Ok(item)
    }

    /// Report a found item, optionally with a photo.
    ///
    /// The photo is fully read and encoded before the record is built,
    /// so nothing is stored if the read fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageRead`](crate::Error::ImageRead) if the image
    /// cannot be read, or an error if the store or view fails.
    pub async fn report_found(
        &mut self,
        report: FoundReport,
        image: Option<&Path>,
    ) -> Result<FoundItem> {
        let encoded = match image {
            Some(path) => Some(encode_image(path).await?),
            None => None,
        };

        let existing = self.records.list::<FoundItem>()?;
        let item = factory::new_found(report, encoded, &existing, &Local::now());
        self.records.append(&item)?;
        info!(
            id = item.id,
            name = %item.item_name,
            image = item.has_image(),
            "found item reported"
        );

        self.view.notify("Found item reported successfully!")?;
        self.render_found()?;
        Ok(item)
    }

    /// Resolve (permanently remove) a record after confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation, store or view fails.
    pub fn resolve(&mut self, collection: Collection, id: i64) -> Result<Resolution> {
        if !self.view.confirm(collection.resolve_prompt())? {
            debug!(%collection, id, "resolve declined");
            return Ok(Resolution::Declined);
        }

        let removed = match collection {
            Collection::Lost => self.records.remove::<LostItem>(id)?,
            Collection::Found => self.records.remove::<FoundItem>(id)?,
        };

        match collection {
            Collection::Lost => self.render_lost()?,
            Collection::Found => self.render_found()?,
        }

        if removed == 0 {
            debug!(%collection, id, "resolve matched no record");
            return Ok(Resolution::NotFound);
        }
        info!(%collection, id, "item resolved");
        Ok(Resolution::Resolved)
    }

    /// Lost item was found by its owner.
    ///
    /// # Errors
    ///
    /// See [`Board::resolve`].
    pub fn mark_found(&mut self, id: i64) -> Result<Resolution> {
        self.resolve(Collection::Lost, id)
    }

    /// Found item was returned to its owner.
    ///
    /// # Errors
    ///
    /// See [`Board::resolve`].
    pub fn mark_returned(&mut self, id: i64) -> Result<Resolution> {
        self.resolve(Collection::Found, id)
    }

    /// Search both collections and render the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the view fails.
    pub fn search(&mut self, term: &str) -> Result<SearchOutcome> {
        let lost = self.records.list::<LostItem>()?;
        let found = self.records.list::<FoundItem>()?;
        let outcome = query::search(term, &lost, &found);

        if let Some(results) = outcome.results() {
            debug!(term, lost = results.lost.len(), found = results.found.len(), "search");
        }
        self.view.render_search(&outcome)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::query::SearchResults;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    /// View that records every call for assertions.
    #[derive(Default)]
    struct RecordingView {
        answer: bool,
        prompts: Vec<String>,
        notices: Vec<String>,
        lost_renders: Vec<Vec<LostItem>>,
        found_renders: Vec<Vec<FoundItem>>,
        searches: Vec<SearchOutcome>,
    }

    impl RecordingView {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                ..Self::default()
            }
        }
    }

    impl View for RecordingView {
        fn render_lost(&mut self, items: &[LostItem]) -> Result<()> {
            self.lost_renders.push(items.to_vec());
            Ok(())
        }

        fn render_found(&mut self, items: &[FoundItem]) -> Result<()> {
            self.found_renders.push(items.to_vec());
            Ok(())
        }

        fn render_search(&mut self, outcome: &SearchOutcome) -> Result<()> {
            self.searches.push(outcome.clone());
            Ok(())
        }

        fn confirm(&mut self, prompt: &str) -> Result<bool> {
            self.prompts.push(prompt.to_string());
            Ok(self.answer)
        }

        fn notify(&mut self, message: &str) -> Result<()> {
            self.notices.push(message.to_string());
            Ok(())
        }
    }

    fn board(answer: bool) -> Board<MemoryStore, RecordingView> {
        Board::new(MemoryStore::new(), RecordingView::answering(answer))
    }

    fn wallet_report() -> LostReport {
        LostReport {
            item_name: "Wallet".to_string(),
            lost_date: "2024-01-01".to_string(),
            location: Some("Library".to_string()),
            description: None,
        }
    }

    fn keys_report() -> FoundReport {
        FoundReport {
            item_name: "Keys".to_string(),
            found_date: "2024-01-02".to_string(),
            found_location: "Gym".to_string(),
            finder_contact: "555-0101".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_load_renders_both_collections() {
        let mut board = board(true);
        board.load().unwrap();
        board.load().unwrap();

        assert_eq!(board.view().lost_renders, vec![Vec::new(), Vec::new()]);
        assert_eq!(board.view().found_renders.len(), 2);
    }

    #[test]
    fn test_report_lost_stores_and_searches() {
        let mut board = board(true);
        let item = board.report_lost(wallet_report()).unwrap();

        let stored = board.records().list::<LostItem>().unwrap();
        assert_eq!(stored, vec![item.clone()]);
        assert_eq!(board.view().notices, vec!["Lost item reported successfully!"]);
        assert_eq!(board.view().lost_renders.last().unwrap(), &vec![item.clone()]);

        let outcome = board.search("library").unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Matches(SearchResults {
                lost: vec![item],
                found: Vec::new(),
            })
        );
    }

    #[tokio::test]
    async fn test_report_found_without_image() {
        let mut board = board(true);
        let item = board.report_found(keys_report(), None).await.unwrap();

        assert_eq!(item.image_base64, "");
        let stored = board.records().list::<FoundItem>().unwrap();
        assert_eq!(stored[0].image_base64, "");
        assert_eq!(board.view().notices, vec!["Found item reported successfully!"]);
    }

    #[tokio::test]
    async fn test_report_found_with_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keys.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let mut board = board(true);
        let item = board.report_found(keys_report(), Some(&path)).await.unwrap();

        assert!(item.image_base64.starts_with("data:image/png;base64,"));
        assert_eq!(board.records().list::<FoundItem>().unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_failed_image_read_stores_nothing() {
        let mut board = board(true);
        let err = board
            .report_found(keys_report(), Some(Path::new("/nonexistent/keys.png")))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ImageRead { .. }));
        assert!(board.records().list::<FoundItem>().unwrap().is_empty());
        assert!(board.view().notices.is_empty());
        assert!(board.view().found_renders.is_empty());
    }

    #[test]
    fn test_mark_found_removes_after_confirmation() {
        let mut board = board(true);
        let item = board.report_lost(wallet_report()).unwrap();

        assert_eq!(board.mark_found(item.id).unwrap(), Resolution::Resolved);
        assert!(board.records().list::<LostItem>().unwrap().is_empty());
        assert_eq!(board.view().prompts, vec!["Mark this item as found?"]);
        assert!(board.view().lost_renders.last().unwrap().is_empty());
    }

    #[test]
    fn test_declined_resolve_keeps_record() {
        let mut board = board(false);
        let item = board.report_lost(wallet_report()).unwrap();
        let renders_before = board.view().lost_renders.len();

        assert_eq!(board.mark_found(item.id).unwrap(), Resolution::Declined);
        assert_eq!(board.records().list::<LostItem>().unwrap(), vec![item]);
        assert_eq!(board.view().lost_renders.len(), renders_before);
    }

    #[tokio::test]
    async fn test_mark_returned_uses_found_prompt() {
        let mut board = board(true);
        let item = board.report_found(keys_report(), None).await.unwrap();

        assert_eq!(board.mark_returned(item.id).unwrap(), Resolution::Resolved);
        assert_eq!(board.view().prompts, vec!["Mark this item as returned?"]);
        assert!(board.records().list::<FoundItem>().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_unknown_id_is_not_found() {
        let mut board = board(true);
        board.report_lost(wallet_report()).unwrap();

        assert_eq!(board.mark_found(12345).unwrap(), Resolution::NotFound);
        assert_eq!(board.records().list::<LostItem>().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_search_is_invalid_and_rendered() {
        let mut board = board(true);
        board.report_lost(wallet_report()).unwrap();

        assert_eq!(board.search("  ").unwrap(), SearchOutcome::InvalidQuery);
        assert_eq!(board.view().searches, vec![SearchOutcome::InvalidQuery]);
    }

    #[test]
    fn test_shared_location_search_order() {
        let mut board = board(true);
        let first = board
            .report_lost(LostReport {
                item_name: "Scarf".to_string(),
                location: Some("Cafeteria".to_string()),
                ..LostReport::default()
            })
            .unwrap();
        let second = board
            .report_lost(LostReport {
                item_name: "Notebook".to_string(),
                location: Some("Cafeteria".to_string()),
                ..LostReport::default()
            })
            .unwrap();

        let outcome = board.search("Cafeteria").unwrap();
        assert_eq!(outcome.results().unwrap().lost, vec![first, second]);
    }
}
