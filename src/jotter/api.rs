//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for jotter operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display indexes and folder names to ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no presentation. `JotterApi<S: DataStore>`
//! is generic over the storage backend so it can be tested against
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) like everything else.
//!
//! API tests verify dispatch and argument handling, not command logic.

use crate::clipboard::ClipboardSink;
use crate::commands;
use crate::error::{JotterError, Result};
use crate::index::{parse_index_or_range, resolve, DisplayIndex, DisplayNote};
use crate::model::{FolderId, NoteId, NoteUpdate, ViewMode};
use crate::query::FolderFilter;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for jotter operations.
pub struct JotterApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> JotterApi<S> {
    pub fn new(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
        }
    }

    pub fn create_note(&mut self, title: String, content: String) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn update_note(&mut self, id: &NoteId, update: NoteUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn save_note(
        &mut self,
        id: Option<&NoteId>,
        title: String,
        content: String,
    ) -> Result<CmdResult> {
        commands::save::run(&mut self.store, id, title, content)
    }

    pub fn delete_note(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn toggle_pin(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::pinning::toggle(&mut self.store, id)
    }

    pub fn pin_note(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::pinning::pin(&mut self.store, id)
    }

    pub fn unpin_note(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::pinning::unpin(&mut self.store, id)
    }

    pub fn duplicate_note(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::duplicate::run(&mut self.store, id)
    }

    pub fn tag_note(&mut self, id: &NoteId, tags: &[String]) -> Result<CmdResult> {
        commands::tagging::add_tags(&mut self.store, id, tags)
    }

    pub fn untag_note(&mut self, id: &NoteId, tags: &[String]) -> Result<CmdResult> {
        commands::tagging::remove_tags(&mut self.store, id, tags)
    }

    pub fn move_note(&mut self, id: &NoteId, folder: Option<&FolderId>) -> Result<CmdResult> {
        commands::filing::move_to(&mut self.store, id, folder)
    }

    pub fn get_note(&self, id: &NoteId) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn list_notes(
        &self,
        query: &str,
        filter: &FolderFilter,
        view_mode: ViewMode,
    ) -> Result<CmdResult> {
        commands::list::run(&self.store, query, filter, view_mode)
    }

    pub fn search_notes(&self, query: &str, filter: &FolderFilter) -> Result<CmdResult> {
        commands::search::run(&self.store, query, filter)
    }

    pub fn share_note<C: ClipboardSink + ?Sized>(
        &self,
        id: &NoteId,
        clipboard: &mut C,
    ) -> Result<CmdResult> {
        commands::share::run(&self.store, id, clipboard)
    }

    pub fn list_folders(&self) -> Result<CmdResult> {
        commands::folders::list(&self.store)
    }

    pub fn create_folder(&mut self, name: String, color: Option<String>) -> Result<CmdResult> {
        commands::folders::create(&mut self.store, name, color)
    }

    pub fn rename_folder(&mut self, folder: &str, name: String) -> Result<CmdResult> {
        let id = self.folder_id(folder)?;
        commands::folders::rename(&mut self.store, &id, name)
    }

    pub fn delete_folder(&mut self, folder: &str) -> Result<CmdResult> {
        let id = self.folder_id(folder)?;
        commands::folders::delete(&mut self.store, &id)
    }

    /// Resolves a folder given by id or (case-insensitive) name.
    pub fn folder_id(&self, folder: &str) -> Result<FolderId> {
        commands::folders::find(&self.store, folder)
    }

    /// Parses a folder filter, accepting folder names as well as ids.
    pub fn folder_filter(&self, input: &str) -> Result<FolderFilter> {
        match input.parse::<FolderFilter>().map_err(JotterError::Api)? {
            FolderFilter::Folder(_) => Ok(FolderFilter::Folder(self.folder_id(input)?)),
            other => Ok(other),
        }
    }

    /// Resolves a display index (`p1`, `3`) against the listing it was shown in.
    pub fn note_id_at(&self, listing: &[DisplayNote], input: &str) -> Result<NoteId> {
        let index: DisplayIndex = input.parse().map_err(JotterError::Api)?;
        resolve(listing, &index)
    }

    /// Resolves an index or range (`2-4`, `p1-p2`) to note ids, in order.
    pub fn note_ids_at(&self, listing: &[DisplayNote], input: &str) -> Result<Vec<NoteId>> {
        parse_index_or_range(input, listing.len())
            .map_err(JotterError::Api)?
            .iter()
            .map(|index| resolve(listing, index))
            .collect()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::index::index_projection;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn make_api(store: InMemoryStore) -> (JotterApi<InMemoryStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (JotterApi::new(store, dir.path()), dir)
    }

    #[test]
    fn create_dispatches_and_lists() {
        let (mut api, _dir) = make_api(InMemoryStore::new());
        let result = api.create_note("Title".into(), "Body".into()).unwrap();
        assert_eq!(result.note().unwrap().title, "Title");

        let listed = api.list_notes("", &FolderFilter::All, ViewMode::Grid).unwrap();
        assert_eq!(listed.projection.unwrap().len(), 1);
    }

    #[test]
    fn note_id_at_resolves_display_indexes() {
        let store = StoreFixture::new()
            .with_note("a", "A", "")
            .with_pinned_note("b", "B", "")
            .store;
        let (api, _dir) = make_api(store);

        let projection = api
            .list_notes("", &FolderFilter::All, ViewMode::Grid)
            .unwrap()
            .projection
            .unwrap();
        let listing = index_projection(&projection);

        assert_eq!(api.note_id_at(&listing, "p1").unwrap(), NoteId::from("b"));
        assert_eq!(api.note_id_at(&listing, "1").unwrap(), NoteId::from("a"));
        assert!(matches!(
            api.note_id_at(&listing, "2"),
            Err(JotterError::Api(_))
        ));
        assert!(api.note_id_at(&listing, "zz").is_err());

        assert_eq!(
            api.note_ids_at(&listing, "p1-p1").unwrap(),
            vec![NoteId::from("b")]
        );
        assert!(api.note_ids_at(&listing, "1-2").is_err());
        assert!(matches!(
            api.note_ids_at(&listing, "1-18446744073709551615"),
            Err(JotterError::Api(_))
        ));
        assert!(matches!(
            api.note_ids_at(&listing, "1-4000000000"),
            Err(JotterError::Api(_))
        ));
    }

    #[test]
    fn folder_filter_accepts_names() {
        let store = StoreFixture::new().with_folder("w", "Work").store;
        let (api, _dir) = make_api(store);

        assert_eq!(api.folder_filter("all").unwrap(), FolderFilter::All);
        assert_eq!(api.folder_filter("unfiled").unwrap(), FolderFilter::Unfiled);
        assert_eq!(
            api.folder_filter("work").unwrap(),
            FolderFilter::Folder("w".into())
        );
        assert!(matches!(
            api.folder_filter("home"),
            Err(JotterError::FolderNotFound(_))
        ));
    }

    #[test]
    fn folder_operations_by_name() {
        let (mut api, _dir) = make_api(InMemoryStore::new());
        api.create_folder("Work".into(), None).unwrap();
        api.rename_folder("work", "Office".into()).unwrap();
        let result = api.delete_folder("Office").unwrap();
        assert!(result.folders.is_empty());
    }

    #[test]
    fn share_goes_through_the_given_clipboard() {
        let store = StoreFixture::new().with_note("1", "T", "content").store;
        let (api, _dir) = make_api(store);
        let mut clip = MemoryClipboard::default();

        let result = api.share_note(&"1".into(), &mut clip).unwrap();
        assert_eq!(result.shared, Some(true));
        assert_eq!(clip.copied, vec!["content"]);
    }

    #[test]
    fn config_uses_the_api_directory() {
        let (api, dir) = make_api(InMemoryStore::new());
        api.config(ConfigAction::Set("view-mode".into(), "list".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());

        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().view_mode, ViewMode::List);
    }
}
