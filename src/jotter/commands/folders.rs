//! Folder management.
//!
//! Folders are owned by the store next to notes, but notes are never rewritten when a
//! folder goes away: their reference just dangles, and every reader treats it as
//! unfiled (see [`crate::folders`]).

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotterError, Result};
use crate::folders::{self, next_color};
use crate::model::{Folder, FolderId};
use crate::query::{ALL_FOLDERS, NO_FOLDER, UNFILED};
use crate::store::DataStore;
use tracing::{debug, info};

/// Lists folders with derived note counts, plus the unfiled count.
pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let folders = store.list_folders()?;
    let notes = store.list_notes()?;
    debug!(folders = folders.len(), "listing folders");

    let entries = folders::list(&folders, &notes);
    let unfiled = folders::unfiled_count(&folders, &notes);
    Ok(CmdResult::default().with_folders(entries, unfiled))
}

pub fn create<S: DataStore>(
    store: &mut S,
    name: String,
    color: Option<String>,
) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let color = match color {
        Some(c) => c,
        None => next_color(store.list_folders()?.len()).to_string(),
    };

    let folder = Folder::new(name, color);
    store.save_folder(&folder)?;
    info!(folder_id = %folder.id, "folder created");

    let mut result = list(store)?;
    result.add_message(CmdMessage::success(format!("Folder created: {}", folder.name)));
    Ok(result)
}

pub fn rename<S: DataStore>(store: &mut S, id: &FolderId, name: String) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let mut folder = store.get_folder(id)?;
    let old = std::mem::replace(&mut folder.name, name);
    store.save_folder(&folder)?;
    info!(folder_id = %id, "folder renamed");

    let mut result = list(store)?;
    result.add_message(CmdMessage::success(format!(
        "Folder renamed: {} -> {}",
        old, folder.name
    )));
    Ok(result)
}

/// Deletes a folder. Its notes stay in the store and read as unfiled from now on.
pub fn delete<S: DataStore>(store: &mut S, id: &FolderId) -> Result<CmdResult> {
    let folder = store.get_folder(id)?;
    let orphaned = folders::notes_in(id, &store.list_notes()?).len();
    store.delete_folder(id)?;
    info!(folder_id = %id, orphaned, "folder deleted");

    let mut result = list(store)?;
    result.add_message(CmdMessage::success(format!("Folder deleted: {}", folder.name)));
    if orphaned > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} note{} moved to unfiled",
            orphaned,
            if orphaned == 1 { "" } else { "s" }
        )));
    }
    Ok(result)
}

/// Finds a folder id by exact id or case-insensitive name.
pub fn find<S: DataStore>(store: &S, id_or_name: &str) -> Result<FolderId> {
    let folders = store.list_folders()?;
    folders
        .iter()
        .find(|f| f.id.as_str() == id_or_name)
        .or_else(|| {
            folders
                .iter()
                .find(|f| f.name.eq_ignore_ascii_case(id_or_name))
        })
        .map(|f| f.id.clone())
        .ok_or_else(|| JotterError::FolderNotFound(FolderId::from(id_or_name)))
}

fn validate_name(name: String) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(JotterError::Api("Folder name cannot be empty".to_string()));
    }
    if [ALL_FOLDERS, UNFILED, NO_FOLDER]
        .iter()
        .any(|reserved| trimmed.eq_ignore_ascii_case(reserved))
    {
        return Err(JotterError::Api(format!(
            "Folder name is reserved: {}",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create as create_note, update};
    use crate::folders::FOLDER_PALETTE;
    use crate::model::NoteUpdate;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_assigns_palette_colors_and_lists() {
        let mut store = InMemoryStore::new();
        create(&mut store, "Work".into(), None).unwrap();
        let result = create(&mut store, "Home".into(), Some("#123456".into())).unwrap();

        assert_eq!(result.folders.len(), 2);
        assert_eq!(result.folders[0].color, FOLDER_PALETTE[0]);
        assert_eq!(result.folders[1].color, "#123456");
        assert_eq!(result.folders[1].note_count, 0);
        assert_eq!(result.messages[0].content, "Folder created: Home");
    }

    #[test]
    fn counts_follow_note_changes() {
        let mut store = InMemoryStore::new();
        let work = create(&mut store, "Work".into(), None).unwrap().folders[0]
            .id
            .clone();
        let note = create_note::run(&mut store, "A".into(), "".into())
            .unwrap()
            .affected_notes
            .remove(0);

        assert_eq!(list(&store).unwrap().folders[0].note_count, 0);
        assert_eq!(list(&store).unwrap().unfiled_count, Some(1));

        update::run(&mut store, &note.id, NoteUpdate::new().folder(Some(work))).unwrap();
        let result = list(&store).unwrap();
        assert_eq!(result.folders[0].note_count, 1);
        assert_eq!(result.unfiled_count, Some(0));
    }

    #[test]
    fn delete_leaves_notes_unfiled() {
        let mut store = StoreFixture::new()
            .with_folder("w", "Work")
            .with_note("1", "A", "")
            .filed("1", "w")
            .store;

        let result = delete(&mut store, &"w".into()).unwrap();
        assert!(result.folders.is_empty());
        assert_eq!(result.unfiled_count, Some(1));
        assert_eq!(result.messages[1].content, "1 note moved to unfiled");
        assert!(matches!(
            delete(&mut store, &"w".into()),
            Err(JotterError::FolderNotFound(_))
        ));
    }

    #[test]
    fn rename_and_find() {
        let mut store = StoreFixture::new().with_folder("w", "Work").store;
        rename(&mut store, &"w".into(), "  Office ".into()).unwrap();

        assert_eq!(find(&store, "office").unwrap(), FolderId::from("w"));
        assert_eq!(find(&store, "w").unwrap(), FolderId::from("w"));
        assert!(find(&store, "Work").is_err());
        assert!(rename(&mut store, &"w".into(), "   ".into()).is_err());
    }

    #[test]
    fn filter_and_move_keywords_are_not_folder_names() {
        let mut store = StoreFixture::new().with_folder("w", "Work").store;
        for name in ["none", " None ", "ALL", "unfiled"] {
            let err = create(&mut store, name.into(), None).unwrap_err();
            assert!(err.to_string().contains("Folder name is reserved"));
            assert!(rename(&mut store, &"w".into(), name.into()).is_err());
        }
        assert_eq!(list(&store).unwrap().folders.len(), 1);
        assert!(create(&mut store, "Nonesuch".into(), None).is_ok());
    }
}
