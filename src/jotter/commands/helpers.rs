use crate::error::{JotterError, Result};
use crate::folders::unfile_dangling;
use crate::model::{FolderId, Note};
use crate::store::DataStore;

/// Reads all notes with dangling folder references cleared, as every listing sees them.
pub fn notes_snapshot<S: DataStore>(store: &S) -> Result<Vec<Note>> {
    let mut notes = store.list_notes()?;
    let folders = store.list_folders()?;
    unfile_dangling(&mut notes, &folders);
    Ok(notes)
}

/// Fails with `FolderNotFound` unless `folder_id` is unset or names an existing folder.
pub fn require_folder<S: DataStore>(store: &S, folder_id: Option<&FolderId>) -> Result<()> {
    match folder_id {
        Some(id) if !store.contains_folder(id) => Err(JotterError::FolderNotFound(id.clone())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn snapshot_unfiles_dangling_notes() {
        let store = StoreFixture::new()
            .with_folder("w", "Work")
            .with_note("1", "A", "")
            .with_note("2", "B", "")
            .filed("1", "w")
            .filed("2", "gone")
            .store;

        let notes = notes_snapshot(&store).unwrap();
        assert_eq!(notes[0].folder_id, Some("w".into()));
        assert_eq!(notes[1].folder_id, None);
        // The store itself is untouched.
        assert_eq!(
            store.get_note(&"2".into()).unwrap().folder_id,
            Some("gone".into())
        );
    }

    #[test]
    fn require_folder_checks_existence() {
        let store = StoreFixture::new().with_folder("w", "Work").store;
        assert!(require_folder(&store, None).is_ok());
        assert!(require_folder(&store, Some(&"w".into())).is_ok());
        assert!(matches!(
            require_folder(&store, Some(&"x".into())),
            Err(JotterError::FolderNotFound(_))
        ));
    }
}
