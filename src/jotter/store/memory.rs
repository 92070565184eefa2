use super::DataStore;
use crate::error::{JotterError, Result};
use crate::model::{Folder, FolderId, Note, NoteId};

/// In-memory note store. Does NOT persist data.
///
/// Backed by vectors so that listing order is insertion order; note volumes are
/// small enough that linear lookups are not a concern.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    folders: Vec<Folder>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn note_position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| &n.id == id)
    }

    fn folder_position(&self, id: &FolderId) -> Option<usize> {
        self.folders.iter().position(|f| &f.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        match self.note_position(&note.id) {
            Some(pos) => self.notes[pos] = note.clone(),
            None => self.notes.push(note.clone()),
        }
        Ok(())
    }

    fn get_note(&self, id: &NoteId) -> Result<Note> {
        self.notes
            .iter()
            .find(|n| &n.id == id)
            .cloned()
            .ok_or_else(|| JotterError::NoteNotFound(id.clone()))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<()> {
        let pos = self
            .note_position(id)
            .ok_or_else(|| JotterError::NoteNotFound(id.clone()))?;
        self.notes.remove(pos);
        Ok(())
    }

    fn save_folder(&mut self, folder: &Folder) -> Result<()> {
        match self.folder_position(&folder.id) {
            Some(pos) => self.folders[pos] = folder.clone(),
            None => self.folders.push(folder.clone()),
        }
        Ok(())
    }

    fn get_folder(&self, id: &FolderId) -> Result<Folder> {
        self.folders
            .iter()
            .find(|f| &f.id == id)
            .cloned()
            .ok_or_else(|| JotterError::FolderNotFound(id.clone()))
    }

    fn list_folders(&self) -> Result<Vec<Folder>> {
        Ok(self.folders.clone())
    }

    fn delete_folder(&mut self, id: &FolderId) -> Result<()> {
        let pos = self
            .folder_position(id)
            .ok_or_else(|| JotterError::FolderNotFound(id.clone()))?;
        self.folders.remove(pos);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                );
                self.store.save_note(&note).unwrap();
            }
            self
        }

        pub fn with_note(mut self, id: &str, title: &str, content: &str) -> Self {
            let note = Note::with_id(id.into(), title.to_string(), content.to_string());
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_pinned_note(mut self, id: &str, title: &str, content: &str) -> Self {
            let mut note = Note::with_id(id.into(), title.to_string(), content.to_string());
            note.is_pinned = true;
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_tags(mut self, id: &str, tags: &[&str]) -> Self {
            let mut note = self.store.get_note(&id.into()).unwrap();
            for tag in tags {
                note.add_tag(tag);
            }
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_folder(mut self, id: &str, name: &str) -> Self {
            let folder = Folder {
                id: id.into(),
                name: name.to_string(),
                color: "#3b82f6".to_string(),
            };
            self.store.save_folder(&folder).unwrap();
            self
        }

        /// Files an existing note into a folder id without checking the folder exists.
        pub fn filed(mut self, note_id: &str, folder_id: &str) -> Self {
            let mut note = self.store.get_note(&note_id.into()).unwrap();
            note.folder_id = Some(folder_id.into());
            self.store.save_note(&note).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_keeps_insertion_order_on_update() {
        let mut store = InMemoryStore::new();
        let a = Note::with_id("a".into(), "A".into(), "".into());
        let mut b = Note::with_id("b".into(), "B".into(), "".into());
        store.save_note(&a).unwrap();
        store.save_note(&b).unwrap();

        b.title = "B2".into();
        store.save_note(&b).unwrap();
        store
            .save_note(&Note::with_id("c".into(), "C".into(), "".into()))
            .unwrap();

        let titles: Vec<_> = store
            .list_notes()
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["A", "B2", "C"]);
    }

    #[test]
    fn delete_twice_is_not_found() {
        let mut store = InMemoryStore::new();
        let note = Note::new("A".into(), "".into());
        store.save_note(&note).unwrap();
        store.delete_note(&note.id).unwrap();

        let err = store.delete_note(&note.id).unwrap_err();
        assert!(matches!(err, JotterError::NoteNotFound(id) if id == note.id));
    }

    #[test]
    fn folders_round_trip() {
        let mut store = InMemoryStore::new();
        let folder = Folder::new("Work".into(), "#ef4444".into());
        store.save_folder(&folder).unwrap();
        assert!(store.contains_folder(&folder.id));
        assert_eq!(store.get_folder(&folder.id).unwrap().name, "Work");

        store.delete_folder(&folder.id).unwrap();
        assert!(store.list_folders().unwrap().is_empty());
        assert!(matches!(
            store.delete_folder(&folder.id),
            Err(JotterError::FolderNotFound(_))
        ));
    }
}
