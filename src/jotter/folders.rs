//! # Folder Index
//!
//! A read-only view over folders with note counts derived from the current notes.
//! Counts are recomputed on every call and never stored, so they cannot drift from
//! the note store.
//!
//! A note whose `folder_id` names a folder that no longer exists is "unfiled" here
//! and everywhere else that reads through [`unfile_dangling`].

use crate::model::{Folder, FolderId, Note, NoteId};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Colors handed out to new folders that were not given one, in order.
pub const FOLDER_PALETTE: &[&str] = &[
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#64748b",
];

/// A folder as listed to a UI: metadata plus its derived note count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub id: FolderId,
    pub name: String,
    pub color: String,
    pub note_count: usize,
}

/// Lists `folders` in their given order with counts computed from `notes`.
pub fn list(folders: &[Folder], notes: &[Note]) -> Vec<FolderEntry> {
    folders
        .iter()
        .map(|folder| FolderEntry {
            id: folder.id.clone(),
            name: folder.name.clone(),
            color: folder.color.clone(),
            note_count: notes_in(&folder.id, notes).len(),
        })
        .collect()
}

/// Ids of the notes filed in `folder_id`.
pub fn notes_in(folder_id: &FolderId, notes: &[Note]) -> BTreeSet<NoteId> {
    notes
        .iter()
        .filter(|n| n.folder_id.as_ref() == Some(folder_id))
        .map(|n| n.id.clone())
        .collect()
}

/// Number of notes with no folder or a folder that no longer exists.
pub fn unfiled_count(folders: &[Folder], notes: &[Note]) -> usize {
    let known = known_ids(folders);
    notes
        .iter()
        .filter(|n| match &n.folder_id {
            Some(id) => !known.contains(id),
            None => true,
        })
        .count()
}

/// Clears folder references that point at folders not in `folders`.
pub fn unfile_dangling(notes: &mut [Note], folders: &[Folder]) {
    let known = known_ids(folders);
    for note in notes.iter_mut() {
        if note.folder_id.as_ref().is_some_and(|id| !known.contains(id)) {
            note.folder_id = None;
        }
    }
}

/// Picks the palette color for the `existing`-th folder.
pub fn next_color(existing: usize) -> &'static str {
    FOLDER_PALETTE[existing % FOLDER_PALETTE.len()]
}

fn known_ids(folders: &[Folder]) -> HashSet<&FolderId> {
    folders.iter().map(|f| &f.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str) -> Folder {
        Folder {
            id: id.into(),
            name: name.into(),
            color: "#000000".into(),
        }
    }

    fn filed(id: &str, folder: Option<&str>) -> Note {
        let mut n = Note::with_id(id.into(), id.into(), "".into());
        n.folder_id = folder.map(FolderId::from);
        n
    }

    #[test]
    fn counts_are_derived_and_zero_when_empty() {
        let folders = vec![folder("w", "Work"), folder("p", "Personal")];
        let notes = vec![filed("1", Some("w")), filed("2", Some("w")), filed("3", None)];

        let entries = list(&folders, &notes);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Work");
        assert_eq!(entries[0].note_count, 2);
        assert_eq!(entries[1].name, "Personal");
        assert_eq!(entries[1].note_count, 0);
    }

    #[test]
    fn notes_in_returns_ids() {
        let notes = vec![filed("1", Some("w")), filed("2", None)];
        let ids = notes_in(&"w".into(), &notes);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![NoteId::from("1")]);
    }

    #[test]
    fn dangling_references_read_as_unfiled() {
        let folders = vec![folder("w", "Work")];
        let mut notes = vec![
            filed("1", Some("w")),
            filed("2", Some("gone")),
            filed("3", None),
        ];
        assert_eq!(unfiled_count(&folders, &notes), 2);

        unfile_dangling(&mut notes, &folders);
        assert_eq!(notes[0].folder_id, Some("w".into()));
        assert_eq!(notes[1].folder_id, None);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(next_color(0), FOLDER_PALETTE[0]);
        assert_eq!(next_color(FOLDER_PALETTE.len()), FOLDER_PALETTE[0]);
        assert_eq!(next_color(1), FOLDER_PALETTE[1]);
    }
}
