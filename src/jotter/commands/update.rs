use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteId, NoteUpdate};
use crate::store::DataStore;
use tracing::info;

use super::helpers::require_folder;

/// Applies the supplied fields of `update` and refreshes `updated_at`.
///
/// `updated_at` is refreshed even when `update` carries no fields.
pub fn run<S: DataStore>(store: &mut S, id: &NoteId, update: NoteUpdate) -> Result<CmdResult> {
    let mut note = store.get_note(id)?;
    if let Some(folder_id) = &update.folder_id {
        require_folder(store, folder_id.as_ref())?;
    }

    apply(&mut note, update);
    store.save_note(&note)?;
    info!(note_id = %note.id, "note updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated: {}", note.title)));
    Ok(result.with_affected_notes(vec![note]))
}

pub(crate) fn apply(note: &mut Note, update: NoteUpdate) {
    let NoteUpdate {
        title,
        content,
        tags,
        folder_id,
        is_pinned,
        has_image,
        has_voice_note,
    } = update;

    if let Some(title) = title {
        note.title = title;
    }
    if let Some(content) = content {
        note.content = content;
    }
    if let Some(tags) = tags {
        note.tags = crate::model::normalize_tags(tags);
    }
    if let Some(folder_id) = folder_id {
        note.folder_id = folder_id;
    }
    if let Some(is_pinned) = is_pinned {
        note.is_pinned = is_pinned;
    }
    if let Some(has_image) = has_image {
        note.has_image = has_image;
    }
    if let Some(has_voice_note) = has_voice_note {
        note.has_voice_note = has_voice_note;
    }
    note.touch();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JotterError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn applies_only_supplied_fields() {
        let mut store = StoreFixture::new()
            .with_note("1", "Title", "Old")
            .with_tags("1", &["keep"])
            .store;
        let before = store.get_note(&"1".into()).unwrap();

        let result = run(&mut store, &"1".into(), NoteUpdate::new().content("New")).unwrap();
        let note = result.note().unwrap();

        assert_eq!(note.title, "Title");
        assert_eq!(note.content, "New");
        assert_eq!(note.tags, vec!["keep"]);
        assert_eq!(note.created_at, before.created_at);
        assert!(note.updated_at >= before.updated_at);
        assert_eq!(store.get_note(&"1".into()).unwrap().content, "New");
    }

    #[test]
    fn empty_update_still_touches() {
        let mut store = StoreFixture::new().with_note("1", "T", "").store;
        let mut stale = store.get_note(&"1".into()).unwrap();
        stale.updated_at -= chrono::Duration::seconds(5);
        stale.created_at = stale.updated_at;
        store.save_note(&stale).unwrap();

        let result = run(&mut store, &"1".into(), NoteUpdate::new()).unwrap();
        assert!(result.note().unwrap().updated_at > stale.updated_at);
    }

    #[test]
    fn normalizes_tags() {
        let mut store = StoreFixture::new().with_note("1", "T", "").store;
        let update = NoteUpdate {
            tags: Some(vec!["a".into(), " a ".into(), "".into(), "b".into()]),
            ..NoteUpdate::default()
        };
        let result = run(&mut store, &"1".into(), update).unwrap();
        assert_eq!(result.note().unwrap().tags, vec!["a", "b"]);
    }

    #[test]
    fn missing_note_is_not_found() {
        let mut store = StoreFixture::new().store;
        let err = run(&mut store, &"nope".into(), NoteUpdate::new().title("x")).unwrap_err();
        assert!(matches!(err, JotterError::NoteNotFound(_)));
    }

    #[test]
    fn unknown_folder_is_rejected_and_nothing_changes() {
        let mut store = StoreFixture::new().with_note("1", "T", "").store;
        let update = NoteUpdate::new().title("Changed").folder(Some("ghost".into()));

        let err = run(&mut store, &"1".into(), update).unwrap_err();
        assert!(matches!(err, JotterError::FolderNotFound(_)));
        assert_eq!(store.get_note(&"1".into()).unwrap().title, "T");
    }

    #[test]
    fn files_and_unfiles() {
        let mut store = StoreFixture::new()
            .with_folder("w", "Work")
            .with_note("1", "T", "")
            .store;

        run(&mut store, &"1".into(), NoteUpdate::new().folder(Some("w".into()))).unwrap();
        assert_eq!(store.get_note(&"1".into()).unwrap().folder_id, Some("w".into()));

        run(&mut store, &"1".into(), NoteUpdate::new().folder(None)).unwrap();
        assert_eq!(store.get_note(&"1".into()).unwrap().folder_id, None);
    }
}
