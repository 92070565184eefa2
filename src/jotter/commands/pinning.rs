use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;
use tracing::info;

/// Flips `is_pinned` and refreshes `updated_at`.
pub fn toggle<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    let note = store.get_note(id)?;
    set_pinned(store, id, !note.is_pinned)
}

pub fn pin<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    set_pinned(store, id, true)
}

pub fn unpin<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    set_pinned(store, id, false)
}

fn set_pinned<S: DataStore>(store: &mut S, id: &NoteId, is_pinned: bool) -> Result<CmdResult> {
    let mut note = store.get_note(id)?;
    note.is_pinned = is_pinned;
    note.touch();
    store.save_note(&note)?;
    info!(note_id = %id, is_pinned, "pin state changed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if is_pinned {
        "Note pinned"
    } else {
        "Note unpinned"
    }));
    Ok(result.with_affected_notes(vec![note]))
}
