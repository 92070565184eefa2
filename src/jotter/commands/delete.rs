use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;
use tracing::info;

/// Removes a note permanently. Deleting an id that is already gone is `NoteNotFound`.
pub fn run<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    let note = store.get_note(id)?;
    store.delete_note(id)?;
    info!(note_id = %id, "note deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Note deleted"));
    Ok(result.with_affected_notes(vec![note]))
}
