use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use tracing::info;

/// Creates an unpinned, unfiled, untagged note with both timestamps set to now.
pub fn run<S: DataStore>(store: &mut S, title: String, content: String) -> Result<CmdResult> {
    let note = Note::new(title, content);
    store.save_note(&note)?;
    info!(note_id = %note.id, "note created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    Ok(result.with_affected_notes(vec![note]))
}
