use crate::clipboard::ClipboardSink;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;
use tracing::{info, warn};

/// Hands the note's content (not its title) to the clipboard.
///
/// A clipboard failure is an outcome, not an error: `shared` is `Some(false)` and an
/// error message is attached. A missing note still fails with `NoteNotFound`.
pub fn run<S: DataStore, C: ClipboardSink + ?Sized>(
    store: &S,
    id: &NoteId,
    clipboard: &mut C,
) -> Result<CmdResult> {
    let note = store.get_note(id)?;
    let mut result = CmdResult::default();

    match clipboard.copy(&note.content) {
        Ok(()) => {
            info!(note_id = %id, "note shared");
            result.shared = Some(true);
            result.add_message(CmdMessage::success("Note content copied to clipboard"));
        }
        Err(e) => {
            warn!(note_id = %id, error = %e, "share failed");
            result.shared = Some(false);
            result.add_message(CmdMessage::error("Failed to copy note"));
        }
    }
    Ok(result.with_affected_notes(vec![note]))
}
