//! Editor save.
//!
//! The editor holds a draft (title + content) for either a new note or an existing
//! one. Saving a new draft creates the note; saving an existing one writes title and
//! content only if either changed, so repeated saves of an untouched draft do not
//! bump `updated_at`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteId, NoteUpdate};
use crate::store::DataStore;
use tracing::debug;

use super::{create, update};

pub fn run<S: DataStore>(
    store: &mut S,
    id: Option<&NoteId>,
    title: String,
    content: String,
) -> Result<CmdResult> {
    let Some(id) = id else {
        return create::run(store, title, content);
    };

    let current = store.get_note(id)?;
    if current.title == title && current.content == content {
        debug!(note_id = %id, "save skipped, no changes");
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No changes"));
        return Ok(result.with_affected_notes(vec![current]));
    }

    let mut result = update::run(store, id, NoteUpdate::new().title(title).content(content))?;
    result.messages = vec![CmdMessage::success("Note saved")];
    Ok(result)
}
