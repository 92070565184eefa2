use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::DataStore;
use tracing::info;

/// Copies a note's title, content, tags, folder and attachment flags into a new,
/// unpinned note with a fresh id and fresh timestamps. A folder that no longer exists
/// is not carried over: the copy starts unfiled.
pub fn run<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    let source = store.get_note(id)?;

    let mut copy = Note::new(source.title.clone(), source.content.clone());
    copy.tags = source.tags.clone();
    copy.folder_id = source
        .folder_id
        .clone()
        .filter(|folder_id| store.contains_folder(folder_id));
    copy.has_image = source.has_image;
    copy.has_voice_note = source.has_voice_note;
    store.save_note(&copy)?;
    info!(source_id = %id, note_id = %copy.id, "note duplicated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Note duplicated"));
    Ok(result.with_affected_notes(vec![copy]))
}
