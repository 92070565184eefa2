//! Note tagging commands.
//!
//! - `add_tags`: add tags to a note (tags it already has are skipped)
//! - `remove_tags`: remove tags from a note
//!
//! Tags keep their insertion order for display. The note is only saved, and
//! `updated_at` only refreshed, when its tag list actually changed.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotterError, Result};
use crate::model::NoteId;
use crate::store::DataStore;
use tracing::info;

pub fn add_tags<S: DataStore>(store: &mut S, id: &NoteId, tags: &[String]) -> Result<CmdResult> {
    if tags.is_empty() {
        return Err(JotterError::Api("No tags specified".to_string()));
    }

    let mut note = store.get_note(id)?;
    let added: Vec<&str> = tags
        .iter()
        .filter(|tag| note.add_tag(tag))
        .map(|tag| tag.trim())
        .collect();

    let mut result = CmdResult::default();
    if added.is_empty() {
        result.add_message(CmdMessage::info("No new tags"));
    } else {
        note.touch();
        store.save_note(&note)?;
        info!(note_id = %id, tags = ?added, "tags added");
        result.add_message(CmdMessage::success(format!("Tagged: {}", added.join(", "))));
    }
    Ok(result.with_affected_notes(vec![note]))
}

pub fn remove_tags<S: DataStore>(
    store: &mut S,
    id: &NoteId,
    tags: &[String],
) -> Result<CmdResult> {
    if tags.is_empty() {
        return Err(JotterError::Api("No tags specified".to_string()));
    }

    let mut note = store.get_note(id)?;
    let removed: Vec<&str> = tags
        .iter()
        .filter(|tag| note.remove_tag(tag))
        .map(|tag| tag.trim())
        .collect();

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info("No matching tags"));
    } else {
        note.touch();
        store.save_note(&note)?;
        info!(note_id = %id, tags = ?removed, "tags removed");
        result.add_message(CmdMessage::success(format!(
            "Untagged: {}",
            removed.join(", ")
        )));
    }
    Ok(result.with_affected_notes(vec![note]))
}
