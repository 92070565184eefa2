use crate::commands::CmdResult;
use crate::error::{JotterError, Result};
use crate::model::NoteId;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::notes_snapshot;

/// Reads a single note for the preview screen.
pub fn run<S: DataStore>(store: &S, id: &NoteId) -> Result<CmdResult> {
    debug!(note_id = %id, "viewing note");
    let note = notes_snapshot(store)?
        .into_iter()
        .find(|n| &n.id == id)
        .ok_or_else(|| JotterError::NoteNotFound(id.clone()))?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_note() {
        let store = StoreFixture::new().with_note("1", "Title", "Body").store;
        let result = run(&store, &"1".into()).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].content, "Body");
    }

    #[test]
    fn dangling_folder_reads_as_unfiled() {
        let store = StoreFixture::new()
            .with_note("1", "Title", "")
            .filed("1", "gone")
            .store;
        let result = run(&store, &"1".into()).unwrap();
        assert_eq!(result.listed_notes[0].folder_id, None);
    }

    #[test]
    fn missing_note_is_not_found() {
        let store = StoreFixture::new().store;
        assert!(matches!(
            run(&store, &"1".into()),
            Err(JotterError::NoteNotFound(_))
        ));
    }
}
