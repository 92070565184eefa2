use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ViewMode;
use crate::projection::project;
use crate::query::{search, FolderFilter};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::notes_snapshot;

/// The home listing: notes matching `query` within `filter`, grouped pinned/unpinned.
///
/// Uses the same matching as the search screen, so the two never disagree.
pub fn run<S: DataStore>(
    store: &S,
    query: &str,
    filter: &FolderFilter,
    view_mode: ViewMode,
) -> Result<CmdResult> {
    let notes = notes_snapshot(store)?;
    let matched: Vec<_> = search(&notes, query, filter)
        .into_iter()
        .map(|hit| hit.note)
        .collect();
    debug!(total = notes.len(), shown = matched.len(), %filter, "listing notes");

    Ok(CmdResult::default().with_projection(project(&matched, view_mode)))
}
