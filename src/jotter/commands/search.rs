use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{search, FolderFilter};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::notes_snapshot;

/// The search screen: matching notes with highlight spans, pinned first.
pub fn run<S: DataStore>(store: &S, query: &str, filter: &FolderFilter) -> Result<CmdResult> {
    let notes = notes_snapshot(store)?;
    let hits = search(&notes, query, filter);
    debug!(query, %filter, hits = hits.len(), "search");
    Ok(CmdResult::default().with_hits(hits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Span;
    use crate::store::memory::fixtures::StoreFixture;

    fn grocery_store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_pinned_note("1", "Grocery List", "milk, eggs")
            .with_tags("1", &["home"])
            .with_note("2", "Project Plan", "milk the launch")
            .with_tags("2", &["work"])
            .store
    }

    #[test]
    fn milk_scenario_orders_pinned_first_with_spans() {
        let result = run(&grocery_store(), "milk", &FolderFilter::All).unwrap();
        let ids: Vec<_> = result.hits.iter().map(|h| h.note.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(result.hits[0].spans.content, vec![Span::new(0, 4)]);
        assert_eq!(result.hits[1].spans.content, vec![Span::new(0, 4)]);
    }

    #[test]
    fn empty_query_returns_everything_without_spans() {
        let result = run(&grocery_store(), "", &FolderFilter::All).unwrap();
        assert_eq!(result.hits.len(), 2);
        assert!(result.hits[0].note.is_pinned);
        assert!(result.hits.iter().all(|h| h.spans.is_empty()));
    }

    #[test]
    fn tag_only_match() {
        let result = run(&grocery_store(), "WORK", &FolderFilter::All).unwrap();
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].note.title, "Project Plan");
        assert_eq!(result.hits[0].spans.tag(0), &[Span::new(0, 4)]);
    }
}
