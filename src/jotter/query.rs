//! # Query Engine
//!
//! Free-text search over a snapshot of notes, with an optional folder filter and
//! highlight spans for every matched field.
//!
//! ## Matching
//!
//! A note matches when the query is empty, or when the query occurs as a
//! case-insensitive substring of its title, its content, or any of its tags.
//!
//! Only the empty string is "match all". A query made of whitespace is searched for
//! literally, like any other text: the home list and the search screen both call
//! [`search`] with the raw input, so they can never disagree about it.
//!
//! ## Spans
//!
//! Spans are `[start, end)` **byte** offsets into the original field, so a renderer
//! can slice `&text[span.start..span.end]` directly. Case folding is done per char and
//! mapped back to the original offsets, so folding that changes byte lengths (e.g. `İ`)
//! still yields valid boundaries.
//!
//! ## Ordering
//!
//! Results are a stable partition: pinned hits first, then the rest, each group in the
//! order the notes were given (store insertion order). There is no re-sorting by
//! recency or relevance.

use crate::model::{FolderId, Note};
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted by [`FolderFilter::from_str`] for "every folder".
pub const ALL_FOLDERS: &str = "all";
/// Sentinel accepted by [`FolderFilter::from_str`] for notes without a folder.
pub const UNFILED: &str = "unfiled";
/// Target name that moves a note out of any folder.
pub const NO_FOLDER: &str = "none";

/// A half-open byte range `[start, end)` into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Spans for one matching tag, identified by its position in `Note::tags`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpans {
    pub index: usize,
    pub spans: Vec<Span>,
}

/// Per-field highlight spans for a search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSpans {
    pub title: Vec<Span>,
    pub content: Vec<Span>,
    pub tags: Vec<TagSpans>,
}

impl MatchSpans {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.tags.is_empty()
    }

    /// Spans for the tag at `index`, empty if that tag did not match.
    pub fn tag(&self, index: usize) -> &[Span] {
        self.tags
            .iter()
            .find(|t| t.index == index)
            .map(|t| t.spans.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub note: Note,
    pub spans: MatchSpans,
}

/// Which folder a search is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FolderFilter {
    #[default]
    All,
    Unfiled,
    Folder(FolderId),
}

impl FolderFilter {
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            FolderFilter::All => true,
            FolderFilter::Unfiled => note.folder_id.is_none(),
            FolderFilter::Folder(id) => note.folder_id.as_ref() == Some(id),
        }
    }
}

impl FromStr for FolderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("Folder filter cannot be empty".to_string()),
            ALL_FOLDERS => Ok(FolderFilter::All),
            UNFILED => Ok(FolderFilter::Unfiled),
            id => Ok(FolderFilter::Folder(FolderId::from(id))),
        }
    }
}

impl fmt::Display for FolderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderFilter::All => f.write_str(ALL_FOLDERS),
            FolderFilter::Unfiled => f.write_str(UNFILED),
            FolderFilter::Folder(id) => write!(f, "{}", id),
        }
    }
}

/// Searches `notes` for `query`, restricted by `filter`, pinned hits first.
pub fn search(notes: &[Note], query: &str, filter: &FolderFilter) -> Vec<SearchHit> {
    let (pinned, unpinned): (Vec<SearchHit>, Vec<SearchHit>) = notes
        .iter()
        .filter(|note| filter.matches(note))
        .filter_map(|note| {
            match_note(note, query).map(|spans| SearchHit {
                note: note.clone(),
                spans,
            })
        })
        .partition(|hit| hit.note.is_pinned);

    pinned.into_iter().chain(unpinned).collect()
}

/// Returns the highlight spans if `note` matches `query`, `None` otherwise.
///
/// An empty query matches with no spans.
pub fn match_note(note: &Note, query: &str) -> Option<MatchSpans> {
    if query.is_empty() {
        return Some(MatchSpans::default());
    }

    let spans = MatchSpans {
        title: find_spans(&note.title, query),
        content: find_spans(&note.content, query),
        tags: note
            .tags
            .iter()
            .enumerate()
            .filter_map(|(index, tag)| {
                let spans = find_spans(tag, query);
                (!spans.is_empty()).then_some(TagSpans { index, spans })
            })
            .collect(),
    };

    (!spans.is_empty()).then_some(spans)
}

/// Finds every non-overlapping, case-insensitive occurrence of `query` in `text`,
/// left to right, as byte ranges into `text`.
pub fn find_spans(text: &str, query: &str) -> Vec<Span> {
    let needle = fold(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let (haystack, origin) = fold_with_origin(text);
    let mut spans = Vec::new();
    let mut last_end = 0;

    for (start, matched) in haystack.match_indices(&needle) {
        let end = start + matched.len();
        let span = Span::new(origin[start].0, origin[end - 1].1);
        // Two folded matches can land inside one multi-char expansion.
        if span.start < last_end {
            continue;
        }
        last_end = span.end;
        spans.push(span);
    }

    spans
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercases `text`, recording for every folded byte the byte range of the
/// original char it came from.
fn fold_with_origin(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());

    for (idx, ch) in text.char_indices() {
        let end = idx + ch.len_utf8();
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.extend(std::iter::repeat((idx, end)).take(lower.len_utf8()));
        }
    }

    (folded, origin)
}

/// A segment of text in a search match, either plain text or a matched term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

/// Splits `text` into plain and matched segments according to `spans`.
///
/// Spans must be sorted and non-overlapping, as returned by [`find_spans`].
pub fn segments(text: &str, spans: &[Span]) -> Vec<MatchSegment> {
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            out.push(MatchSegment::Plain(text[cursor..span.start].to_string()));
        }
        out.push(MatchSegment::Match(text[span.start..span.end].to_string()));
        cursor = span.end;
    }
    if cursor < text.len() {
        out.push(MatchSegment::Plain(text[cursor..].to_string()));
    }

    out
}

/// One-line summary for a results header.
pub fn summary(count: usize, query: &str) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("Found {} {} for \"{}\"", count, noun, query)
}
