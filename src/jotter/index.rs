//! # Display Indexes
//!
//! Short positional handles for notes as they are currently listed, so a terminal
//! user can type `p1` or `3` instead of a UUID.
//!
//! - Pinned notes are numbered `p1, p2, ...` in projection order.
//! - Unpinned notes are numbered `1, 2, ...`.
//! - Search results are a flat list numbered `1, 2, ...` in result order.
//!
//! Indexes are only meaningful against the listing they were assigned from; they are
//! resolved back to a [`NoteId`] before reaching the command layer.

use crate::error::{JotterError, Result};
use crate::model::{Note, NoteId};
use crate::projection::Projection;
use crate::query::SearchHit;
use std::str::FromStr;

/// A user-facing index for a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Pinned(usize),
    Regular(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Pinned(i) => write!(f, "p{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('p') {
            if let Ok(n) = rest.parse::<usize>() {
                if n > 0 {
                    return Ok(DisplayIndex::Pinned(n));
                }
            }
        }
        if let Ok(n) = s.parse::<usize>() {
            if n > 0 {
                return Ok(DisplayIndex::Regular(n));
            }
        }
        Err(format!("Invalid index format: {}", s))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Assigns display indexes to a projection: pinned first, then the rest.
pub fn index_projection(projection: &Projection) -> Vec<DisplayNote> {
    let pinned = projection
        .pinned
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex::Pinned(i + 1),
        });
    let regular = projection
        .unpinned
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex::Regular(i + 1),
        });
    pinned.chain(regular).collect()
}

/// Numbers search hits `1..=n` in result order.
pub fn index_hits(hits: &[SearchHit]) -> Vec<DisplayNote> {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| DisplayNote {
            note: hit.note.clone(),
            index: DisplayIndex::Regular(i + 1),
        })
        .collect()
}

/// Resolves a display index against a listing.
pub fn resolve(listing: &[DisplayNote], index: &DisplayIndex) -> Result<NoteId> {
    listing
        .iter()
        .find(|dn| &dn.index == index)
        .map(|dn| dn.note.id.clone())
        .ok_or_else(|| JotterError::Api(format!("Index {} not found in current listing", index)))
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3", "p1"
/// - Range: "3-5" (expands to 3, 4, 5), "p1-p3" (expands to p1, p2, p3)
///
/// Both endpoints must be the same kind and start must be <= end. A range is only
/// expanded when its end fits in a listing of `limit` notes; whether each index
/// exists is checked later by [`resolve`].
pub fn parse_index_or_range(
    s: &str,
    limit: usize,
) -> std::result::Result<Vec<DisplayIndex>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            return expand_range(start, end, limit);
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

fn expand_range(
    start: DisplayIndex,
    end: DisplayIndex,
    limit: usize,
) -> std::result::Result<Vec<DisplayIndex>, String> {
    let past_listing = match &end {
        DisplayIndex::Pinned(e) | DisplayIndex::Regular(e) => *e > limit,
    };
    match (&start, &end) {
        (DisplayIndex::Regular(s), DisplayIndex::Regular(e))
        | (DisplayIndex::Pinned(s), DisplayIndex::Pinned(e))
            if s <= e && past_listing =>
        {
            Err(format!("Index {} not found in current listing", end))
        }
        (DisplayIndex::Regular(s), DisplayIndex::Regular(e)) if s <= e => {
            Ok((*s..=*e).map(DisplayIndex::Regular).collect())
        }
        (DisplayIndex::Pinned(s), DisplayIndex::Pinned(e)) if s <= e => {
            Ok((*s..=*e).map(DisplayIndex::Pinned).collect())
        }
        (DisplayIndex::Regular(_), DisplayIndex::Regular(_))
        | (DisplayIndex::Pinned(_), DisplayIndex::Pinned(_)) => Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        )),
        _ => Err(format!(
            "Invalid range: cannot mix index types ({} and {})",
            start, end
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewMode;
    use crate::projection::project;
    use crate::query::{search, FolderFilter};

    fn make_note(title: &str, pinned: bool) -> Note {
        let mut n = Note::new(title.to_string(), "".to_string());
        n.is_pinned = pinned;
        n
    }

    #[test]
    fn indexes_pinned_then_regular() {
        let notes = vec![
            make_note("Regular 1", false),
            make_note("Pinned 1", true),
            make_note("Regular 2", false),
        ];
        let listing = index_projection(&project(&notes, ViewMode::Grid));

        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].index, DisplayIndex::Pinned(1));
        assert_eq!(listing[0].note.title, "Pinned 1");
        assert_eq!(listing[1].index, DisplayIndex::Regular(1));
        assert_eq!(listing[1].note.title, "Regular 1");
        assert_eq!(listing[2].index, DisplayIndex::Regular(2));
    }

    #[test]
    fn resolves_and_reports_missing() {
        let notes = vec![make_note("A", true)];
        let listing = index_projection(&project(&notes, ViewMode::Grid));

        let id = resolve(&listing, &DisplayIndex::Pinned(1)).unwrap();
        assert_eq!(id, notes[0].id);

        let err = resolve(&listing, &DisplayIndex::Regular(1)).unwrap_err();
        assert!(err.to_string().contains("Index 1 not found"));
    }

    #[test]
    fn hits_are_numbered_flat() {
        let notes = vec![make_note("milk", false), make_note("more milk", true)];
        let listing = index_hits(&search(&notes, "milk", &FolderFilter::All));
        assert_eq!(listing[0].index, DisplayIndex::Regular(1));
        assert_eq!(listing[0].note.title, "more milk");
        assert_eq!(listing[1].index, DisplayIndex::Regular(2));
    }

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex::Regular(1)));
        assert_eq!(DisplayIndex::from_str("p12"), Ok(DisplayIndex::Pinned(12)));
        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("p").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert_eq!(DisplayIndex::Pinned(2).to_string(), "p2");
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(
            parse_index_or_range("2-4", 10),
            Ok(vec![
                DisplayIndex::Regular(2),
                DisplayIndex::Regular(3),
                DisplayIndex::Regular(4)
            ])
        );
        assert_eq!(
            parse_index_or_range("p1-p2", 10),
            Ok(vec![DisplayIndex::Pinned(1), DisplayIndex::Pinned(2)])
        );
        assert!(parse_index_or_range("4-2", 10)
            .unwrap_err()
            .contains("must be <= end"));
        assert!(parse_index_or_range("1-p3", 10)
            .unwrap_err()
            .contains("cannot mix index types"));
        assert!(parse_index_or_range("-5", 10).is_err());
    }

    #[test]
    fn ranges_past_the_listing_are_rejected_before_expanding() {
        assert!(parse_index_or_range("1-18446744073709551615", 3)
            .unwrap_err()
            .contains("Index 18446744073709551615 not found"));
        assert!(parse_index_or_range("p2-p4000000000", 3)
            .unwrap_err()
            .contains("not found in current listing"));
        assert_eq!(parse_index_or_range("3-3", 3).unwrap().len(), 1);
        // single indexes are left to `resolve`
        assert_eq!(
            parse_index_or_range("99", 3),
            Ok(vec![DisplayIndex::Regular(99)])
        );
    }
}
