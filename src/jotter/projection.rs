//! # View-State Projector
//!
//! Turns a list of notes into the two-group presentation used everywhere notes are
//! listed: pinned notes, then everything else. The projection is a pure function of
//! its input and is rebuilt on every state change; there is no incremental diffing.

use crate::model::{Note, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Passed through for the renderer; does not influence the groups.
    pub view_mode: ViewMode,
    pub pinned: Vec<Note>,
    pub unpinned: Vec<Note>,
}

/// Splits `notes` into pinned and unpinned groups, keeping the input order in each.
pub fn project(notes: &[Note], view_mode: ViewMode) -> Projection {
    let (pinned, unpinned): (Vec<Note>, Vec<Note>) = notes.iter().cloned().partition(|n| n.is_pinned);
    Projection {
        view_mode,
        pinned,
        unpinned,
    }
}

impl Projection {
    pub fn len(&self) -> usize {
        self.pinned.len() + self.unpinned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.unpinned.is_empty()
    }

    /// Heading for the unpinned group. Only shown when a pinned group precedes it.
    pub fn unpinned_heading(&self) -> Option<&'static str> {
        (!self.pinned.is_empty() && !self.unpinned.is_empty()).then_some("All Notes")
    }

    /// The empty-state card to show instead of the groups, if any.
    pub fn empty_state(&self, has_query: bool) -> Option<EmptyState> {
        if !self.is_empty() {
            return None;
        }
        Some(if has_query {
            EmptyState::Search
        } else {
            EmptyState::Notes
        })
    }

    /// All notes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.pinned.iter().chain(self.unpinned.iter())
    }
}

/// Placeholder content for a screen with nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    Notes,
    Folders,
    Search,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::Notes => "No notes yet",
            EmptyState::Folders => "No folders yet",
            EmptyState::Search => "No results found",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmptyState::Notes => "Create your first note to get started",
            EmptyState::Folders => "Organize your notes by creating folders",
            EmptyState::Search => "Try searching with different keywords",
        }
    }

    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            EmptyState::Notes => Some("Create Note"),
            EmptyState::Folders => Some("Create Folder"),
            EmptyState::Search => None,
        }
    }
}
