//! # Command Layer
//!
//! This module contains the business logic of jotter. Each user action lives in its
//! own submodule as plain functions over a [`DataStore`](crate::store::DataStore).
//!
//! Commands:
//! - operate on [`Note`] / [`Folder`](crate::model::Folder) values
//! - return a structured [`CmdResult`] (affected notes, listings, messages)
//! - never print, prompt, or exit; the UI decides how to present the result
//!
//! Failures are fail-fast: a missing id is `NoteNotFound` / `FolderNotFound` straight
//! away. Outcomes that are not errors for the core (a clipboard that refused text, a
//! save with nothing to save) come back as messages.
//!
//! ## Command Modules
//!
//! - [`create`], [`update`], [`delete`], [`pinning`], [`duplicate`]: note lifecycle
//! - [`save`]: editor save (create-or-update, skipping no-op saves)
//! - [`tagging`], [`filing`]: tags and folder membership of a note
//! - [`view`]: read a single note for preview
//! - [`list`], [`search`]: filtered listings
//! - [`folders`]: folder management and the folder index
//! - [`share`]: hand a note's content to the clipboard collaborator
//! - [`config`]: client settings

use crate::config::JotterConfig;
use crate::folders::FolderEntry;
use crate::model::Note;
use crate::projection::Projection;
use crate::query::SearchHit;

pub mod config;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod filing;
pub mod folders;
pub mod helpers;
pub mod list;
pub mod pinning;
pub mod save;
pub mod search;
pub mod share;
pub mod tagging;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes created or modified by the command, in their post-command state.
    /// For `delete`, the note as it was before removal.
    pub affected_notes: Vec<Note>,
    /// Notes read for display (preview).
    pub listed_notes: Vec<Note>,
    pub projection: Option<Projection>,
    pub hits: Vec<SearchHit>,
    pub folders: Vec<FolderEntry>,
    /// Notes with no (existing) folder, reported alongside `folders`.
    pub unfiled_count: Option<usize>,
    /// Outcome of a share: `Some(true)` copied, `Some(false)` clipboard refused.
    pub shared: Option<bool>,
    pub config: Option<JotterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_folders(mut self, folders: Vec<FolderEntry>, unfiled_count: usize) -> Self {
        self.folders = folders;
        self.unfiled_count = Some(unfiled_count);
        self
    }

    pub fn with_config(mut self, config: JotterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The single note a lifecycle command produced, if any.
    pub fn note(&self) -> Option<&Note> {
        self.affected_notes.first()
    }
}
