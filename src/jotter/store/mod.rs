//! # Storage Layer
//!
//! This module defines the storage abstraction for jotter. The [`DataStore`] trait
//! keeps the command layer independent of where notes live.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the note store. Notes and folders are kept in
//!   insertion order, which is the order every listing starts from.
//!
//! There is no persistent backend. A future one would implement the same trait;
//! callers already go through `&S` / `&mut S` and never hold copies across calls.
//!
//! ## Ownership
//!
//! The store is the only owner of notes and folders. The folder index, query engine
//! and projector read a snapshot from it per call and derive everything else.

use crate::error::Result;
use crate::model::{Folder, FolderId, Note, NoteId};

pub mod memory;

/// Abstract interface for note and folder storage.
pub trait DataStore {
    /// Save a note (create or update). Updating keeps the note's position.
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Get a note by ID
    fn get_note(&self, id: &NoteId) -> Result<Note>;

    /// List all notes in insertion order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Delete a note permanently. Fails with `NoteNotFound` if absent.
    fn delete_note(&mut self, id: &NoteId) -> Result<()>;

    /// Save a folder (create or update)
    fn save_folder(&mut self, folder: &Folder) -> Result<()>;

    fn get_folder(&self, id: &FolderId) -> Result<Folder>;

    /// List all folders in insertion order
    fn list_folders(&self) -> Result<Vec<Folder>>;

    /// Delete a folder. Notes that reference it are left untouched.
    fn delete_folder(&mut self, id: &FolderId) -> Result<()>;

    fn contains_folder(&self, id: &FolderId) -> bool {
        self.get_folder(id).is_ok()
    }
}
