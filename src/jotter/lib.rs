//! # Jotter Architecture
//!
//! Jotter is a **UI-agnostic note-taking core**: notes with pinning, tags and
//! folders, a live substring search with highlight spans, and the grouped projection
//! every listing screen renders. The terminal client in `cli/` is one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Screens, templated rendering, terminal I/O, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → NoteIds)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over the pure modules below               │
//! │  - query, folders, projection: derived views, no state      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, InMemoryStore                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Source of Truth
//!
//! The store owns every note and folder. Folder counts, search results and
//! projections are recomputed from a fresh snapshot on each call and are never
//! cached, so nothing can drift out of sync with the store.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits, and never
//! assumes a terminal. The only outside collaborators are the clipboard (behind
//! [`clipboard::ClipboardSink`]) and the settings file read by [`config`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands and pure modules**: thorough unit tests next to the code.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **CLI**: rendering unit tests, plus binary tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: Core data types (`Note`, `Folder`, `NoteUpdate`, `ViewMode`)
//! - [`query`]: Search matching, highlight spans, folder filters
//! - [`folders`]: Folder index with derived note counts
//! - [`projection`]: Pinned/unpinned grouping and empty states
//! - [`index`]: Display indexing system (p1, 1 notation)
//! - [`config`]: Client settings
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod folders;
pub mod index;
pub mod model;
pub mod projection;
pub mod query;
pub mod store;
