//! # CLI Behavior
//!
//! This is **one possible UI client** for jotter, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `jotter`
//! library.
//!
//! ## One-Shot Commands
//!
//! Running `jotter` with no arguments defaults to `jotter list`. The other one-shot
//! commands (`search`, `folders`, `show`, `config`) each render a single screen and
//! exit. Notes are not persisted, so these always read the demo notebook.
//!
//! ### Display Indexes
//!
//! `jotter show p1` and the shell's `open 3` use the numbers printed next to each
//! card: `p1, p2, ...` for pinned notes and `1, 2, ...` for the rest. On the search
//! screen results are numbered `1..n` in result order.
//!
//! ## The Shell
//!
//! `jotter shell` reads one command per line and keeps one store alive, so it is the
//! place to create, edit, pin, tag and file notes. It walks the same screens as the
//! app: home, search, preview, editor, folders and settings. The editor keeps a
//! draft and only writes it on `save`; `back` with unsaved changes drops them.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print
//! - `render`: Template rendering and card layout
//! - `seed`: The demo notebook
//! - `setup`: Argument parsing via clap, including the shell's line grammar
//! - `shell`: Screen state machine for `jotter shell`
//! - `styles`: Terminal themes
//! - `templates`: Output templates

mod commands;
mod render;
mod seed;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
