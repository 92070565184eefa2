//! # Jotter CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/jotter/cli/`, while this
//! file only invokes `cli::run()` and handles process termination. UI-specific
//! concerns stay **entirely separate** from the application logic in the library.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/jotter/cli/)                                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + context wiring (commands.rs)         │
//! │  - Screen state machine for the shell (shell.rs)            │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/jotter/api.rs)                              │
//! │  - Normalizes display indexes and folder names to ids       │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (src/jotter/commands/*)                      │
//! │  - Business logic over the note store                       │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Templates live in `src/jotter/cli/templates/` and are embedded at compile time
//! via `include_str!()`. `render.rs` turns notes, hits and folders into plain data
//! for them; a `style` filter applies the active theme. Layout changes stay in the
//! template files.
//!
//! ## Testing Approach
//!
//! - **Commands layer**: heavy unit testing of the business logic.
//! - **API layer**: dispatch and argument normalization.
//! - **CLI layer**: clap parsing, template output for canned data, and the shell
//!   driven from an in-memory script. `tests/cli.rs` runs the real binary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
