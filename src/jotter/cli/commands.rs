//! # CLI Layer
//!
//! This module is **one possible UI client** for jotter. It is not the application
//! itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `AppContext` with the API, configuration and renderer
//! 3. **API Dispatch**: Call the appropriate `JotterApi` method
//! 4. **Output Formatting**: Turn `CmdResult` into terminal output via templates
//!
//! There is no persistent note storage: every run starts from the demo notebook in
//! [`super::seed`], and `jotter shell` keeps one store alive for a whole session.
//! Settings are the exception and are saved to the config directory.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext`
//! - `handle_*()`: Per-command handlers that call the API and print

use super::render::Renderer;
use super::seed::demo_store;
use super::setup::{Cli, Commands};
use super::shell::Shell;
use super::styles::resolve_theme;
use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use jotter::api::{ConfigAction, JotterApi};
use jotter::clipboard::SystemClipboard;
use jotter::config::JotterConfig;
use jotter::error::{JotterError, Result};
use jotter::index::index_projection;
use jotter::model::ViewMode;
use jotter::query::FolderFilter;
use jotter::store::memory::InMemoryStore;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "JOTTER_CONFIG_DIR";
const LOG_ENV: &str = "JOTTER_LOG";

struct AppContext {
    api: JotterApi<InMemoryStore>,
    config: JotterConfig,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let empty = matches!(cli.command, Some(Commands::Shell { empty: true }));
    let mut ctx = init_context(empty)?;

    match cli.command {
        Some(Commands::List {
            folder,
            query,
            view,
        }) => handle_list(&ctx, folder, query, view),
        Some(Commands::Search { query, folder }) => handle_search(&ctx, query, folder),
        Some(Commands::Folders) => handle_folders(&ctx),
        Some(Commands::Show { index }) => handle_show(&ctx, &index),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Shell { .. }) => handle_shell(ctx),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A second init (e.g. from tests) is harmless, so the error is ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "jotter", "jotter")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| JotterError::Api("Could not determine config directory".to_string()))
}

fn init_context(empty: bool) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = JotterConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(config_dir = %config_dir.display(), error = %e, "unreadable config, using defaults");
        JotterConfig::default()
    });
    debug!(config_dir = %config_dir.display(), "context initialized");

    let store = if empty {
        InMemoryStore::new()
    } else {
        demo_store()?
    };

    Ok(AppContext {
        api: JotterApi::new(store, config_dir),
        renderer: Renderer::new(resolve_theme(config.theme)),
        config,
    })
}

fn handle_list(
    ctx: &AppContext,
    folder: Option<String>,
    query: Option<String>,
    view: Option<ViewMode>,
) -> Result<()> {
    let filter = resolve_filter(ctx, folder.as_deref())?;
    let query = query.unwrap_or_default();
    let view = view.unwrap_or(ctx.config.view_mode);

    let result = ctx.api.list_notes(&query, &filter, view)?;
    let Some(projection) = result.projection else {
        return Ok(());
    };
    let heading = heading(ctx, &filter)?;
    print!(
        "{}",
        ctx.renderer.home(&projection, &heading, &query, Utc::now())
    );
    Ok(())
}

fn handle_search(ctx: &AppContext, query: Vec<String>, folder: Option<String>) -> Result<()> {
    let filter = resolve_filter(ctx, folder.as_deref())?;
    let query = query.join(" ");
    let result = ctx.api.search_notes(&query, &filter)?;
    print!("{}", ctx.renderer.search(&result.hits, &query));
    Ok(())
}

fn handle_folders(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_folders()?;
    print!(
        "{}",
        ctx.renderer
            .folders(&result.folders, result.unfiled_count.unwrap_or(0))
    );
    Ok(())
}

/// Shows a note by its index in the default home listing.
fn handle_show(ctx: &AppContext, index: &str) -> Result<()> {
    let projection = ctx
        .api
        .list_notes("", &FolderFilter::All, ctx.config.view_mode)?
        .projection;
    let listing = projection.as_ref().map(index_projection).unwrap_or_default();
    let id = ctx.api.note_id_at(&listing, index)?;

    let result = ctx.api.get_note(&id)?;
    let Some(note) = result.listed_notes.first() else {
        return Err(JotterError::NoteNotFound(id));
    };
    let folder_name = match &note.folder_id {
        Some(folder_id) => ctx
            .api
            .list_folders()?
            .folders
            .into_iter()
            .find(|f| &f.id == folder_id)
            .map(|f| f.name),
        None => None,
    };
    print!("{}", ctx.renderer.preview(note, folder_name.as_deref()));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let Some(config) = result.config {
        if show_all {
            print!("{}", ctx.renderer.settings(&config));
        }
        ctx.config = config;
    }
    print!("{}", ctx.renderer.messages(&result.messages));
    Ok(())
}

fn handle_shell(ctx: AppContext) -> Result<()> {
    let use_color = console::Term::stdout().features().colors_supported();
    let interactive = std::io::stdin().is_terminal();
    let mut shell = Shell::new(ctx.api, SystemClipboard, &ctx.config, use_color);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell.run(stdin.lock(), &mut stdout, interactive)
}

fn resolve_filter(ctx: &AppContext, folder: Option<&str>) -> Result<FolderFilter> {
    match folder {
        Some(f) => ctx.api.folder_filter(f),
        None => Ok(FolderFilter::All),
    }
}

fn heading(ctx: &AppContext, filter: &FolderFilter) -> Result<String> {
    Ok(match filter {
        FolderFilter::All => "All Notes".to_string(),
        FolderFilter::Unfiled => "Unfiled".to_string(),
        FolderFilter::Folder(id) => ctx
            .api
            .list_folders()?
            .folders
            .into_iter()
            .find(|f| &f.id == id)
            .map(|f| f.name)
            .unwrap_or_else(|| id.to_string()),
    })
}
