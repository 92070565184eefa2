//! Interactive session over one live in-memory store.
//!
//! The shell is the terminal counterpart of the app's screen navigation: it holds
//! which [`Screen`] is showing, the home filters and the editor draft, reads one
//! command per line, dispatches to the API and re-renders the current screen.
//!
//! Display indexes typed by the user (`open p1`, `pin 3`) resolve against the last
//! listing the shell printed, either the home list or search results.

use super::render::Renderer;
use super::setup::{split_line, ShellCommand, ShellLine};
use super::styles::resolve_theme;
use chrono::Utc;
use clap::Parser;
use jotter::api::{CmdMessage, CmdResult, ConfigAction, JotterApi};
use jotter::clipboard::ClipboardSink;
use jotter::config::JotterConfig;
use jotter::error::{JotterError, Result};
use jotter::index::{index_hits, index_projection, DisplayNote};
use jotter::model::{NoteId, ViewMode, DEFAULT_TITLE};
use jotter::projection::project;
use jotter::query::{FolderFilter, NO_FOLDER};
use jotter::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "jotter> ";

/// The screen currently shown. Closed set, so every screen is rendered explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Search,
    Preview(NoteId),
    Editor(Draft),
    Folders,
    Settings,
}

/// Editor state. Nothing reaches the store until `save`.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub note_id: Option<NoteId>,
    pub title: String,
    pub content: String,
    saved: (String, String),
}

impl Draft {
    fn new_note(title: String) -> Self {
        Self {
            note_id: None,
            title,
            content: String::new(),
            saved: (DEFAULT_TITLE.to_string(), String::new()),
        }
    }

    fn existing(note_id: NoteId, title: String, content: String) -> Self {
        Self {
            note_id: Some(note_id),
            saved: (title.clone(), content.clone()),
            title,
            content,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.title != self.saved.0 || self.content != self.saved.1
    }

    fn write(&mut self, text: &str, replace: bool) {
        if replace || self.content.is_empty() {
            self.content = text.to_string();
        } else {
            self.content.push('\n');
            self.content.push_str(text);
        }
    }
}

pub struct Shell<S: DataStore, C: ClipboardSink> {
    api: JotterApi<S>,
    clipboard: C,
    renderer: Renderer,
    use_color: bool,
    screen: Screen,
    query: String,
    filter: FolderFilter,
    view_mode: ViewMode,
    search_query: String,
    listing: Vec<DisplayNote>,
}

impl<S: DataStore, C: ClipboardSink> Shell<S, C> {
    pub fn new(api: JotterApi<S>, clipboard: C, config: &JotterConfig, use_color: bool) -> Self {
        Self {
            api,
            clipboard,
            renderer: Renderer::with_color(resolve_theme(config.theme), use_color),
            use_color,
            screen: Screen::Home,
            query: String::new(),
            filter: FolderFilter::All,
            view_mode: config.view_mode,
            search_query: String::new(),
            listing: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> Result<()> {
        let screen = self.render_screen()?;
        write!(out, "{}", screen)?;

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let words = split_line(&line?);
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(&words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(out, "{}", e)?;
                    continue;
                }
            };
            if command == ShellCommand::Quit {
                break;
            }

            debug!(?command, "shell command");
            let outcome = self.execute(command).and_then(|messages| {
                // Messages go out before the render, which may still fail.
                write!(out, "{}", self.renderer.messages(&messages))?;
                self.render_screen()
            });
            match outcome {
                Ok(screen) => write!(out, "\n{}", screen)?,
                Err(e) => {
                    // The note or folder is gone; whatever screen pointed at it is stale.
                    if e.is_not_found() {
                        self.screen = Screen::Home;
                    }
                    let error = CmdMessage::error(format!("Error: {}", e));
                    write!(out, "{}", self.renderer.messages(&[error]))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Applies one command and returns the messages to show above the next screen.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Vec<CmdMessage>> {
        let mut messages = Vec::new();
        match command {
            ShellCommand::New { title } => {
                let title = if title.is_empty() {
                    DEFAULT_TITLE.to_string()
                } else {
                    title.join(" ")
                };
                self.screen = Screen::Editor(Draft::new_note(title));
            }
            ShellCommand::Open { index } => {
                let id = self.api.note_id_at(&self.listing, &index)?;
                self.api.get_note(&id)?;
                self.screen = Screen::Preview(id);
            }
            ShellCommand::Edit { index } => {
                let id = self.target(index.as_deref())?;
                let result = self.api.get_note(&id)?;
                let note = listed_note(&result, &id)?;
                self.screen = Screen::Editor(Draft::existing(
                    id,
                    note.title.clone(),
                    note.content.clone(),
                ));
            }
            ShellCommand::Title { words } => {
                self.draft_mut()?.title = words.join(" ");
            }
            ShellCommand::Write { replace, text } => {
                self.draft_mut()?.write(&text.join(" "), replace);
            }
            ShellCommand::Save => {
                let draft = self.draft_mut()?.clone();
                let result =
                    self.api
                        .save_note(draft.note_id.as_ref(), draft.title, draft.content)?;
                if let Some(note) = result.note() {
                    self.screen = Screen::Editor(Draft::existing(
                        note.id.clone(),
                        note.title.clone(),
                        note.content.clone(),
                    ));
                }
                messages = result.messages;
            }
            ShellCommand::Back => {
                if let Screen::Editor(draft) = &self.screen {
                    if draft.is_dirty() {
                        messages.push(CmdMessage::warning("Unsaved changes discarded"));
                    }
                }
                self.query.clear();
                self.search_query.clear();
                self.screen = Screen::Home;
            }
            ShellCommand::Search { query } => {
                self.search_query = query.join(" ");
                self.screen = Screen::Search;
            }
            ShellCommand::Find { text } => {
                self.query = text.join(" ");
                self.screen = Screen::Home;
            }
            ShellCommand::Filter { folder } => {
                self.filter = self.api.folder_filter(&folder)?;
                self.screen = Screen::Home;
            }
            ShellCommand::View { mode } => {
                self.view_mode = mode;
            }
            ShellCommand::Pin { index } => {
                for id in self.targets(index.as_deref())? {
                    messages.extend(self.api.toggle_pin(&id)?.messages);
                }
            }
            ShellCommand::Dup { index } => {
                for id in self.targets(index.as_deref())? {
                    messages.extend(self.api.duplicate_note(&id)?.messages);
                }
            }
            ShellCommand::Delete { index } => {
                for id in self.targets(index.as_deref())? {
                    messages.extend(self.api.delete_note(&id)?.messages);
                    if self.shows_note(&id) {
                        self.screen = Screen::Home;
                    }
                }
            }
            ShellCommand::Share { index } => {
                let id = self.target(index.as_deref())?;
                messages = self.api.share_note(&id, &mut self.clipboard)?.messages;
            }
            ShellCommand::Tag { tags } => {
                let id = self.target(None)?;
                messages = self.api.tag_note(&id, &tags)?.messages;
            }
            ShellCommand::Untag { tags } => {
                let id = self.target(None)?;
                messages = self.api.untag_note(&id, &tags)?.messages;
            }
            ShellCommand::Move { folder } => {
                let id = self.target(None)?;
                let folder_id = if folder.eq_ignore_ascii_case(NO_FOLDER) {
                    None
                } else {
                    Some(self.api.folder_id(&folder)?)
                };
                messages = self.api.move_note(&id, folder_id.as_ref())?.messages;
            }
            ShellCommand::Folders => {
                self.screen = Screen::Folders;
            }
            ShellCommand::FolderNew { color, name } => {
                messages = self.api.create_folder(name.join(" "), color)?.messages;
                self.screen = Screen::Folders;
            }
            ShellCommand::FolderRename { folder, name } => {
                messages = self.api.rename_folder(&folder, name.join(" "))?.messages;
                self.screen = Screen::Folders;
            }
            ShellCommand::FolderRm { folder } => {
                let id = self.api.folder_id(&folder)?;
                messages = self.api.delete_folder(id.as_str())?.messages;
                if self.filter == FolderFilter::Folder(id) {
                    self.filter = FolderFilter::All;
                }
                self.screen = Screen::Folders;
            }
            ShellCommand::Settings => {
                self.screen = Screen::Settings;
            }
            ShellCommand::Theme { value } => {
                messages = self.set_config("theme".to_string(), value)?;
                self.screen = Screen::Settings;
            }
            ShellCommand::Set { key, value } => {
                messages = self.set_config(key, value)?;
                self.screen = Screen::Settings;
            }
            ShellCommand::Quit => {}
        }
        Ok(messages)
    }

    /// Renders the current screen, refreshing the listing indexes resolve against.
    pub fn render_screen(&mut self) -> Result<String> {
        let output = match &self.screen {
            Screen::Home => {
                let result = self
                    .api
                    .list_notes(&self.query, &self.filter, self.view_mode)?;
                let projection = result
                    .projection
                    .unwrap_or_else(|| project(&[], self.view_mode));
                self.listing = index_projection(&projection);
                let heading = self.heading()?;
                self.renderer
                    .home(&projection, &heading, &self.query, Utc::now())
            }
            Screen::Search => {
                let hits = self
                    .api
                    .search_notes(&self.search_query, &self.filter)?
                    .hits;
                self.listing = index_hits(&hits);
                self.renderer.search(&hits, &self.search_query)
            }
            Screen::Preview(id) => {
                let result = self.api.get_note(id)?;
                let note = listed_note(&result, id)?;
                let folder_name = match &note.folder_id {
                    Some(folder_id) => self
                        .api
                        .list_folders()?
                        .folders
                        .into_iter()
                        .find(|f| &f.id == folder_id)
                        .map(|f| f.name),
                    None => None,
                };
                self.renderer.preview(note, folder_name.as_deref())
            }
            Screen::Editor(draft) => self.renderer.editor(
                draft.note_id.is_none(),
                &draft.title,
                &draft.content,
                draft.is_dirty(),
            ),
            Screen::Folders => {
                let result = self.api.list_folders()?;
                self.renderer
                    .folders(&result.folders, result.unfiled_count.unwrap_or(0))
            }
            Screen::Settings => {
                let config = self
                    .api
                    .config(ConfigAction::ShowAll)?
                    .config
                    .unwrap_or_default();
                self.renderer.settings(&config)
            }
        };
        Ok(output)
    }

    fn heading(&mut self) -> Result<String> {
        let folder_id = match &self.filter {
            FolderFilter::All => return Ok("All Notes".to_string()),
            FolderFilter::Unfiled => return Ok("Unfiled".to_string()),
            FolderFilter::Folder(id) => id.clone(),
        };
        let name = self
            .api
            .list_folders()?
            .folders
            .into_iter()
            .find(|f| f.id == folder_id)
            .map(|f| f.name);
        Ok(name.unwrap_or_else(|| {
            self.filter = FolderFilter::All;
            "All Notes".to_string()
        }))
    }

    /// The note a command acts on: the one at `index` in the last listing, otherwise
    /// the note being previewed or edited.
    fn target(&self, index: Option<&str>) -> Result<NoteId> {
        if let Some(index) = index {
            return self.api.note_id_at(&self.listing, index);
        }
        match &self.screen {
            Screen::Preview(id) => Ok(id.clone()),
            Screen::Editor(Draft {
                note_id: Some(id), ..
            }) => Ok(id.clone()),
            _ => Err(JotterError::Api(
                "No note selected (open a note or give an index)".to_string(),
            )),
        }
    }

    /// Like [`Self::target`], but `index` may be a range such as `2-4`.
    fn targets(&self, index: Option<&str>) -> Result<Vec<NoteId>> {
        match index {
            Some(index) => self.api.note_ids_at(&self.listing, index),
            None => Ok(vec![self.target(None)?]),
        }
    }

    fn shows_note(&self, id: &NoteId) -> bool {
        match &self.screen {
            Screen::Preview(shown) => shown == id,
            Screen::Editor(draft) => draft.note_id.as_ref() == Some(id),
            _ => false,
        }
    }

    fn draft_mut(&mut self) -> Result<&mut Draft> {
        match &mut self.screen {
            Screen::Editor(draft) => Ok(draft),
            _ => Err(JotterError::Api(
                "Not editing (use new or edit first)".to_string(),
            )),
        }
    }

    fn set_config(&mut self, key: String, value: String) -> Result<Vec<CmdMessage>> {
        let result = self.api.config(ConfigAction::Set(key, value))?;
        if let Some(config) = &result.config {
            self.renderer = Renderer::with_color(resolve_theme(config.theme), self.use_color);
            self.view_mode = config.view_mode;
        }
        Ok(result.messages)
    }
}

fn listed_note<'a>(result: &'a CmdResult, id: &NoteId) -> Result<&'a jotter::model::Note> {
    result
        .listed_notes
        .first()
        .ok_or_else(|| JotterError::NoteNotFound(id.clone()))
}
