use clap::{Parser, Subcommand};
use jotter::model::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "jotter", bin_name = "jotter", version)]
#[command(about = "Notes with folders, tags, pinning and live search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, pinned first
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Folder to show: a folder name, "all" or "unfiled"
        #[arg(short, long)]
        folder: Option<String>,

        /// Only notes containing this text
        #[arg(short, long)]
        query: Option<String>,

        /// Card layout (defaults to the view-mode setting)
        #[arg(long)]
        view: Option<ViewMode>,
    },

    /// Search titles, content and tags
    #[command(display_order = 2)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Folder to search in
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// List folders with note counts
    #[command(display_order = 3)]
    Folders,

    /// Show one note
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Index of the note in the listing (e.g. 1 p1)
        index: String,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (theme, view-mode, font-size, font-style)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session reading commands from stdin
    #[command(display_order = 6)]
    Shell {
        /// Start with an empty notebook instead of the demo notes
        #[arg(long)]
        empty: bool,
    },
}

/// One line of input inside `jotter shell`.
#[derive(Parser, Debug)]
#[command(
    name = "shell",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Start a new note in the editor
    #[command(alias = "n")]
    New {
        /// Title words (defaults to "Untitled Note")
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Open a note from the current listing
    #[command(alias = "o")]
    Open { index: String },

    /// Edit the open note (or the note at INDEX)
    #[command(alias = "e")]
    Edit { index: Option<String> },

    /// Editor: replace the draft title
    Title {
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Editor: append a line to the draft content
    Write {
        /// Replace the content instead of appending
        #[arg(long)]
        replace: bool,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Editor: save the draft
    #[command(alias = "s")]
    Save,

    /// Back to the note list
    #[command(alias = "b")]
    Back,

    /// Search screen for QUERY
    #[command(alias = "/")]
    Search {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Filter the note list by text (no text clears the filter)
    Find {
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Restrict the note list to a folder ("all", "unfiled" or a folder name)
    Filter { folder: String },

    /// Switch the card layout
    View { mode: ViewMode },

    /// Toggle pin on the open note (or the notes at INDEX, e.g. 2 or 1-3)
    Pin { index: Option<String> },

    /// Duplicate the open note (or the notes at INDEX)
    Dup { index: Option<String> },

    /// Delete the open note (or the notes at INDEX)
    #[command(alias = "rm")]
    Delete { index: Option<String> },

    /// Copy the open note's content (or the note at INDEX) to the clipboard
    Share { index: Option<String> },

    /// Add tags to the open note
    Tag {
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from the open note
    Untag {
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// File the open note into FOLDER ("none" to unfile)
    Move { folder: String },

    /// Folder screen
    Folders,

    /// Create a folder
    #[command(name = "folder-new")]
    FolderNew {
        #[arg(long)]
        color: Option<String>,

        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Rename a folder
    #[command(name = "folder-rename")]
    FolderRename {
        folder: String,

        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Delete a folder (its notes become unfiled)
    #[command(name = "folder-rm")]
    FolderRm { folder: String },

    /// Settings screen
    Settings,

    /// Set the color theme (light, dark, system)
    Theme { value: String },

    /// Change a setting
    Set { key: String, value: String },

    /// Leave the shell
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// Splits a shell line into words. Double or single quotes group words and may
/// hold whitespace; there are no escapes.
pub fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}
