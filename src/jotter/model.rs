use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Title given to notes started without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FolderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FolderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a rendering surface lays out note cards. Does not affect which notes are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => f.write_str("grid"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Invalid view mode: {} (expected grid or list)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub folder_id: Option<FolderId>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub has_voice_note: bool,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Self::with_id(NoteId::generate(), title, content)
    }

    pub fn with_id(id: NoteId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            is_pinned: false,
            folder_id: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            has_image: false,
            has_voice_note: false,
        }
    }

    /// Marks the note as modified. `updated_at` never moves backwards, so a
    /// wall clock that steps back cannot break `updated_at >= created_at`.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Adds a tag unless it is blank or already present. Returns whether it was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag.trim());
        self.tags.len() != before
    }
}

/// Trims tags, drops blanks and collapses duplicates, keeping first occurrences.
pub fn normalize_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// Display hint, `#rrggbb`.
    pub color: String,
}

impl Folder {
    pub fn new(name: String, color: String) -> Self {
        Self {
            id: FolderId::generate(),
            name,
            color,
        }
    }
}

/// A partial note update. `None` leaves a field alone.
///
/// `folder_id` is doubly optional: `Some(None)` unfiles the note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder_id: Option<Option<FolderId>>,
    pub is_pinned: Option<bool>,
    pub has_image: Option<bool>,
    pub has_voice_note: Option<bool>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.tags = Some(normalize_tags(tags));
        self
    }

    pub fn folder(mut self, folder_id: Option<FolderId>) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
