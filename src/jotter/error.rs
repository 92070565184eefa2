use crate::model::{FolderId, NoteId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Folder not found: {0}")]
    FolderNotFound(FolderId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl JotterError {
    /// True for the data-layer "id is gone" errors. These point at stale
    /// client state and are never worth retrying.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            JotterError::NoteNotFound(_) | JotterError::FolderNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, JotterError>;
