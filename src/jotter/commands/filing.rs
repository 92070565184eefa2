use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FolderId, NoteId, NoteUpdate};
use crate::store::DataStore;

use super::update;

/// Files a note into `folder_id`, or unfiles it when `None`.
pub fn move_to<S: DataStore>(
    store: &mut S,
    id: &NoteId,
    folder_id: Option<&FolderId>,
) -> Result<CmdResult> {
    let folder_name = match folder_id {
        Some(fid) => Some(store.get_folder(fid)?.name),
        None => None,
    };

    let mut result = update::run(store, id, NoteUpdate::new().folder(folder_id.cloned()))?;
    result.messages = vec![match folder_name {
        Some(name) => CmdMessage::success(format!("Moved to {}", name)),
        None => CmdMessage::success("Removed from folder"),
    }];
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JotterError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn moves_between_folders() {
        let mut store = StoreFixture::new()
            .with_folder("w", "Work")
            .with_note("1", "T", "")
            .store;

        let result = move_to(&mut store, &"1".into(), Some(&"w".into())).unwrap();
        assert_eq!(result.messages[0].content, "Moved to Work");
        assert_eq!(result.note().unwrap().folder_id, Some("w".into()));

        let result = move_to(&mut store, &"1".into(), None).unwrap();
        assert_eq!(result.messages[0].content, "Removed from folder");
        assert_eq!(store.get_note(&"1".into()).unwrap().folder_id, None);
    }

    #[test]
    fn unknown_folder_is_not_found() {
        let mut store = StoreFixture::new().with_note("1", "T", "").store;
        assert!(matches!(
            move_to(&mut store, &"1".into(), Some(&"nope".into())),
            Err(JotterError::FolderNotFound(_))
        ));
    }
}
