//! Demo notebook the terminal client starts from.
//!
//! The store only lives for one process, so every invocation starts from this data
//! (or from nothing with `shell --empty`). Timestamps are relative to now so the
//! card dates read naturally.

use chrono::{Duration, Utc};
use jotter::error::Result;
use jotter::model::{Folder, Note};
use jotter::store::memory::InMemoryStore;
use jotter::store::DataStore;

struct DemoNote {
    title: &'static str,
    content: &'static str,
    folder: Option<usize>,
    tags: &'static [&'static str],
    pinned: bool,
    age_days: i64,
    image: bool,
    voice: bool,
}

const FOLDERS: &[(&str, &str)] = &[
    ("Personal", "#3b82f6"),
    ("Work", "#10b981"),
    ("Ideas", "#f59e0b"),
];

const NOTES: &[DemoNote] = &[
    DemoNote {
        title: "Grocery List",
        content: "Milk, eggs, bread\nApples and bananas\nCoffee beans",
        folder: Some(0),
        tags: &["shopping", "home"],
        pinned: true,
        age_days: 0,
        image: false,
        voice: false,
    },
    DemoNote {
        title: "Project Roadmap",
        content: "Q1: ship the search rewrite\nQ2: folders and sharing\nQ3: sync",
        folder: Some(1),
        tags: &["work", "planning"],
        pinned: true,
        age_days: 1,
        image: false,
        voice: false,
    },
    DemoNote {
        title: "Meeting Notes",
        content: "Standup moved to 10am. Review the launch checklist before Friday.",
        folder: Some(1),
        tags: &["work", "meetings"],
        pinned: false,
        age_days: 2,
        image: false,
        voice: true,
    },
    DemoNote {
        title: "Book Ideas",
        content: "A lighthouse keeper who collects lost letters.\nA city that forgets one street every night.",
        folder: Some(2),
        tags: &["writing", "creative"],
        pinned: false,
        age_days: 4,
        image: false,
        voice: false,
    },
    DemoNote {
        title: "Travel Checklist",
        content: "Passport, chargers, adapters\nBook the airport shuttle",
        folder: Some(0),
        tags: &["travel"],
        pinned: false,
        age_days: 9,
        image: true,
        voice: false,
    },
    DemoNote {
        title: "Quick thought",
        content: "Try oat milk in the cold brew.",
        folder: None,
        tags: &[],
        pinned: false,
        age_days: 21,
        image: false,
        voice: false,
    },
];

/// Builds a store holding the demo folders and notes.
pub fn demo_store() -> Result<InMemoryStore> {
    let mut store = InMemoryStore::new();
    let now = Utc::now();

    let mut folders = Vec::with_capacity(FOLDERS.len());
    for (name, color) in FOLDERS {
        let folder = Folder::new(name.to_string(), color.to_string());
        store.save_folder(&folder)?;
        folders.push(folder.id);
    }

    for demo in NOTES {
        let mut note = Note::new(demo.title.to_string(), demo.content.to_string());
        note.folder_id = demo.folder.map(|i| folders[i].clone());
        note.tags = demo.tags.iter().map(|t| t.to_string()).collect();
        note.is_pinned = demo.pinned;
        note.has_image = demo.image;
        note.has_voice_note = demo.voice;
        note.created_at = now - Duration::days(demo.age_days + 3);
        note.updated_at = now - Duration::days(demo.age_days);
        store.save_note(&note)?;
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_is_consistent() {
        let store = demo_store().unwrap();
        let folders = store.list_folders().unwrap();
        let notes = store.list_notes().unwrap();

        assert_eq!(folders.len(), FOLDERS.len());
        assert_eq!(notes.len(), NOTES.len());
        assert!(notes
            .iter()
            .filter_map(|n| n.folder_id.as_ref())
            .all(|id| folders.iter().any(|f| &f.id == id)));
        assert!(notes.iter().all(|n| n.updated_at >= n.created_at));
    }
}
