//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/` and
//! embedded at compile time, so a layout tweak is a template diff rather than a code
//! change.
//!
//! Conventions:
//!
//! 1. Block tags (`{% ... %}`) never emit their own line break; the environment
//!    trims them. A line that ends in a block tag and should still end the line is
//!    followed by an empty line in the source.
//! 2. Style names are semantic (`title`, `time`, `highlight`); see `styles.rs`.
//! 3. Width math (padding, truncation) happens in Rust and arrives pre-computed.
//! 4. Shared fragments (`card`, `empty`) are included by name.

pub const HOME_TEMPLATE: &str = include_str!("templates/home.tmp");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.tmp");
pub const EMPTY_TEMPLATE: &str = include_str!("templates/empty.tmp");
pub const SEARCH_TEMPLATE: &str = include_str!("templates/search.tmp");
pub const FOLDERS_TEMPLATE: &str = include_str!("templates/folders.tmp");
pub const PREVIEW_TEMPLATE: &str = include_str!("templates/preview.tmp");
pub const EDITOR_TEMPLATE: &str = include_str!("templates/editor.tmp");
pub const SETTINGS_TEMPLATE: &str = include_str!("templates/settings.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// Looks up a template source by the name templates use to include it.
pub fn source(name: &str) -> Option<&'static str> {
    match name {
        "home" => Some(HOME_TEMPLATE),
        "card" => Some(CARD_TEMPLATE),
        "empty" => Some(EMPTY_TEMPLATE),
        "search" => Some(SEARCH_TEMPLATE),
        "folders" => Some(FOLDERS_TEMPLATE),
        "preview" => Some(PREVIEW_TEMPLATE),
        "editor" => Some(EDITOR_TEMPLATE),
        "settings" => Some(SETTINGS_TEMPLATE),
        "messages" => Some(MESSAGES_TEMPLATE),
        _ => None,
    }
}
