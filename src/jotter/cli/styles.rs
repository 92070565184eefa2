//! Styles for the jotter terminal client.
//!
//! Templates only ever name styles semantically (`title`, `time`, `highlight`, ...).
//! What a name looks like is decided here, once per palette: the light and dark
//! themes define the same names with different colors, so switching the theme never
//! touches a template.
//!
//! The `system` theme preference is resolved through `dark-light` at render time.

use console::Style;
use jotter::config::ThemePreference;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown in front of text whose style name is not registered, to catch template typos.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const HIGHLIGHT: &str = "highlight";
    pub const PINNED: &str = "pinned";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const HEADING: &str = "heading";
    pub const TIME: &str = "time";
    pub const TAG: &str = "tag";
    pub const FOLDER: &str = "folder";
    pub const LIST_INDEX: &str = "list-index";
    pub const SCREEN: &str = "screen";
}

/// A named collection of styles used when rendering templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named style. Unknown names get [`MISSING_STYLE_INDICATOR`] prepended,
    /// with or without color.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static LIGHT_THEME: Lazy<Theme> = Lazy::new(build_light_theme);
pub static DARK_THEME: Lazy<Theme> = Lazy::new(build_dark_theme);

/// Picks the palette for a theme preference, asking the OS when it is `system`.
pub fn resolve_theme(preference: ThemePreference) -> &'static Theme {
    match preference {
        ThemePreference::Light => &*LIGHT_THEME,
        ThemePreference::Dark => &*DARK_THEME,
        ThemePreference::System => match dark_light::detect() {
            dark_light::Mode::Dark => &*DARK_THEME,
            _ => &*LIGHT_THEME,
        },
    }
}

fn build_light_theme() -> Theme {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((100, 116, 139)));
    let faint = Style::new().color256(rgb_to_ansi256((173, 173, 173)));
    let amber = Style::new().color256(rgb_to_ansi256((217, 119, 6)));
    let highlight = Style::new()
        .black()
        .on_color256(rgb_to_ansi256((254, 240, 138)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::HIGHLIGHT, highlight)
        .add(names::PINNED, amber.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::HEADING, muted.clone().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::TAG, Style::new().color256(rgb_to_ansi256((51, 65, 85))))
        .add(names::FOLDER, Style::new().blue())
        .add(names::LIST_INDEX, amber)
        .add(names::SCREEN, regular.bold().underlined())
}

fn build_dark_theme() -> Theme {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((148, 163, 184)));
    let faint = Style::new().color256(rgb_to_ansi256((110, 110, 110)));
    let amber = Style::new().color256(rgb_to_ansi256((245, 158, 11)));
    let highlight = Style::new()
        .white()
        .on_color256(rgb_to_ansi256((113, 63, 18)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::HIGHLIGHT, highlight)
        .add(names::PINNED, amber.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::HEADING, muted.clone().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::TAG, Style::new().color256(rgb_to_ansi256((203, 213, 225))))
        .add(names::FOLDER, Style::new().cyan())
        .add(names::LIST_INDEX, amber)
        .add(names::SCREEN, regular.bold().underlined())
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_palettes_define_the_same_names() {
        for name in [
            names::REGULAR,
            names::MUTED,
            names::FAINT,
            names::HIGHLIGHT,
            names::PINNED,
            names::ERROR,
            names::WARNING,
            names::SUCCESS,
            names::INFO,
            names::TITLE,
            names::HEADING,
            names::TIME,
            names::TAG,
            names::FOLDER,
            names::LIST_INDEX,
            names::SCREEN,
        ] {
            assert!(LIGHT_THEME.has(name), "light theme is missing {}", name);
            assert!(DARK_THEME.has(name), "dark theme is missing {}", name);
        }
    }

    #[test]
    fn plain_mode_leaves_text_alone() {
        assert_eq!(LIGHT_THEME.apply(names::TITLE, "Hi", false), "Hi");
        assert_eq!(LIGHT_THEME.apply("nope", "Hi", false), "(!?) Hi");
        assert!(LIGHT_THEME.apply(names::TITLE, "Hi", true).contains("\u{1b}["));
    }

    #[test]
    fn explicit_preferences_skip_detection() {
        assert!(std::ptr::eq(
            resolve_theme(ThemePreference::Dark),
            &*DARK_THEME
        ));
        assert!(std::ptr::eq(
            resolve_theme(ThemePreference::Light),
            &*LIGHT_THEME
        ));
    }

    #[test]
    fn grays_map_onto_the_grayscale_ramp() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&rgb_to_ansi256((128, 128, 128))));
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
