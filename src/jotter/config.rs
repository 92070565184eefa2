use crate::error::{JotterError, Result};
use crate::model::ViewMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`JotterConfig::get`] and [`JotterConfig::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &["theme", "view-mode", "font-size", "font-style"];

const VIEW_MODE_NAMES: &[&str] = &["grid", "list"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    System,
    Serif,
    SansSerif,
    Monospace,
}

macro_rules! kebab_enum {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const NAMES: &'static [&'static str] = &[$($name),+];
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($name),)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    other => Err(format!(
                        "Invalid value: {} (expected one of: {})",
                        other,
                        Self::NAMES.join(", ")
                    )),
                }
            }
        }
    };
}

kebab_enum!(ThemePreference { Light => "light", Dark => "dark", System => "system" });
kebab_enum!(FontSize {
    Small => "small",
    Medium => "medium",
    Large => "large",
    ExtraLarge => "extra-large",
});
kebab_enum!(FontStyle {
    System => "system",
    Serif => "serif",
    SansSerif => "sans-serif",
    Monospace => "monospace",
});

/// Client settings, stored in `<config dir>/config.json`.
///
/// Settings are independent of the note data; nothing in here is ever derived from
/// or written alongside notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JotterConfig {
    #[serde(default)]
    pub theme: ThemePreference,

    /// Layout used when a listing does not ask for one
    #[serde(default)]
    pub view_mode: ViewMode,

    #[serde(default)]
    pub font_size: FontSize,

    #[serde(default)]
    pub font_style: FontStyle,
}

impl JotterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: JotterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "theme" => Some(self.theme.to_string()),
            "view-mode" => Some(self.view_mode.to_string()),
            "font-size" => Some(self.font_size.to_string()),
            "font-style" => Some(self.font_style.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |e: String| JotterError::Api(format!("{}: {}", key, e));
        match key {
            "theme" => self.theme = value.parse().map_err(invalid)?,
            "view-mode" => self.view_mode = value.parse().map_err(invalid)?,
            "font-size" => self.font_size = value.parse().map_err(invalid)?,
            "font-style" => self.font_style = value.parse().map_err(invalid)?,
            other => {
                return Err(JotterError::Api(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    /// Accepted values for a key, in display order.
    pub fn choices(key: &str) -> Option<&'static [&'static str]> {
        match key {
            "theme" => Some(ThemePreference::NAMES),
            "view-mode" => Some(VIEW_MODE_NAMES),
            "font-size" => Some(FontSize::NAMES),
            "font-style" => Some(FontStyle::NAMES),
            _ => None,
        }
    }

    /// All settings as `(key, value)` pairs in [`CONFIG_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }
}
