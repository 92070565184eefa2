use crate::commands::{CmdMessage, CmdResult};
use crate::config::JotterConfig;
use crate::error::Result;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = JotterConfig::load(config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(config_dir)?;
            info!(key = %key, "setting changed");

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::ThemePreference;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("theme".into(), "DARK".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "theme set to dark");
        assert_eq!(result.config.unwrap().theme, ThemePreference::Dark);

        let result = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(result.messages[0].content, "dark");

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().theme, ThemePreference::Dark);
    }

    #[test]
    fn bad_input_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("font-size".into(), "huge".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.config.is_none());
        assert!(!dir.path().join("config.json").exists());

        let result = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].content, "Unknown config key: colour");
    }
}
