use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    /// Elapsed seconds the stopwatch starts from. Negative values are taken
    /// by magnitude.
    #[serde(default)]
    pub initial_seconds: i64,
}

impl Config {
    /// Loads the user configuration from the config directory, layered over
    /// the embedded defaults. A missing user file is not an error.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The configuration embedded in the binary.
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?
            .set_default("initial_seconds", default_config.initial_seconds)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        cfg.keybindings.merge_defaults(&default_config.keybindings);
        cfg.styles.merge_defaults(&default_config.styles);

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, process};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Modifier, Style};

    use super::*;
    use crate::presentation::config::keybindings::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lapwatch-{name}-{}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn key(c: char) -> Vec<KeyEvent> {
        vec![KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)]
    }

    #[test]
    fn test_embedded_defaults() -> Result<(), ConfigError> {
        let c = Config::defaults()?;

        assert_eq!(c.initial_seconds, 0);
        assert_eq!(c.keybindings.get(&key('s')), Some(&Action::Start));
        assert_eq!(c.keybindings.get(&key('l')), Some(&Action::Lap));
        assert_eq!(c.keybindings.get(&key('q')), Some(&Action::Quit));
        assert_eq!(
            c.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]),
            Some(&Action::Quit)
        );
        assert_eq!(
            c.styles.style("timer"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        );
        Ok(())
    }

    #[test]
    fn test_missing_user_config_falls_back_to_defaults() -> Result<(), ConfigError> {
        let config_dir = scratch_dir("missing");
        let c = Config::load_from(&config_dir, &config_dir)?;

        assert_eq!(c.initial_seconds, 0);
        assert_eq!(c.config._config_dir, config_dir);
        assert_eq!(c.keybindings.get(&key('r')), Some(&Action::Reset));
        Ok(())
    }

    #[test]
    fn test_user_config_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config_dir = scratch_dir("override");
        fs::create_dir_all(&config_dir)?;
        fs::write(
            config_dir.join("config.json5"),
            r#"{
              "initial_seconds": 90,
              "keybindings": { "<l>": "Reset", "<n>": "Lap" },
              "styles": { "timer": "red" },
            }"#,
        )?;

        let c = Config::load_from(&config_dir, &config_dir)?;
        fs::remove_dir_all(&config_dir)?;

        assert_eq!(c.initial_seconds, 90);
        assert_eq!(c.keybindings.get(&key('l')), Some(&Action::Reset));
        assert_eq!(c.keybindings.get(&key('n')), Some(&Action::Lap));
        assert_eq!(c.keybindings.get(&key('s')), Some(&Action::Start));
        assert_eq!(c.styles.style("timer"), Style::default().fg(Color::Red));
        assert_eq!(
            c.styles.style("lap_delete"),
            Style::default().fg(Color::Red)
        );
        Ok(())
    }

    #[test]
    fn test_invalid_key_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let config_dir = scratch_dir("invalid");
        fs::create_dir_all(&config_dir)?;
        fs::write(
            config_dir.join("config.json5"),
            r#"{ "keybindings": { "<ctrl-": "Quit" } }"#,
        )?;

        let result = Config::load_from(&config_dir, &config_dir);
        fs::remove_dir_all(&config_dir)?;

        assert!(result.is_err());
        Ok(())
    }
}
