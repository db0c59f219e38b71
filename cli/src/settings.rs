use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minefield_core::{BoardConfig, CellCount, Coord, GameOverPolicy, Limits};
use serde::Deserialize;

/// Values read from the TOML config file, every key optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
    pub max_side: Option<Coord>,
    pub locked: Option<bool>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Command line values, they take precedence over the config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub limits: Limits,
    pub config: BoardConfig,
    pub policy: GameOverPolicy,
}

impl Settings {
    pub fn resolve(file: FileSettings, overrides: Overrides) -> Self {
        let defaults = BoardConfig::default();
        let limits = file.max_side.map(Limits::new).unwrap_or_default();
        let width = overrides.width.or(file.width).unwrap_or(defaults.width);
        let height = overrides.height.or(file.height).unwrap_or(defaults.height);
        let mines = overrides.mines.or(file.mines).unwrap_or(defaults.mines);

        let config = BoardConfig::clamped(width, height, mines, &limits);
        if (config.width, config.height, config.mines) != (width, height, mines) {
            log::info!(
                "Clamped {}x{} with {} mines to {}x{} with {} mines",
                width,
                height,
                mines,
                config.width,
                config.height,
                config.mines
            );
        }

        let policy = if overrides.locked || file.locked.unwrap_or(false) {
            GameOverPolicy::Locked
        } else {
            GameOverPolicy::Permissive
        };

        Self {
            limits,
            config,
            policy,
        }
    }

    /// Applies new parameters typed during a session, clamped like the initial ones.
    pub fn with_board(self, width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            config: BoardConfig::clamped(width, height, mines, &self.limits),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minefield_core::MAX_SIDE_CEILING;

    #[test]
    fn defaults_without_file_or_flags() {
        let settings = Settings::resolve(FileSettings::default(), Overrides::default());

        assert_eq!(settings.config, BoardConfig::default());
        assert_eq!(settings.limits, Limits::default());
        assert_eq!(settings.policy, GameOverPolicy::Permissive);
    }

    #[test]
    fn flags_override_file() {
        let file = FileSettings::parse("width = 8\nheight = 6\nmines = 9\nlocked = true\n").unwrap();
        let overrides = Overrides {
            width: Some(10),
            ..Overrides::default()
        };

        let settings = Settings::resolve(file, overrides);

        assert_eq!(settings.config, BoardConfig::new(10, 6, 9).unwrap());
        assert_eq!(settings.policy, GameOverPolicy::Locked);
    }

    #[test]
    fn values_are_clamped_to_limits() {
        let file = FileSettings::parse("max_side = 5").unwrap();
        let overrides = Overrides {
            width: Some(40),
            height: Some(0),
            mines: Some(100),
            locked: false,
        };

        let settings = Settings::resolve(file, overrides);

        assert_eq!(settings.config, BoardConfig::new(5, 1, 4).unwrap());
    }

    #[test]
    fn max_side_from_file_is_bounded() {
        let huge = FileSettings::parse("max_side = 65535").unwrap();
        let settings = Settings::resolve(huge, Overrides::default());
        assert_eq!(settings.limits.max_side, MAX_SIDE_CEILING);

        let tiny = FileSettings::parse("max_side = 0").unwrap();
        let overrides = Overrides {
            width: Some(9),
            height: Some(9),
            ..Overrides::default()
        };
        let settings = Settings::resolve(tiny, overrides);
        assert_eq!(settings.limits.max_side, 2);
        assert_eq!(settings.config, BoardConfig::new(2, 2, 3).unwrap());
    }

    #[test]
    fn with_board_reclamps_mines() {
        let settings = Settings::resolve(FileSettings::default(), Overrides::default());

        let settings = settings.with_board(3, 3, 50);

        assert_eq!(settings.config, BoardConfig::new(3, 3, 8).unwrap());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileSettings::parse("colour = \"red\"").is_err());
    }
}
