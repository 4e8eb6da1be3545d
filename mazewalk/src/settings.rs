use std::{fs, path::PathBuf};

use crossterm::style::Color;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::app::AppError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

const DEFAULT_ROWS: i32 = 10;
const DEFAULT_COLS: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Raises the level by `steps`, saturating at [`LogLevel::Trace`].
    pub fn raised(self, steps: u8) -> Self {
        const LEVELS: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = LEVELS.iter().position(|&l| l == self).unwrap_or(1);
        LEVELS[(current + steps as usize).min(LEVELS.len() - 1)]
    }
}

/// Where and how large the maze is drawn, has no effect on the maze itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Blank lines above and spaces to the left of the maze.
    #[serde(default)]
    pub margin: (u16, u16),
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
}

fn default_cell_width() -> u16 {
    3
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            margin: (0, 0),
            cell_width: default_cell_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: Color,
    pub path: Color,
    pub explored: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            path: Color::Yellow,
            explored: Color::DarkGrey,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rows: Option<i32>,
    #[serde(default)]
    pub cols: Option<i32>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

impl Settings {
    pub fn get_rows(&self) -> i32 {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    pub fn get_cols(&self) -> i32 {
        self.cols.unwrap_or(DEFAULT_COLS)
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn get_layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mazewalk").join("settings.ron"))
    }

    pub fn parse(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
    }

    /// Loads settings from `path`, missing file means default settings.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        match fs::read_to_string(&path) {
            Ok(source) => Self::parse(&source).map_err(|source| AppError::Settings { path, source }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: PathBuf) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses() {
        let settings = Settings::parse(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_rows(), 10);
        assert_eq!(settings.get_cols(), 14);
        assert_eq!(settings.get_seed(), None);
        assert_eq!(settings.get_log_level(), LogLevel::Warn);
        assert_eq!(settings.get_layout().margin, (1, 2));
        assert_eq!(settings.get_color_scheme(), ColorScheme::default());
    }

    #[test]
    fn empty_settings_fall_back() {
        let settings = Settings::parse("()").unwrap();
        assert_eq!(settings.get_rows(), DEFAULT_ROWS);
        assert_eq!(settings.get_layout(), Layout::default());
    }

    #[test]
    fn partial_layout() {
        let settings = Settings::parse("(seed: 7, layout: (margin: (0, 4)))").unwrap();
        assert_eq!(settings.get_seed(), Some(7));
        assert_eq!(settings.get_layout().cell_width, 3);
        assert_eq!(settings.get_layout().margin, (0, 4));
    }

    /// Fresh directory under the system temp dir, unique per test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mazewalk-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        let settings = Settings::load(dir.join("settings.ron")).unwrap();
        assert_eq!(settings.get_rows(), DEFAULT_ROWS);
        assert_eq!(settings.get_cols(), DEFAULT_COLS);
        assert_eq!(settings.get_seed(), None);
        assert!(settings.layout.is_none());
        assert!(settings.color_scheme.is_none());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_invalid_file_is_error() {
        let dir = scratch_dir("invalid");
        let path = dir.join("settings.ron");
        fs::write(&path, "(rows: \"many\",").unwrap();

        match Settings::load(path.clone()) {
            Err(AppError::Settings { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected settings error, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn reset_then_load() {
        let dir = scratch_dir("reset");
        let path = dir.join("nested").join("settings.ron");
        Settings::reset_config(path.clone()).unwrap();

        let settings = Settings::load(path).unwrap();
        assert_eq!((settings.get_rows(), settings.get_cols()), (10, 14));
        assert_eq!(settings.get_layout().margin, (1, 2));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn raise_level() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
        assert_eq!(LogLevel::Info.raised(9), LogLevel::Trace);
    }
}
