//! Startup settings read from `settings.toml`.
//!
//! Every key is optional; anything missing falls back to [`Settings::default`].
//! Out-of-range numbers are clamped rather than rejected.

use crate::error::{Error, Result};
use crate::model::PhotoRef;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhotoGallery";

pub const DEFAULT_GRID_COLUMNS: usize = 2;
pub const MIN_GRID_COLUMNS: usize = 1;
pub const MAX_GRID_COLUMNS: usize = 8;

pub const DEFAULT_THUMBNAIL_SIZE: f32 = 200.0;
pub const MIN_THUMBNAIL_SIZE: f32 = 48.0;
pub const MAX_THUMBNAIL_SIZE: f32 = 512.0;

pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 240.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Photos shown before the user picks anything.
pub const DEFAULT_SAMPLE_PHOTOS: [&str; 3] = [
    "assets/samples/my1.png",
    "assets/samples/my2.png",
    "assets/samples/week3.png",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_columns: usize,
    pub thumbnail_size: f32,
    pub theme: ThemeChoice,
    pub window_width: f32,
    pub window_height: f32,
    pub sample_photos: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_columns: DEFAULT_GRID_COLUMNS,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            theme: ThemeChoice::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            sample_photos: DEFAULT_SAMPLE_PHOTOS
                .iter()
                .map(|locator| locator.to_string())
                .collect(),
        }
    }
}

impl Settings {
    fn clamped(mut self) -> Self {
        self.grid_columns = self.grid_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
        self.thumbnail_size = finite_or(self.thumbnail_size, DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE);
        self.window_width =
            finite_or(self.window_width, DEFAULT_WINDOW_WIDTH).max(MIN_WINDOW_WIDTH);
        self.window_height =
            finite_or(self.window_height, DEFAULT_WINDOW_HEIGHT).max(MIN_WINDOW_HEIGHT);
        self
    }

    pub fn sample_photos(&self) -> Vec<PhotoRef> {
        self.sample_photos
            .iter()
            .map(|locator| PhotoRef::new(locator.as_str()))
            .collect()
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads settings from `path`, or from the default location when `path` is
/// `None`. A missing default file yields the defaults.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => load_from_path(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_path(&path),
            _ => Ok(Settings::default()),
        },
    }
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings.clamped())
}
