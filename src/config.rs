use crate::constants::{
    DEFAULT_CURSOR_RADIUS, DEFAULT_FONT_SIZE, DEFAULT_FRAME_RATE, DEFAULT_GRID_SPACING,
    DEFAULT_LOG_LINES, DEFAULT_LOG_ORIGIN, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MAX_LOG_LINES,
};
use crate::errors::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_lines: usize,
    pub font_size: f32,
    pub log_origin: [f32; 2],
    pub window_width: u32,
    pub window_height: u32,
    pub frame_rate: u32,
    pub grid_spacing: u32,
    pub cursor_radius: f32,
    /// TTF/OTF font for all text; the built-in font when unset.
    pub font_path: Option<PathBuf>,
    /// File that receives a timestamped copy of every logged message.
    pub capture_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_lines: DEFAULT_LOG_LINES,
            font_size: DEFAULT_FONT_SIZE,
            log_origin: DEFAULT_LOG_ORIGIN,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            frame_rate: DEFAULT_FRAME_RATE,
            grid_spacing: DEFAULT_GRID_SPACING,
            cursor_radius: DEFAULT_CURSOR_RADIUS,
            font_path: None,
            capture_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config at `path`, or at the default location when `None`.
    /// A missing file is created with defaults.
    pub fn load(path: Option<&Path>) -> HarnessResult<Self> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// Like [`Config::load`], also reporting where the config came from so
    /// it can be logged once logging is set up.
    pub fn load_with_source(path: Option<&Path>) -> HarnessResult<(Self, ConfigSource)> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_path()?,
        };

        if config_path.exists() {
            let config_str = fs::read_to_string(&config_path).map_err(|e| {
                HarnessError::config_error(format!("Failed to read config file: {}", e))
            })?;

            let config: Config = serde_json::from_str(&config_str).map_err(|e| {
                HarnessError::config_error(format!("Failed to parse config: {}", e))
            })?;

            validate_config(&config)?;
            Ok((config, ConfigSource::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(&config_path)?;
            Ok((config, ConfigSource::Created(config_path)))
        }
    }

    pub fn save(&self, path: &Path) -> HarnessResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HarnessError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(self)?;
        fs::write(path, config_str).map_err(|e| {
            HarnessError::config_error(format!("Failed to write config file: {}", e))
        })?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Loaded(PathBuf),
    Created(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Loaded(path) => write!(f, "Loaded config from {}", path.display()),
            ConfigSource::Created(path) => {
                write!(f, "Wrote default config to {}", path.display())
            }
        }
    }
}

fn get_config_path() -> HarnessResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| HarnessError::config_error("Could not determine config directory"))?;

    Ok(config_dir.join("test-events").join("config.json"))
}

pub fn validate_config(config: &Config) -> HarnessResult<()> {
    if config.log_lines == 0 || config.log_lines > MAX_LOG_LINES {
        return Err(HarnessError::config_error(format!(
            "log_lines must be between 1 and {}",
            MAX_LOG_LINES
        )));
    }

    if !(config.font_size > 0.0) {
        return Err(HarnessError::config_error("font_size must be positive"));
    }

    if config.window_width == 0 || config.window_height == 0 {
        return Err(HarnessError::config_error(
            "window_width and window_height must be non-zero",
        ));
    }

    if config.frame_rate == 0 || config.frame_rate > 240 {
        return Err(HarnessError::config_error(
            "frame_rate must be between 1 and 240",
        ));
    }

    if config.grid_spacing == 0 {
        return Err(HarnessError::config_error("grid_spacing must be non-zero"));
    }

    if config.cursor_radius < 0.0 {
        return Err(HarnessError::config_error(
            "cursor_radius must not be negative",
        ));
    }

    Ok(())
}
