//! Game settings and difficulty table
//!
//! Built once at startup and passed explicitly into session creation.
//! Persisted as JSON next to the native binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SetupError};
use crate::sim::{LayoutPolicy, SessionConfig};

/// Difficulty levels offered by the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Normal,
    Difficult,
}

impl DifficultyLevel {
    /// All levels in menu order
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Normal,
        DifficultyLevel::Difficult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Normal => "normal",
            DifficultyLevel::Difficult => "difficult",
        }
    }

    /// Vertical extent of this level's start menu button (exclusive bounds)
    pub fn menu_band(&self) -> (i32, i32) {
        match self {
            DifficultyLevel::Easy => (300, 350),
            DifficultyLevel::Normal => (400, 450),
            DifficultyLevel::Difficult => (500, 550),
        }
    }

    /// Level whose menu button contains a click at height `y`
    pub fn from_menu_click(y: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| {
            let (top, bottom) = level.menu_band();
            y > top && y < bottom
        })
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "normal" => Some(DifficultyLevel::Normal),
            "difficult" | "hard" => Some(DifficultyLevel::Difficult),
            _ => None,
        }
    }
}

/// Board parameters for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Number of tiles on the board
    pub tile_count: u32,
    /// Countdown budget in seconds
    pub time_limit_secs: f32,
    /// How many times each chosen image is repeated
    pub repeat_count: u32,
}

impl DifficultyConfig {
    pub const fn new(tile_count: u32, time_limit_secs: f32, repeat_count: u32) -> Self {
        Self {
            tile_count,
            time_limit_secs,
            repeat_count,
        }
    }

    /// Reject combinations that cannot produce a fully clearable board
    pub fn validate(&self, level: DifficultyLevel) -> Result<()> {
        let name = level.as_str();
        if self.tile_count == 0 {
            return Err(SetupError::config(format!("{name}: tile_count must be positive")));
        }
        if self.repeat_count == 0 {
            return Err(SetupError::config(format!("{name}: repeat_count must be positive")));
        }
        if !(self.time_limit_secs.is_finite() && self.time_limit_secs > 0.0) {
            return Err(SetupError::config(format!(
                "{name}: time_limit_secs must be a positive number, got {}",
                self.time_limit_secs
            )));
        }
        if self.repeat_count > self.tile_count {
            return Err(SetupError::config(format!(
                "{name}: repeat_count {} exceeds tile_count {}",
                self.repeat_count, self.tile_count
            )));
        }
        // Odd counts leave a tile with no partner
        if self.tile_count % 2 != 0 || self.repeat_count % 2 != 0 {
            return Err(SetupError::config(format!(
                "{name}: tile_count {} and repeat_count {} must both be even",
                self.tile_count, self.repeat_count
            )));
        }
        Ok(())
    }
}

/// Immutable difficulty table, one entry per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: DifficultyConfig,
    pub normal: DifficultyConfig,
    pub difficult: DifficultyConfig,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyConfig::new(18, 120.0, 2),
            normal: DifficultyConfig::new(36, 90.0, 4),
            difficult: DifficultyConfig::new(48, 60.0, 6),
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, level: DifficultyLevel) -> &DifficultyConfig {
        match level {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Normal => &self.normal,
            DifficultyLevel::Difficult => &self.difficult,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for level in DifficultyLevel::ALL {
            self.get(level).validate(level)?;
        }
        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty picked for the next session
    pub difficulty: DifficultyLevel,
    /// Per-level board parameters
    pub difficulties: DifficultyTable,

    // === Board ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub tile_size: i32,
    /// How tiles are scattered
    pub layout: LayoutPolicy,

    // === Timing ===
    /// Frames per second driving the countdown
    pub fps: u32,
    /// Time a completed pair stays visible
    pub resolve_delay_secs: f32,

    // === Assets ===
    /// Directory holding `1.png` .. `N.png`
    pub asset_dir: PathBuf,
    /// Number of distinct images expected in `asset_dir`
    pub identity_count: u8,
    /// Run without image files, using identities `1..=identity_count`
    pub builtin_tiles: bool,

    /// Fixed seed for reproducible boards (random when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::Easy,
            difficulties: DifficultyTable::default(),

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            layout: LayoutPolicy::default(),

            fps: FPS,
            resolve_delay_secs: RESOLVE_DELAY_SECS,

            asset_dir: PathBuf::from("images"),
            identity_count: IDENTITY_COUNT,
            builtin_tiles: false,

            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with a different difficulty
    pub fn with_difficulty(difficulty: DifficultyLevel) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Fixed frame timestep derived from `fps`
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    pub fn validate(&self) -> Result<()> {
        self.difficulties.validate()?;
        if self.tile_size <= 0 {
            return Err(SetupError::config(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.screen_width < self.tile_size || self.screen_height < self.tile_size {
            return Err(SetupError::config(format!(
                "screen {}x{} is smaller than a {}px tile",
                self.screen_width, self.screen_height, self.tile_size
            )));
        }
        if self.fps == 0 {
            return Err(SetupError::config("fps must be positive"));
        }
        if !(self.resolve_delay_secs.is_finite() && self.resolve_delay_secs >= 0.0) {
            return Err(SetupError::config(format!(
                "resolve_delay_secs must be non-negative, got {}",
                self.resolve_delay_secs
            )));
        }
        if self.identity_count == 0 {
            return Err(SetupError::config("identity_count must be positive"));
        }
        Ok(())
    }

    /// Session parameters for the selected difficulty
    pub fn session_config(&self) -> Result<SessionConfig> {
        self.validate()?;
        let difficulty = self.difficulties.get(self.difficulty);
        Ok(SessionConfig {
            tile_count: difficulty.tile_count as usize,
            repeat_count: difficulty.repeat_count as usize,
            time_limit_secs: difficulty.time_limit_secs,
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            tile_size: self.tile_size,
            resolve_delay_secs: self.resolve_delay_secs,
            layout: self.layout,
        })
    }

    /// Load settings from a JSON file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
