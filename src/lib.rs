//! Memory Pairs - A casual tile-matching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic session core (tile sets, layout, match state machine)
//! - `settings`: Difficulty table and game preferences
//! - `assets`: Numbered image discovery for tile identities
//! - `error`: Session setup failures

pub mod assets;
pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SetupError};
pub use settings::{DifficultyConfig, DifficultyLevel, DifficultyTable, Settings};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 1000;
    pub const SCREEN_HEIGHT: i32 = 800;

    /// Edge length of a square tile (pixels)
    pub const TILE_SIZE: i32 = 80;

    /// Frame rate of the reference presentation
    pub const FPS: u32 = 30;
    /// Fixed simulation timestep (one frame)
    pub const SIM_DT: f32 = 1.0 / FPS as f32;

    /// How long a completed pair stays on screen before the selection resets
    pub const RESOLVE_DELAY_SECS: f32 = 0.5;

    /// Number of distinct tile images shipped with the game
    pub const IDENTITY_COUNT: u8 = 9;
}

/// Check if a point lies in the half-open square `[origin, origin + size)`
#[inline]
pub fn square_contains(origin: IVec2, size: i32, point: IVec2) -> bool {
    point.x >= origin.x && point.x < origin.x + size && point.y >= origin.y && point.y < origin.y + size
}

/// Check if two half-open squares of the same size intersect
#[inline]
pub fn squares_overlap(a: IVec2, b: IVec2, size: i32) -> bool {
    (a.x - b.x).abs() < size && (a.y - b.y).abs() < size
}
