//! Session state and board types
//!
//! Everything a presentation needs to draw a frame lives here.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::{LayoutPolicy, generate_positions};
use super::snapshot::SessionSnapshot;
use super::tiles::{TileIdentity, generate_tiles};
use crate::error::{Result, SetupError};
use crate::square_contains;

/// Current status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Accepting clicks, countdown running
    Playing,
    /// Every slot cleared
    Won,
    /// Countdown reached zero
    TimedOut,
    /// Player closed the game
    Quit,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Playing)
    }
}

/// What a slot currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Tile(TileIdentity),
    Cleared,
}

impl Occupant {
    pub fn identity(&self) -> Option<TileIdentity> {
        match self {
            Occupant::Tile(identity) => Some(*identity),
            Occupant::Cleared => None,
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Occupant::Cleared)
    }
}

/// A fixed board position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Stable index within the session (0-based)
    pub index: usize,
    /// Top-left corner of the tile square
    pub pos: IVec2,
    pub occupant: Occupant,
}

/// A completed pair waiting out its display delay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Seconds until the selection resets
    pub remaining_secs: f32,
    /// Whether the pair was cleared
    pub matched: bool,
}

/// Parameters for building one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub tile_count: usize,
    pub repeat_count: usize,
    pub time_limit_secs: f32,
    pub screen_width: i32,
    pub screen_height: i32,
    pub tile_size: i32,
    pub resolve_delay_secs: f32,
    pub layout: LayoutPolicy,
}

/// Complete session state (deterministic for a given seed and input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Board seed for reproducibility
    pub seed: u64,
    /// Board slots, ordered by index
    pub slots: Vec<Slot>,
    /// Chosen, unresolved slot indices (at most two)
    pub selection: Vec<usize>,
    /// Countdown in seconds
    pub time_remaining: f32,
    pub status: SessionStatus,
    /// Pending display delay after a completed pair
    pub resolving: Option<Resolution>,
    /// Edge length of the tile squares
    pub tile_size: i32,
    /// Delay applied after each completed pair
    pub resolve_delay_secs: f32,
    /// Frames advanced while playing
    pub time_ticks: u64,
    /// Completed pairs
    pub moves: u32,
    pub matches: u32,
    pub misses: u32,
}

impl Session {
    /// Build a fresh board from a config and the available tile identities
    pub fn new(config: &SessionConfig, identities: &[TileIdentity], seed: u64) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let tiles = generate_tiles(identities, config.tile_count, config.repeat_count, &mut rng)?;
        let positions = generate_positions(
            config.tile_count,
            config.screen_width,
            config.screen_height,
            config.tile_size,
            config.layout,
            &mut rng,
        )?;

        let board = positions.into_iter().zip(tiles).collect();
        let session = Self::from_board(
            board,
            config.tile_size,
            config.time_limit_secs,
            config.resolve_delay_secs,
        )?
        .with_seed(seed);

        log::info!(
            "New session: {} tiles, {}s, seed {}",
            session.slots.len(),
            session.time_remaining,
            seed
        );
        Ok(session)
    }

    /// Build a session from explicit (position, identity) pairs
    pub fn from_board(
        board: Vec<(IVec2, TileIdentity)>,
        tile_size: i32,
        time_limit_secs: f32,
        resolve_delay_secs: f32,
    ) -> Result<Self> {
        if board.is_empty() {
            return Err(SetupError::config("board has no tiles"));
        }
        if tile_size <= 0 {
            return Err(SetupError::config(format!(
                "tile_size must be positive, got {tile_size}"
            )));
        }
        if !(time_limit_secs.is_finite() && time_limit_secs > 0.0) {
            return Err(SetupError::config(format!(
                "time limit must be positive, got {time_limit_secs}"
            )));
        }
        if !(resolve_delay_secs.is_finite() && resolve_delay_secs >= 0.0) {
            return Err(SetupError::config(format!(
                "resolve delay must be non-negative, got {resolve_delay_secs}"
            )));
        }

        let slots = board
            .into_iter()
            .enumerate()
            .map(|(index, (pos, identity))| Slot {
                index,
                pos,
                occupant: Occupant::Tile(identity),
            })
            .collect();

        Ok(Self {
            seed: 0,
            slots,
            selection: Vec::with_capacity(2),
            time_remaining: time_limit_secs,
            status: SessionStatus::Playing,
            resolving: None,
            tile_size,
            resolve_delay_secs,
            time_ticks: 0,
            moves: 0,
            matches: 0,
            misses: 0,
        })
    }

    fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// First selectable slot under a point, by index order
    pub fn slot_at(&self, point: IVec2) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| {
                !slot.occupant.is_cleared()
                    && !self.selection.contains(&slot.index)
                    && square_contains(slot.pos, self.tile_size, point)
            })
            .map(|slot| slot.index)
    }

    /// True once every slot has been cleared
    pub fn all_cleared(&self) -> bool {
        self.slots.iter().all(|slot| slot.occupant.is_cleared())
    }

    /// Slots still showing a tile
    pub fn remaining_tiles(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.occupant.is_cleared())
            .count()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether a completed pair is still on display
    pub fn is_resolving(&self) -> bool {
        self.resolving.is_some()
    }

    /// Whole seconds shown on the HUD countdown
    pub fn seconds_left(&self) -> u32 {
        self.time_remaining.max(0.0) as u32
    }

    /// Read-only copy for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}
