//! Deterministic session module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `advance`/`tick`
//! - Seeded RNG only
//! - Stable slot order (by index)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod layout;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod tiles;

pub use autoplay::AutoPlayer;
pub use layout::{LayoutPolicy, MAX_ATTEMPTS_PER_SLOT, generate_positions};
pub use snapshot::{SessionSnapshot, SlotView};
pub use state::{Occupant, Resolution, Session, SessionConfig, SessionStatus, Slot};
pub use tick::{FrameInput, SessionEvent, advance, click, quit, tick};
pub use tiles::{TileIdentity, generate_tiles};
