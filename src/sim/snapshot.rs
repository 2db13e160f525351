//! Read-only view of a session for the presentation layer

use glam::IVec2;
use serde::Serialize;

use super::state::{Occupant, Session, SessionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub pos: IVec2,
    pub occupant: Occupant,
    /// Part of the current selection (draw highlighted)
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub slots: Vec<SlotView>,
    pub selection: Vec<usize>,
    pub tile_size: i32,
    pub time_remaining: f32,
    /// HUD value for "time last: N"
    pub seconds_left: u32,
    pub status: SessionStatus,
    pub resolving: bool,
    pub moves: u32,
    pub matches: u32,
    pub misses: u32,
}

impl SessionSnapshot {
    /// Slots that still need drawing
    pub fn visible_slots(&self) -> impl Iterator<Item = &SlotView> {
        self.slots.iter().filter(|slot| !slot.occupant.is_cleared())
    }
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        let slots = session
            .slots
            .iter()
            .map(|slot| SlotView {
                index: slot.index,
                pos: slot.pos,
                occupant: slot.occupant,
                selected: session.selection.contains(&slot.index),
            })
            .collect();

        Self {
            slots,
            selection: session.selection.clone(),
            tile_size: session.tile_size,
            time_remaining: session.time_remaining,
            seconds_left: session.seconds_left(),
            status: session.status,
            resolving: session.is_resolving(),
            moves: session.moves,
            matches: session.matches,
            misses: session.misses,
        }
    }
}
