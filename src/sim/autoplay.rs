//! Idle/demo mode - a bot that plays the session through clicks
//!
//! It only sees what a player sees: which slots show which tiles, and where a
//! click would land.

use glam::IVec2;

use super::state::Session;
use super::tick::FrameInput;

/// Default pause between bot clicks (seconds)
pub const DEFAULT_THINK_SECS: f32 = 0.25;

/// Step between sample points when searching a partly covered tile
const SAMPLE_STRIDE: usize = 4;

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    /// Pause between clicks
    pub think_secs: f32,
    cooldown: f32,
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_THINK_SECS)
    }
}

impl AutoPlayer {
    pub fn new(think_secs: f32) -> Self {
        Self {
            think_secs,
            cooldown: think_secs,
        }
    }

    /// Decide this frame's input
    pub fn next_input(&mut self, session: &Session, dt: f32) -> FrameInput {
        let mut input = FrameInput::default();
        if session.is_over() || session.is_resolving() {
            return input;
        }

        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return input;
        }

        if let Some(point) = next_click(session) {
            input.clicks.push(point);
        }
        self.cooldown = self.think_secs;
        input
    }
}

/// Where to click next: the partner of the open selection, or the first
/// tile of a reachable pair
pub fn next_click(session: &Session) -> Option<IVec2> {
    let points: Vec<Option<IVec2>> = (0..session.slots.len())
        .map(|index| click_point(session, index))
        .collect();

    match session.selection.first() {
        Some(&selected) => {
            let identity = session.slots[selected].occupant.identity()?;
            session
                .slots
                .iter()
                .filter(|slot| slot.index != selected && slot.occupant.identity() == Some(identity))
                .find_map(|slot| points[slot.index])
        }
        None => session.slots.iter().find_map(|first| {
            let identity = first.occupant.identity()?;
            let point = points[first.index]?;
            let has_partner = session.slots[first.index + 1..].iter().any(|other| {
                other.occupant.identity() == Some(identity) && points[other.index].is_some()
            });
            has_partner.then_some(point)
        }),
    }
}

/// A point that selects `index`, preferring the tile center
pub fn click_point(session: &Session, index: usize) -> Option<IVec2> {
    let slot = session.slots.get(index)?;
    if slot.occupant.is_cleared() || session.selection.contains(&index) {
        return None;
    }

    let size = session.tile_size;
    let center = slot.pos + IVec2::splat(size / 2);
    if session.slot_at(center) == Some(index) {
        return Some(center);
    }

    // Lower-index tiles may cover part of this one
    (0..size)
        .step_by(SAMPLE_STRIDE)
        .flat_map(|dy| (0..size).step_by(SAMPLE_STRIDE).map(move |dx| IVec2::new(dx, dy)))
        .map(|offset| slot.pos + offset)
        .find(|&point| session.slot_at(point) == Some(index))
}
