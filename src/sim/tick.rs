//! Session transitions
//!
//! Clicks, time and quit are the only inputs. None of them can fail: input
//! that does not apply to the current state is dropped.

use glam::IVec2;

use super::state::{Occupant, Resolution, Session, SessionStatus};

/// Input gathered for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Left clicks in arrival order (screen coordinates)
    pub clicks: Vec<IVec2>,
    /// Window closed / quit requested
    pub quit: bool,
}

/// A single discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Click(IVec2),
    Tick(f32),
    Quit,
}

impl Session {
    /// Apply one event
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Click(point) => {
                click(self, point);
            }
            SessionEvent::Tick(dt) => advance(self, dt),
            SessionEvent::Quit => quit(self),
        }
    }
}

/// Advance one frame: quit first, then the queued clicks, then time
pub fn tick(session: &mut Session, input: &FrameInput, dt: f32) {
    if input.quit {
        quit(session);
        return;
    }

    for &point in &input.clicks {
        click(session, point);
    }

    advance(session, dt);
}

/// Handle a click. Returns true if it selected a slot.
pub fn click(session: &mut Session, point: IVec2) -> bool {
    if session.status != SessionStatus::Playing || session.resolving.is_some() {
        return false;
    }

    let Some(index) = session.slot_at(point) else {
        return false;
    };

    session.selection.push(index);
    if session.selection.len() == 2 {
        resolve_selection(session);
    }
    true
}

/// Compare the two selected slots and start the display delay
fn resolve_selection(session: &mut Session) {
    let (first, second) = (session.selection[0], session.selection[1]);
    let matched = match (
        session.slots[first].occupant,
        session.slots[second].occupant,
    ) {
        (Occupant::Tile(a), Occupant::Tile(b)) => a == b,
        _ => false,
    };

    session.moves += 1;
    if matched {
        session.slots[first].occupant = Occupant::Cleared;
        session.slots[second].occupant = Occupant::Cleared;
        session.matches += 1;
    } else {
        session.misses += 1;
    }
    log::debug!(
        "Pair {}/{}: {}",
        first,
        second,
        if matched { "match" } else { "miss" }
    );

    if session.all_cleared() {
        finish(session, SessionStatus::Won);
        return;
    }

    if session.resolve_delay_secs > 0.0 {
        session.resolving = Some(Resolution {
            remaining_secs: session.resolve_delay_secs,
            matched,
        });
    } else {
        session.selection.clear();
    }
}

/// Run the countdown and any pending display delay
pub fn advance(session: &mut Session, dt: f32) {
    if session.status != SessionStatus::Playing {
        return;
    }

    session.time_ticks += 1;
    session.time_remaining -= dt;

    // Timers expire within half a frame of zero so f32 drift cannot add a frame
    let tolerance = dt * 0.5;

    if let Some(resolution) = session.resolving.as_mut() {
        resolution.remaining_secs -= dt;
        if resolution.remaining_secs <= tolerance {
            session.resolving = None;
            session.selection.clear();
        }
    }

    if session.time_remaining <= tolerance {
        finish(session, SessionStatus::TimedOut);
    }
}

/// Stop the session, cutting any pending delay short
pub fn quit(session: &mut Session) {
    if session.status == SessionStatus::Playing {
        finish(session, SessionStatus::Quit);
    }
}

fn finish(session: &mut Session, status: SessionStatus) {
    session.status = status;
    session.resolving = None;
    session.selection.clear();
    log::info!(
        "Session over: {:?} after {} pairs ({} matched, {} tiles left)",
        status,
        session.moves,
        session.matches,
        session.remaining_tiles()
    );
}
