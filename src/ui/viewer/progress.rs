// SPDX-License-Identifier: MPL-2.0
//! Progress overlay shown while a requested page waits for its asset.
//!
//! Each pending wait holds the overlay up; it disappears when the last wait
//! ends. There is no timeout: an asset that never loads keeps the overlay
//! visible, and only a warning is logged once the wait drags on.

use std::time::{Duration, Instant};

/// How long a wait may last before it is reported as stalled.
const STALL_WARNING: Duration = Duration::from_secs(30);

/// Fraction of the track the moving segment advances per tick.
const PHASE_STEP: f32 = 0.02;

#[derive(Debug, Clone, Default)]
pub struct State {
    pending: usize,
    started_at: Option<Instant>,
    /// Position of the moving segment, in `0.0..1.0`.
    phase: f32,
    stall_reported: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    WaitStarted,
    WaitEnded,
    Tick,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The overlay has been up for longer than the stall threshold.
    Stalled(Duration),
}

impl State {
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::WaitStarted => {
                if self.pending == 0 {
                    self.started_at = Some(Instant::now());
                    self.stall_reported = false;
                }
                self.pending += 1;
                Effect::None
            }
            Message::WaitEnded => {
                self.pending = self.pending.saturating_sub(1);
                if self.pending == 0 {
                    self.started_at = None;
                    self.phase = 0.0;
                }
                Effect::None
            }
            Message::Tick => {
                if self.pending == 0 {
                    return Effect::None;
                }
                self.phase += PHASE_STEP;
                if self.phase >= 1.0 {
                    self.phase -= 1.0;
                }
                match self.started_at {
                    Some(started) if !self.stall_reported && started.elapsed() > STALL_WARNING => {
                        self.stall_reported = true;
                        Effect::Stalled(started.elapsed())
                    }
                    _ => Effect::None,
                }
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Drops every wait at once (host disposal).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_stays_until_last_wait_ends() {
        let mut state = State::default();
        state.handle(Message::WaitStarted);
        state.handle(Message::WaitStarted);
        state.handle(Message::WaitEnded);
        assert!(state.is_visible());
        state.handle(Message::WaitEnded);
        assert!(!state.is_visible());
    }

    #[test]
    fn extra_wait_end_does_not_underflow() {
        let mut state = State::default();
        state.handle(Message::WaitEnded);
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn tick_moves_segment_only_while_visible() {
        let mut state = State::default();
        state.handle(Message::Tick);
        assert_eq!(state.phase(), 0.0);

        state.handle(Message::WaitStarted);
        state.handle(Message::Tick);
        assert!(state.phase() > 0.0);
    }

    #[test]
    fn phase_wraps_around() {
        let mut state = State::default();
        state.handle(Message::WaitStarted);
        for _ in 0..200 {
            state.handle(Message::Tick);
        }
        assert!((0.0..1.0).contains(&state.phase()));
    }

    #[test]
    fn reset_hides_overlay() {
        let mut state = State::default();
        state.handle(Message::WaitStarted);
        state.reset();
        assert!(!state.is_visible());
    }
}
