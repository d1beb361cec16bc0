//! Focus timer state machine.
//!
//! The timer owns no clock and no thread. Whoever drives it calls `tick()`
//! once per elapsed second while it is running (see [`super::ticker`]).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!            |
//!            v
//!         Expired -> Idle | Running (restart / start)
//! ```
//!
//! Calls that do not apply to the current state are no-ops and return `None`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::view::format_clock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
    /// Countdown reached zero. The session has been counted.
    Expired,
}

/// Single countdown. Starting a new one replaces whatever was in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusTimer {
    state: TimerState,
    remaining_secs: u64,
    /// Duration of the most recent start, kept across cancel and expiry
    /// so that `restart` has something to go on.
    last_duration_min: Option<u32>,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn last_duration_min(&self) -> Option<u32> {
        self.last_duration_min
    }

    pub fn total_secs(&self) -> u64 {
        self.last_duration_min.map(minutes_to_secs).unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Remaining time as `mm:ss`.
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh countdown, discarding any session in flight.
    pub fn start(&mut self, duration_min: u32) -> Result<Event, ValidationError> {
        if duration_min == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_min".into(),
                message: "focus duration must be at least one minute".into(),
            });
        }
        self.arm(duration_min);
        Ok(Event::TimerStarted {
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Paused;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.state = TimerState::Running;
        Some(Event::TimerResumed {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start again with the last used duration.
    pub fn restart(&mut self) -> Option<Event> {
        let duration_min = self.last_duration_min?;
        self.arm(duration_min);
        Some(Event::TimerRestarted {
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Drop back to idle from anywhere. Remaining time is lost.
    pub fn cancel(&mut self) -> Option<Event> {
        if self.state == TimerState::Idle {
            return None;
        }
        let remaining_secs = self.remaining_secs;
        self.state = TimerState::Idle;
        self.remaining_secs = 0;
        Some(Event::TimerCancelled {
            remaining_secs,
            at: Utc::now(),
        })
    }

    /// Advance by one second. Returns `TimerExpired` on the tick that
    /// reaches zero, `TimerTicked` otherwise, and `None` when not running.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            return Some(Event::TimerExpired {
                duration_secs: self.total_secs(),
                at: Utc::now(),
            });
        }
        Some(Event::TimerTicked {
            remaining_secs: self.remaining_secs,
            display: self.display(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn arm(&mut self, duration_min: u32) {
        self.last_duration_min = Some(duration_min);
        self.remaining_secs = minutes_to_secs(duration_min);
        self.state = TimerState::Running;
    }
}

fn minutes_to_secs(minutes: u32) -> u64 {
    minutes as u64 * 60
}
