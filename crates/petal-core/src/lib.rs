//! # Petal Core Library
//!
//! Business logic for Petal, a small focus journal: a pomodoro-style focus
//! timer, a mood picker, notes, a garden that grows with each finished
//! session, and a day log. Front ends (the `petal` CLI today) are thin
//! layers that feed commands in and render events out.
//!
//! ## Architecture
//!
//! - **State**: [`AppState`], the day's progress plus the archived history,
//!   and the pure operations on it
//! - **Timer**: [`FocusTimer`], a tick-driven countdown, and the
//!   [`TickScheduler`] seam that supplies the ticks
//! - **Storage**: [`StateFile`] (versioned JSON) and [`Config`] (TOML)
//! - **Journal**: [`Journal`], the single owner of all of the above
//!
//! Everything runs on one thread. The only recurring job is the countdown
//! tick, which is armed and cancelled explicitly.

pub mod error;
pub mod events;
pub mod journal;
pub mod state;
pub mod storage;
pub mod timer;
pub mod view;

pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use events::Event;
pub use journal::{Command, Journal};
pub use state::{AppState, DaySnapshot, Garden, GrowthStage, Mood, PlantKind};
pub use storage::{Config, StateFile};
pub use timer::{FocusTimer, IntervalTicker, ManualTicker, TickScheduler, TimerState};
pub use view::DayView;
