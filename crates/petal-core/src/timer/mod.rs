mod engine;
pub mod ticker;

pub use engine::{FocusTimer, TimerState};
pub use ticker::{IntervalTicker, ManualTicker, Tick, TickReceiver, TickScheduler};
