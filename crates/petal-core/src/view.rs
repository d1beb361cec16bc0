//! Read-only projection of the journal handed to whatever draws it.

use serde::{Deserialize, Serialize};

use crate::state::{AppState, Garden};
use crate::timer::{FocusTimer, TimerState};

/// One plant as shown in the garden card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantView {
    pub kind: String,
    pub stage: String,
    pub level: u8,
}

/// Everything a front end needs to draw the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    pub timer_state: TimerState,
    pub remaining_secs: u64,
    pub clock: String,
    pub today_sessions: u32,
    pub streak: u32,
    pub mood: String,
    pub notes: String,
    pub task: String,
    pub garden: Vec<PlantView>,
    /// 0.0 .. 100.0, share of the garden that has grown.
    pub garden_progress_pct: f64,
    pub history_len: usize,
}

impl DayView {
    pub fn build(state: &AppState, timer: &FocusTimer) -> Self {
        Self {
            timer_state: timer.state(),
            remaining_secs: timer.remaining_secs(),
            clock: format_clock(timer.remaining_secs()),
            today_sessions: state.today_sessions,
            streak: state.streak,
            mood: state
                .mood_label
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            notes: state.notes.clone(),
            task: state.main_task.clone(),
            garden: state
                .plants
                .iter()
                .map(|(kind, stage)| PlantView {
                    kind: kind.as_str().to_string(),
                    stage: stage.as_str().to_string(),
                    level: stage.into(),
                })
                .collect(),
            garden_progress_pct: garden_progress_pct(&state.plants),
            history_len: state.history.len(),
        }
    }
}

pub fn garden_progress_pct(garden: &Garden) -> f64 {
    garden.total_growth() as f64 / Garden::MAX_GROWTH as f64 * 100.0
}

/// `mm:ss`. Minutes are not wrapped into hours.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
