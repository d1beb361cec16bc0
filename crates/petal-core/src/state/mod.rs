//! The day's progress and the operations that change it.
//!
//! Every operation here is a pure in-memory mutation. Persisting the result
//! is the caller's job (see [`crate::journal::Journal`]).

mod garden;
mod mood;

pub use garden::{Garden, GrowthStage, PlantKind};
pub use mood::Mood;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Archived copy of a closed day. Never modified after it is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DaySnapshot {
    pub sessions: u32,
    /// Mood label, empty when none was picked.
    pub mood: String,
    pub notes: String,
    pub task: String,
    pub plants: Garden,
    /// Date passed to the close. Absent in entries written by older versions.
    pub closed_on: Option<NaiveDate>,
}

/// Everything Petal remembers.
///
/// Missing fields read back as their zero value so that partial or older
/// files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    #[serde(alias = "main_task")]
    pub main_task: String,
    /// Only true for the instant a completion is being processed.
    #[serde(alias = "task_done")]
    pub task_done: bool,
    #[serde(alias = "mood_label", alias = "mood", with = "mood::label")]
    pub mood_label: Option<Mood>,
    pub notes: String,
    #[serde(alias = "today_sessions")]
    pub today_sessions: u32,
    pub streak: u32,
    #[serde(alias = "last_active_date")]
    pub last_active_date: Option<NaiveDate>,
    pub plants: Garden,
    pub history: Vec<DaySnapshot>,
}

impl AppState {
    /// Zero the current day. Streak, last active date and history survive.
    pub fn reset_today(&mut self) {
        self.today_sessions = 0;
        self.mood_label = None;
        self.notes.clear();
        self.main_task.clear();
        self.task_done = false;
        self.plants = Garden::default();
    }

    /// Archive the current day into history, then reset it.
    pub fn close_day(&mut self, today: NaiveDate) -> DaySnapshot {
        let snapshot = DaySnapshot {
            sessions: self.today_sessions,
            mood: self.mood_label.map(|m| m.as_str().to_string()).unwrap_or_default(),
            notes: self.notes.clone(),
            task: self.main_task.clone(),
            plants: self.plants,
            closed_on: Some(today),
        };
        self.history.push(snapshot.clone());
        self.reset_today();
        snapshot
    }

    /// Count a finished focus session and grow the garden by one step.
    ///
    /// Returns the plant that grew, or `None` once everything has bloomed.
    pub fn record_session(&mut self) -> Option<(PlantKind, GrowthStage)> {
        self.today_sessions += 1;
        self.plants.advance()
    }

    /// Bump the streak once per calendar day that has at least one session.
    ///
    /// Returns whether the streak moved.
    pub fn update_streak(&mut self, today: NaiveDate) -> bool {
        if self.today_sessions == 0 || self.last_active_date == Some(today) {
            return false;
        }
        self.streak += 1;
        self.last_active_date = Some(today);
        true
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood_label = Some(mood);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_task(&mut self, task: impl Into<String>) {
        self.main_task = task.into();
        self.task_done = false;
    }

    /// Mark the main task done. The text is dropped, not archived.
    ///
    /// Returns the finished task text, or `None` when there was no task.
    pub fn complete_task(&mut self) -> Option<String> {
        if self.main_task.is_empty() {
            return None;
        }
        self.task_done = true;
        let finished = std::mem::take(&mut self.main_task);
        self.task_done = false;
        Some(finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn busy_state() -> AppState {
        let mut state = AppState::default();
        state.set_task("write chapter two");
        state.set_mood(Mood::Motivated);
        state.set_notes("coffee helped");
        state.record_session();
        state.record_session();
        state.streak = 4;
        state.last_active_date = Some(day(1));
        state.history.push(DaySnapshot {
            sessions: 1,
            mood: "sad".into(),
            ..Default::default()
        });
        state
    }

    #[test]
    fn default_state_is_zeroed() {
        let state = AppState::default();
        assert_eq!(state.today_sessions, 0);
        assert_eq!(state.streak, 0);
        assert_eq!(state.mood_label, None);
        assert!(state.notes.is_empty());
        assert!(state.main_task.is_empty());
        assert!(!state.task_done);
        assert_eq!(state.plants, Garden::default());
        assert!(state.history.is_empty());
        assert_eq!(state.last_active_date, None);
    }

    #[test]
    fn three_sessions_grow_rose_then_hydrangea() {
        let mut state = AppState::default();
        for _ in 0..3 {
            state.record_session();
        }
        assert_eq!(state.today_sessions, 3);
        assert_eq!(state.plants.rose, GrowthStage::Bloom);
        assert_eq!(state.plants.hydrangea, GrowthStage::Grow);
        assert_eq!(state.plants.sunflower, GrowthStage::Seed);
    }

    #[test]
    fn reset_today_keeps_streak_and_history() {
        let mut state = busy_state();
        state.reset_today();

        assert_eq!(state.today_sessions, 0);
        assert_eq!(state.plants, Garden::default());
        assert_eq!(state.mood_label, None);
        assert!(state.notes.is_empty());
        assert!(state.main_task.is_empty());
        assert!(!state.task_done);
        assert_eq!(state.streak, 4);
        assert_eq!(state.last_active_date, Some(day(1)));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn close_day_archives_pre_reset_values() {
        let mut state = busy_state();
        let before = state.clone();

        let snapshot = state.close_day(day(2));

        assert_eq!(snapshot.sessions, 2);
        assert_eq!(snapshot.mood, "motivated");
        assert_eq!(snapshot.notes, "coffee helped");
        assert_eq!(snapshot.task, "write chapter two");
        assert_eq!(snapshot.plants, before.plants);
        assert_eq!(snapshot.closed_on, Some(day(2)));
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history.last(), Some(&snapshot));
        assert_eq!(state.history[0], before.history[0]);

        let mut reset = before;
        reset.reset_today();
        reset.history.push(snapshot);
        assert_eq!(state, reset);
    }

    #[test]
    fn close_day_without_mood_stores_empty_label() {
        let mut state = AppState::default();
        let snapshot = state.close_day(day(3));
        assert_eq!(snapshot.mood, "");
        assert_eq!(snapshot.sessions, 0);
    }

    #[test]
    fn update_streak_is_idempotent_within_a_day() {
        let mut state = AppState::default();
        state.record_session();

        assert!(state.update_streak(day(5)));
        assert!(!state.update_streak(day(5)));
        assert_eq!(state.streak, 1);
        assert_eq!(state.last_active_date, Some(day(5)));

        assert!(state.update_streak(day(6)));
        assert_eq!(state.streak, 2);
    }

    #[test]
    fn update_streak_needs_a_session() {
        let mut state = AppState::default();
        assert!(!state.update_streak(day(5)));
        assert_eq!(state.streak, 0);
        assert_eq!(state.last_active_date, None);
    }

    #[test]
    fn complete_task_discards_text() {
        let mut state = AppState::default();
        state.set_task("tidy desk");
        assert_eq!(state.complete_task().as_deref(), Some("tidy desk"));
        assert!(state.main_task.is_empty());
        assert!(!state.task_done);
        assert_eq!(state.complete_task(), None);
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let state = busy_state();
        let json = serde_json::to_value(&state).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "mainTask",
            "taskDone",
            "moodLabel",
            "notes",
            "todaySessions",
            "streak",
            "lastActiveDate",
            "plants",
            "history",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(json["moodLabel"], "motivated");
        assert_eq!(json["lastActiveDate"], "2026-03-01");
    }

    #[test]
    fn empty_mood_label_reads_as_none() {
        let state: AppState = serde_json::from_str(r#"{"moodLabel": ""}"#).unwrap();
        assert_eq!(state.mood_label, None);
        let state: AppState = serde_json::from_str(r#"{"moodLabel": null}"#).unwrap();
        assert_eq!(state.mood_label, None);
    }

    proptest! {
        #[test]
        fn record_session_counts_and_bounds(calls in 0usize..20) {
            let mut state = AppState::default();
            let mut previous = state.plants.total_growth();
            for _ in 0..calls {
                state.record_session();
                let growth = state.plants.total_growth();
                prop_assert!(growth - previous <= 1);
                previous = growth;
            }
            prop_assert_eq!(state.today_sessions as usize, calls);
            prop_assert_eq!(state.plants.total_growth() as usize, calls.min(6));
            for (_, stage) in state.plants.iter() {
                prop_assert!(u8::from(stage) <= 2);
            }
        }

        #[test]
        fn streak_moves_once_per_day(sessions in 1u32..5, repeats in 1usize..5) {
            let mut state = AppState::default();
            for _ in 0..sessions {
                state.record_session();
            }
            for _ in 0..repeats {
                state.update_streak(day(9));
            }
            prop_assert_eq!(state.streak, 1);
        }
    }
}
