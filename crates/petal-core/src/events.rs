use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{DaySnapshot, GrowthStage, Mood, PlantKind};
use crate::view::DayView;

/// Every state change in the system produces an Event.
/// The front end renders them; `StateSnapshot` carries the whole view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerRestarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerCancelled {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        remaining_secs: u64,
        display: String,
    },
    TimerExpired {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SessionRecorded {
        today_sessions: u32,
        /// Plant that grew, absent once the garden is in full bloom.
        plant: Option<PlantKind>,
        stage: Option<GrowthStage>,
        at: DateTime<Utc>,
    },
    MoodSet {
        mood: Mood,
        reaction: String,
        at: DateTime<Utc>,
    },
    NotesSaved {
        chars: usize,
        at: DateTime<Utc>,
    },
    NotesCleared {
        at: DateTime<Utc>,
    },
    TaskSet {
        task: String,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        task: String,
        at: DateTime<Utc>,
    },
    DayReset {
        at: DateTime<Utc>,
    },
    StreakUpdated {
        streak: u32,
        date: NaiveDate,
        at: DateTime<Utc>,
    },
    DayClosed {
        snapshot: DaySnapshot,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        view: DayView,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short feedback line for the user, if this event warrants one.
    pub fn message(&self) -> Option<String> {
        match self {
            Event::TimerStarted { duration_secs, .. } => {
                Some(format!("focus started: {} min", duration_secs / 60))
            }
            Event::TimerRestarted { duration_secs, .. } => {
                Some(format!("focus restarted: {} min", duration_secs / 60))
            }
            Event::TimerPaused { remaining_secs, .. } => {
                Some(format!("paused at {}", crate::view::format_clock(*remaining_secs)))
            }
            Event::TimerResumed { .. } => Some("back to it".into()),
            Event::TimerCancelled { .. } => Some("focus cancelled".into()),
            Event::TimerTicked { .. } => None,
            Event::TimerExpired { .. } => Some("session complete!".into()),
            Event::SessionRecorded {
                today_sessions,
                plant,
                stage,
                ..
            } => Some(match (plant, stage) {
                (Some(plant), Some(stage)) => {
                    format!("{today_sessions} session(s) today. your {plant} is now at {stage}.")
                }
                _ => format!("{today_sessions} session(s) today. the garden is in full bloom."),
            }),
            Event::MoodSet { reaction, .. } => Some(reaction.clone()),
            Event::NotesSaved { .. } => Some("notes saved".into()),
            Event::NotesCleared { .. } => Some("notes cleared".into()),
            Event::TaskSet { task, .. } => Some(format!("today's task: {task}")),
            Event::TaskCompleted { task, .. } => Some(format!("done: {task}. well done!")),
            Event::DayReset { .. } => Some("fresh start. today has been reset.".into()),
            Event::StreakUpdated { streak, .. } => Some(format!("streak: {streak} day(s)")),
            Event::DayClosed { snapshot, .. } => Some(format!(
                "day saved with {} session(s). see you tomorrow.",
                snapshot.sessions
            )),
            Event::StateSnapshot { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::NotesCleared { at: Utc::now() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "notes_cleared");
    }

    #[test]
    fn saturated_session_message_mentions_bloom() {
        let event = Event::SessionRecorded {
            today_sessions: 7,
            plant: None,
            stage: None,
            at: Utc::now(),
        };
        assert!(event.message().unwrap().contains("full bloom"));
    }

    #[test]
    fn ticks_have_no_message() {
        let event = Event::TimerTicked {
            remaining_secs: 59,
            display: "00:59".into(),
        };
        assert_eq!(event.message(), None);
    }
}
