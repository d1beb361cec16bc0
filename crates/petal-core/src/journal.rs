//! Root controller.
//!
//! A [`Journal`] exclusively owns the day state, the focus timer, the state
//! file and the tick scheduler. Front ends feed it [`Command`]s and render
//! the [`Event`]s it returns. Any change to the day state is saved before
//! the call returns.

use chrono::{NaiveDate, Utc};

use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::state::{AppState, Mood};
use crate::storage::StateFile;
use crate::timer::{FocusTimer, ManualTicker, TickScheduler};
use crate::view::DayView;

/// Discrete user (or clock) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartTimer { minutes: u32 },
    Pause,
    Resume,
    Restart,
    Cancel,
    SetMood(Mood),
    SaveNotes(String),
    ClearNotes,
    SetTask(String),
    MarkTaskDone,
    ResetDay,
    CloseDay { today: NaiveDate },
    Tick,
}

pub struct Journal<T: TickScheduler = ManualTicker> {
    state: AppState,
    timer: FocusTimer,
    store: StateFile,
    ticker: T,
}

impl Journal<ManualTicker> {
    /// Journal whose timer only moves when `tick()` is called.
    pub fn open_manual(store: StateFile) -> Self {
        Self::open(store, ManualTicker::new())
    }
}

impl<T: TickScheduler> Journal<T> {
    /// Load the state from `store` (defaults if it cannot be read).
    pub fn open(store: StateFile, ticker: T) -> Self {
        let state = store.load();
        tracing::debug!(
            path = %store.path().display(),
            sessions = state.today_sessions,
            streak = state.streak,
            "journal opened"
        );
        Self {
            state,
            timer: FocusTimer::new(),
            store,
            ticker,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn store(&self) -> &StateFile {
        &self.store
    }

    pub fn view(&self) -> DayView {
        DayView::build(&self.state, &self.timer)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            view: self.view(),
            at: Utc::now(),
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Apply one input. Inputs that do not fit the current timer state
    /// yield no events.
    pub fn handle(&mut self, command: Command) -> Result<Vec<Event>> {
        Ok(match command {
            Command::StartTimer { minutes } => vec![self.start_timer(minutes)?],
            Command::Pause => self.pause().into_iter().collect(),
            Command::Resume => self.resume().into_iter().collect(),
            Command::Restart => self.restart().into_iter().collect(),
            Command::Cancel => self.cancel().into_iter().collect(),
            Command::SetMood(mood) => vec![self.set_mood(mood)?],
            Command::SaveNotes(notes) => vec![self.save_notes(notes)?],
            Command::ClearNotes => vec![self.clear_notes()?],
            Command::SetTask(task) => vec![self.set_task(task)?],
            Command::MarkTaskDone => self.mark_task_done()?.into_iter().collect(),
            Command::ResetDay => vec![self.reset_day()?],
            Command::CloseDay { today } => self.close_day(today)?,
            Command::Tick => self.tick()?,
        })
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn start_timer(&mut self, minutes: u32) -> Result<Event> {
        let event = self.timer.start(minutes)?;
        self.ticker.arm();
        tracing::debug!(minutes, "focus started");
        Ok(event)
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.timer.pause()?;
        self.ticker.disarm();
        tracing::debug!(remaining = self.timer.remaining_secs(), "focus paused");
        Some(event)
    }

    pub fn resume(&mut self) -> Option<Event> {
        let event = self.timer.resume()?;
        self.ticker.arm();
        tracing::debug!(remaining = self.timer.remaining_secs(), "focus resumed");
        Some(event)
    }

    pub fn restart(&mut self) -> Option<Event> {
        let event = self.timer.restart()?;
        self.ticker.arm();
        tracing::debug!(minutes = ?self.timer.last_duration_min(), "focus restarted");
        Some(event)
    }

    pub fn cancel(&mut self) -> Option<Event> {
        let event = self.timer.cancel()?;
        self.ticker.disarm();
        tracing::debug!("focus cancelled");
        Some(event)
    }

    /// One second of countdown.
    ///
    /// On the tick that reaches zero the session is recorded, the garden
    /// grows, the state is saved, and a fresh snapshot closes the batch.
    pub fn tick(&mut self) -> Result<Vec<Event>> {
        let Some(event) = self.timer.tick() else {
            return Ok(Vec::new());
        };
        if !matches!(event, Event::TimerExpired { .. }) {
            return Ok(vec![event]);
        }

        self.ticker.disarm();
        let grown = self.state.record_session();
        tracing::info!(
            sessions = self.state.today_sessions,
            plant = ?grown.map(|(plant, _)| plant),
            "focus session recorded"
        );
        let recorded = Event::SessionRecorded {
            today_sessions: self.state.today_sessions,
            plant: grown.map(|(plant, _)| plant),
            stage: grown.map(|(_, stage)| stage),
            at: Utc::now(),
        };
        self.persist()?;
        Ok(vec![event, recorded, self.snapshot()])
    }

    // ── Day state ────────────────────────────────────────────────────

    pub fn set_mood(&mut self, mood: Mood) -> Result<Event> {
        self.state.set_mood(mood);
        self.persist()?;
        Ok(Event::MoodSet {
            mood,
            reaction: mood.reaction().to_string(),
            at: Utc::now(),
        })
    }

    /// Like [`Journal::set_mood`], parsing the label first.
    pub fn set_mood_label(&mut self, label: &str) -> Result<Event> {
        let mood: Mood = label.parse()?;
        self.set_mood(mood)
    }

    pub fn save_notes(&mut self, notes: impl Into<String>) -> Result<Event> {
        self.state.set_notes(notes);
        self.persist()?;
        Ok(Event::NotesSaved {
            chars: self.state.notes.chars().count(),
            at: Utc::now(),
        })
    }

    pub fn clear_notes(&mut self) -> Result<Event> {
        self.state.set_notes(String::new());
        self.persist()?;
        Ok(Event::NotesCleared { at: Utc::now() })
    }

    pub fn set_task(&mut self, task: impl Into<String>) -> Result<Event> {
        self.state.set_task(task);
        self.persist()?;
        Ok(Event::TaskSet {
            task: self.state.main_task.clone(),
            at: Utc::now(),
        })
    }

    /// Complete the main task. `None` when there is no task to complete.
    pub fn mark_task_done(&mut self) -> Result<Option<Event>> {
        let Some(task) = self.state.complete_task() else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(Event::TaskCompleted {
            task,
            at: Utc::now(),
        }))
    }

    pub fn reset_day(&mut self) -> Result<Event> {
        self.state.reset_today();
        self.persist()?;
        tracing::info!("day reset");
        Ok(Event::DayReset { at: Utc::now() })
    }

    /// End the day: credit the streak from today's sessions, then archive
    /// and reset. The streak check runs before the reset zeroes the count.
    pub fn close_day(&mut self, today: NaiveDate) -> Result<Vec<Event>> {
        let mut events = Vec::with_capacity(2);
        if self.state.update_streak(today) {
            events.push(Event::StreakUpdated {
                streak: self.state.streak,
                date: today,
                at: Utc::now(),
            });
        }
        let snapshot = self.state.close_day(today);
        self.persist()?;
        tracing::info!(
            %today,
            sessions = snapshot.sessions,
            streak = self.state.streak,
            "day closed"
        );
        events.push(Event::DayClosed {
            snapshot,
            at: Utc::now(),
        });
        Ok(events)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.state).map_err(|e| {
            tracing::warn!(error = %e, "state not saved");
            CoreError::from(e)
        })
    }
}
