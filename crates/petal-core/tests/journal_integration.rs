//! Integration tests for the journal lifecycle.
//!
//! Drives a [`Journal`] the way a front end would: commands in, events out,
//! with the state file on disk in a temporary directory.

use std::time::Duration;

use chrono::NaiveDate;
use petal_core::{
    Command, Event, GrowthStage, IntervalTicker, Journal, Mood, StateFile, TimerState,
};
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn state_file(dir: &TempDir) -> StateFile {
    StateFile::new(dir.path().join("state.json"))
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
}

fn run_focus(journal: &mut Journal, minutes: u32) -> Vec<Event> {
    let mut events = journal
        .handle(Command::StartTimer { minutes })
        .unwrap();
    for _ in 0..minutes * 60 {
        events.extend(journal.handle(Command::Tick).unwrap());
    }
    events
}

// ============================================================================
// Day lifecycle
// ============================================================================

#[test]
fn test_three_sessions_then_close_day() {
    let dir = TempDir::new().unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));

    journal.handle(Command::SetTask("finish report".into())).unwrap();
    journal.handle(Command::SetMood(Mood::Motivated)).unwrap();
    for _ in 0..3 {
        run_focus(&mut journal, 1);
    }
    journal.handle(Command::SaveNotes("good flow after lunch".into())).unwrap();

    let view = journal.view();
    assert_eq!(view.today_sessions, 3);
    assert_eq!(view.garden[0].stage, "bloom");
    assert_eq!(view.garden[1].stage, "grow");
    assert_eq!(view.garden[2].stage, "seed");

    let events = journal.handle(Command::CloseDay { today: date(18) }).unwrap();
    let snapshot = events
        .iter()
        .find_map(|e| match e {
            Event::DayClosed { snapshot, .. } => Some(snapshot.clone()),
            _ => None,
        })
        .expect("DayClosed event");
    assert_eq!(snapshot.sessions, 3);
    assert_eq!(snapshot.mood, "motivated");
    assert_eq!(snapshot.task, "finish report");
    assert_eq!(snapshot.notes, "good flow after lunch");
    assert_eq!(snapshot.plants.rose, GrowthStage::Bloom);

    // A fresh process sees the closed day.
    let reopened = Journal::open_manual(state_file(&dir));
    let state = reopened.state();
    assert_eq!(state.streak, 1);
    assert_eq!(state.last_active_date, Some(date(18)));
    assert_eq!(state.today_sessions, 0);
    assert_eq!(state.history, vec![snapshot]);
}

#[test]
fn test_streak_over_several_days() {
    let dir = TempDir::new().unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));

    // Day 1: one session. Day 2: nothing. Day 3: two sessions.
    run_focus(&mut journal, 1);
    journal.handle(Command::CloseDay { today: date(1) }).unwrap();
    journal.handle(Command::CloseDay { today: date(2) }).unwrap();
    run_focus(&mut journal, 1);
    run_focus(&mut journal, 1);
    journal.handle(Command::CloseDay { today: date(3) }).unwrap();

    let state = journal.state();
    assert_eq!(state.streak, 2);
    assert_eq!(state.last_active_date, Some(date(3)));
    let sessions: Vec<u32> = state.history.iter().map(|d| d.sessions).collect();
    assert_eq!(sessions, vec![1, 0, 2]);
}

#[test]
fn test_reset_day_keeps_history_and_streak() {
    let dir = TempDir::new().unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));
    run_focus(&mut journal, 1);
    journal.handle(Command::CloseDay { today: date(4) }).unwrap();
    run_focus(&mut journal, 1);
    journal.handle(Command::SetMood(Mood::Sad)).unwrap();

    journal.handle(Command::ResetDay).unwrap();

    let state = journal.state();
    assert_eq!(state.today_sessions, 0);
    assert_eq!(state.mood_label, None);
    assert_eq!(state.plants.rose, GrowthStage::Seed);
    assert_eq!(state.streak, 1);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_garden_saturates_after_six_sessions() {
    let dir = TempDir::new().unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));
    for _ in 0..8 {
        run_focus(&mut journal, 1);
    }
    let state = journal.state();
    assert_eq!(state.today_sessions, 8);
    assert!(state.plants.is_full_bloom());

    let view = journal.view();
    assert!((view.garden_progress_pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_task_done_is_one_shot() {
    let dir = TempDir::new().unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));
    journal.handle(Command::SetTask("inbox zero".into())).unwrap();

    let events = journal.handle(Command::MarkTaskDone).unwrap();
    assert_eq!(events.len(), 1);
    assert!(journal.handle(Command::MarkTaskDone).unwrap().is_empty());
    assert!(journal.state().main_task.is_empty());
}

#[test]
fn test_pause_does_not_leak_time() {
    let dir = TempDir::new().unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));
    journal.handle(Command::StartTimer { minutes: 25 }).unwrap();
    journal.handle(Command::Pause).unwrap();
    for _ in 0..10 {
        assert!(journal.handle(Command::Tick).unwrap().is_empty());
    }
    journal.handle(Command::Resume).unwrap();

    let mut expired = 0;
    for _ in 0..1500 {
        for event in journal.handle(Command::Tick).unwrap() {
            if matches!(event, Event::TimerExpired { .. }) {
                expired += 1;
            }
        }
    }
    assert_eq!(expired, 1);
    assert_eq!(journal.state().today_sessions, 1);
}

#[test]
fn test_corrupt_state_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("state.json"), "\u{0}\u{1}garbage").unwrap();
    let mut journal = Journal::open_manual(state_file(&dir));
    assert_eq!(journal.state().today_sessions, 0);

    // The next save replaces the corrupt file.
    journal.handle(Command::SetMood(Mood::Angry)).unwrap();
    let reopened = Journal::open_manual(state_file(&dir));
    assert_eq!(reopened.state().mood_label, Some(Mood::Angry));
}

// ============================================================================
// Real ticker (paused tokio clock)
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_interval_ticker_drives_session_to_expiry() {
    let dir = TempDir::new().unwrap();
    let (ticker, mut ticks) = IntervalTicker::new();
    let mut journal = Journal::open(state_file(&dir), ticker);

    let started = tokio::time::Instant::now();
    journal.start_timer(1).unwrap();
    while journal.timer().state() == TimerState::Running {
        ticks.recv().await.expect("ticker alive");
        journal.tick().unwrap();
    }

    assert_eq!(journal.timer().state(), TimerState::Expired);
    assert_eq!(journal.state().today_sessions, 1);
    assert!(started.elapsed() >= Duration::from_secs(60));

    // Nothing else arrives once the session has expired.
    let extra = tokio::time::timeout(Duration::from_secs(5), ticks.recv()).await;
    assert!(extra.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_pause_cancels_pending_ticks() {
    let dir = TempDir::new().unwrap();
    let (ticker, mut ticks) = IntervalTicker::new();
    let mut journal = Journal::open(state_file(&dir), ticker);

    journal.start_timer(1).unwrap();
    for _ in 0..5 {
        ticks.recv().await.unwrap();
        journal.tick().unwrap();
    }
    // Let ticks queue up unread, then pause.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    journal.pause().unwrap();
    assert_eq!(journal.timer().remaining_secs(), 55);

    let stale = tokio::time::timeout(Duration::from_secs(10), ticks.recv()).await;
    assert!(stale.is_err());

    journal.resume().unwrap();
    ticks.recv().await.unwrap();
    journal.tick().unwrap();
    assert_eq!(journal.timer().remaining_secs(), 54);
}
