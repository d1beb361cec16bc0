//! Foreground focus session.
//!
//! Runs on a current-thread tokio runtime: the countdown tick and stdin are
//! the only two event sources, and both are handled on the same thread.

use std::io::Write;

use petal_core::{Config, Event, IntervalTicker, Journal, TimerState};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{emit, state_file, CliResult};

/// Keys understood while a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Pause,
    Resume,
    Restart,
    Cancel,
}

fn parse_key(line: &str) -> Option<Key> {
    match line.trim() {
        "p" | "pause" => Some(Key::Pause),
        "r" | "resume" => Some(Key::Resume),
        "R" | "restart" => Some(Key::Restart),
        "c" | "q" | "cancel" | "quit" => Some(Key::Cancel),
        _ => None,
    }
}

pub fn run(minutes: Option<u32>, config: &Config, json: bool) -> CliResult {
    let minutes = minutes.unwrap_or(config.focus.default_minutes);
    let store = state_file(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let (ticker, mut ticks) = IntervalTicker::new();
        let mut journal = Journal::open(store, ticker);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;

        let started = journal.start_timer(minutes)?;
        emit(&[started], json)?;
        if !json {
            eprintln!("[p]ause  [r]esume  [R]estart  [c]ancel");
            draw_clock(&journal.timer().display());
        }

        loop {
            tokio::select! {
                tick = ticks.recv() => {
                    if tick.is_none() {
                        break;
                    }
                    let events = journal.tick()?;
                    render(&events, json)?;
                    if journal.timer().state() == TimerState::Expired {
                        break;
                    }
                }
                line = lines.next_line(), if stdin_open => {
                    let Some(line) = line? else {
                        stdin_open = false;
                        // Only a running countdown can still end on its own.
                        if journal.timer().state() != TimerState::Running {
                            let cancelled = journal.cancel();
                            render(&cancelled.into_iter().collect::<Vec<_>>(), json)?;
                            break;
                        }
                        continue;
                    };
                    let event = match parse_key(&line) {
                        Some(Key::Pause) => journal.pause(),
                        Some(Key::Resume) => journal.resume(),
                        Some(Key::Restart) => journal.restart(),
                        Some(Key::Cancel) => {
                            let cancelled = journal.cancel();
                            render(&cancelled.into_iter().collect::<Vec<_>>(), json)?;
                            break;
                        }
                        None => {
                            if !line.trim().is_empty() {
                                eprintln!("unknown key '{}'", line.trim());
                            }
                            None
                        }
                    };
                    if let Some(event) = event {
                        render(&[event], json)?;
                        if !json {
                            draw_clock(&journal.timer().display());
                        }
                    }
                }
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

/// Ticks redraw the clock in place; everything else goes through `emit`.
fn render(events: &[Event], json: bool) -> CliResult {
    for event in events {
        match event {
            Event::TimerTicked { display, .. } if !json => draw_clock(display),
            Event::StateSnapshot { view, .. } if !json => {
                let garden = view
                    .garden
                    .iter()
                    .map(|p| format!("{} {}", p.kind, p.stage))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("garden: {garden}");
            }
            _ => {
                if !json {
                    eprintln!();
                }
                emit(std::slice::from_ref(event), json)?;
            }
        }
    }
    Ok(())
}

fn draw_clock(display: &str) {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "\r{display} ");
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_keys() {
        assert_eq!(parse_key("p"), Some(Key::Pause));
        assert_eq!(parse_key(" r \n"), Some(Key::Resume));
        assert_eq!(parse_key("R"), Some(Key::Restart));
        assert_eq!(parse_key("q"), Some(Key::Cancel));
        assert_eq!(parse_key("cancel"), Some(Key::Cancel));
        assert_eq!(parse_key("x"), None);
        assert_eq!(parse_key(""), None);
    }
}
