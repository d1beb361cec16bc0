pub mod config;
pub mod day;
pub mod focus;
pub mod mood;
pub mod notes;
pub mod status;
pub mod task;

use petal_core::{Config, Event, Journal, StateFile};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// State file named by the config (or the default one).
pub fn state_file(config: &Config) -> Result<StateFile, Box<dyn std::error::Error>> {
    Ok(StateFile::new(config.state_path()?))
}

/// Journal for one-shot commands. Its timer never ticks.
pub fn open_journal(config: &Config) -> Result<Journal, Box<dyn std::error::Error>> {
    Ok(Journal::open_manual(state_file(config)?))
}

/// Print events: one JSON document each, or their friendly message.
pub fn emit(events: &[Event], json: bool) -> CliResult {
    for event in events {
        if json {
            println!("{}", serde_json::to_string(event)?);
        } else if let Some(message) = event.message() {
            println!("{message}");
        }
    }
    Ok(())
}
