use clap::Subcommand;
use petal_core::Config;

use super::{emit, open_journal, CliResult};

#[derive(Subcommand)]
pub enum NotesAction {
    /// Replace today's notes
    Save {
        /// Note text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Clear today's notes
    Clear,
    /// Print today's notes
    Show,
}

pub fn run(action: NotesAction, config: &Config, json: bool) -> CliResult {
    let mut journal = open_journal(config)?;
    match action {
        NotesAction::Save { text } => {
            let event = journal.save_notes(text.join(" "))?;
            emit(&[event], json)?;
        }
        NotesAction::Clear => {
            let event = journal.clear_notes()?;
            emit(&[event], json)?;
        }
        NotesAction::Show => {
            let notes = &journal.state().notes;
            if json {
                println!("{}", serde_json::json!({ "notes": notes }));
            } else {
                println!("{notes}");
            }
        }
    }
    Ok(())
}
