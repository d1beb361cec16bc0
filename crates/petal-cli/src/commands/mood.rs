use clap::Subcommand;
use petal_core::Config;

use super::{emit, open_journal, CliResult};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Pick today's mood: sleepy, motivated, angry or sad
    Set { label: String },
    /// Print today's mood
    Show,
}

pub fn run(action: MoodAction, config: &Config, json: bool) -> CliResult {
    let mut journal = open_journal(config)?;
    match action {
        MoodAction::Set { label } => {
            let event = journal.set_mood_label(&label)?;
            emit(&[event], json)?;
        }
        MoodAction::Show => {
            let mood = journal.state().mood_label;
            if json {
                println!("{}", serde_json::json!({ "mood": mood.map(|m| m.as_str()).unwrap_or("") }));
            } else {
                match mood {
                    Some(mood) => println!("{mood}"),
                    None => println!("no mood picked yet"),
                }
            }
        }
    }
    Ok(())
}
