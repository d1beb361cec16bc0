use clap::Subcommand;
use petal_core::Config;

use super::{emit, open_journal, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Set today's main task
    Set {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark the main task done (the task is cleared)
    Done,
}

pub fn run(action: TaskAction, config: &Config, json: bool) -> CliResult {
    let mut journal = open_journal(config)?;
    match action {
        TaskAction::Set { text } => {
            let event = journal.set_task(text.join(" "))?;
            emit(&[event], json)?;
        }
        TaskAction::Done => match journal.mark_task_done()? {
            Some(event) => emit(&[event], json)?,
            None => eprintln!("no task to complete"),
        },
    }
    Ok(())
}
