use chrono::{Local, NaiveDate};
use clap::Subcommand;
use petal_core::Config;

use super::{emit, open_journal, CliResult};

#[derive(Subcommand)]
pub enum DayAction {
    /// Start today over. Streak and history are kept
    Reset,
    /// Save today into history, credit the streak, and start fresh
    Close {
        /// Calendar day being closed (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: DayAction, config: &Config, json: bool) -> CliResult {
    let mut journal = open_journal(config)?;
    match action {
        DayAction::Reset => {
            let event = journal.reset_day()?;
            emit(&[event], json)?;
        }
        DayAction::Close { date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let events = journal.close_day(today)?;
            emit(&events, json)?;
        }
    }
    Ok(())
}
