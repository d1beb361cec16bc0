use petal_core::{Config, DayView};

use super::{open_journal, CliResult};

pub fn status(config: &Config, json: bool) -> CliResult {
    let journal = open_journal(config)?;
    let view = journal.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_view(&view));
    }
    Ok(())
}

pub fn history(config: &Config, json: bool) -> CliResult {
    let journal = open_journal(config)?;
    let history = &journal.state().history;
    if json {
        println!("{}", serde_json::to_string_pretty(history)?);
        return Ok(());
    }
    if history.is_empty() {
        println!("no days saved yet");
        return Ok(());
    }
    for (i, day) in history.iter().enumerate() {
        let date = day
            .closed_on
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("day {}", i + 1));
        let mood = if day.mood.is_empty() { "-" } else { day.mood.as_str() };
        println!(
            "{date}  {} session(s)  mood {mood}  growth {}/6  {}",
            day.sessions,
            day.plants.total_growth(),
            day.task
        );
    }
    Ok(())
}

fn render_view(view: &DayView) -> String {
    let garden = view
        .garden
        .iter()
        .map(|p| format!("{} {}", p.kind, p.stage))
        .collect::<Vec<_>>()
        .join(", ");
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

    format!(
        "sessions  {}\nstreak    {} day(s)\nmood      {}\ntask      {}\nnotes     {}\ngarden    {} ({:.0}%)\nhistory   {} day(s)\n",
        view.today_sessions,
        view.streak,
        or_dash(&view.mood),
        or_dash(&view.task),
        or_dash(&view.notes),
        garden,
        view.garden_progress_pct,
        view.history_len,
    )
}
