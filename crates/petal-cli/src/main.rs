use clap::{CommandFactory, Parser, Subcommand};
use petal_core::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "petal", version, about = "Petal -- go gently today")]
struct Cli {
    /// Print events as JSON instead of friendly text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a focus session in the foreground
    Focus {
        /// Session length in minutes (defaults to focus.default_minutes)
        #[arg(short, long)]
        minutes: Option<u32>,
    },
    /// Today's mood
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Today's notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Today's main task
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Reset or close the day
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Show today's progress and garden
    Status,
    /// Show closed days
    History,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    logging::init(&config.logging);

    let json = cli.json;
    let result = match cli.command {
        Commands::Focus { minutes } => commands::focus::run(minutes, &config, json),
        Commands::Mood { action } => commands::mood::run(action, &config, json),
        Commands::Notes { action } => commands::notes::run(action, &config, json),
        Commands::Task { action } => commands::task::run(action, &config, json),
        Commands::Day { action } => commands::day::run(action, &config, json),
        Commands::Status => commands::status::status(&config, json),
        Commands::History => commands::status::history(&config, json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "petal", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
