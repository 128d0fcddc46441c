//! Rink CLI
//!
//! Derives scoreboard state and an event log from exported `game_event` rows,
//! and lists exported `game` rows the way the landing page does.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rink_core::analysis::{period_label, summarize, TimelineEntry};
use rink_core::models::Game;
use rink_core::store::order_recent_games;
use rink_core::{validate_rows, EventError, GameEvent, GameEventRow, TrackerConfig};

#[derive(Parser)]
#[command(name = "rink")]
#[command(version, about = "Hockey game state from recorded events", long_about = None)]
struct Cli {
    /// Log filter, e.g. "debug" or "rink_core=trace"
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Tracker config JSON; overrides RINK_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print score, period and penalty tallies
    State {
        /// JSON array of game_event rows
        #[arg(long)]
        events: PathBuf,
    },

    /// Print one line per event, in the order given
    Log {
        #[arg(long)]
        events: PathBuf,
    },

    /// Report rows that would be rejected when recorded
    Validate {
        #[arg(long)]
        events: PathBuf,
    },

    /// List the most recent games, newest first
    Games {
        /// JSON array of game rows
        #[arg(long)]
        games: PathBuf,

        /// Overrides recent_games_limit from the config
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the JSON Schema of a game_event row
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::State { events } => {
            let rows = read_rows(&events)?;
            print!("{}", render_state(&rows, &config));
        }

        Commands::Log { events } => {
            let rows = read_rows(&events)?;
            for line in render_log(&rows) {
                println!("{line}");
            }
        }

        Commands::Validate { events } => {
            let rows = read_rows(&events)?;
            let failures = invalid_rows(&rows);
            for (index, err) in &failures {
                println!("row {index}: {err}");
            }
            if !failures.is_empty() {
                bail!("{} of {} rows are invalid", failures.len(), rows.len());
            }
            println!("{} rows OK", rows.len());
        }

        Commands::Games { games, limit } => {
            let games = read_json::<Game>(&games, "game")?;
            let limit = limit.unwrap_or(config.recent_games_limit);
            for line in render_games(games, limit) {
                println!("{line}");
            }
        }

        Commands::Schema => {
            println!("{}", rink_core::event_row_schema_json()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<TrackerConfig> {
    match path {
        Some(path) => TrackerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => TrackerConfig::from_env().context("Failed to load config from RINK_CONFIG_PATH"),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, kind: &str) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {kind} rows from {}", path.display()))?;
    let rows: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of {kind} rows", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), kind, "loaded rows");
    Ok(rows)
}

fn read_rows(path: &Path) -> Result<Vec<GameEventRow>> {
    read_json(path, "event")
}

fn invalid_rows(rows: &[GameEventRow]) -> Vec<(usize, EventError)> {
    validate_rows(rows).1
}

fn render_state(rows: &[GameEventRow], config: &TrackerConfig) -> String {
    let (events, rejected) = validate_rows(rows);
    let summary = summarize(&events);

    let mut out = String::new();
    out.push_str(&format!("Score:     Home {} - {} Away\n", summary.score.home, summary.score.away));
    out.push_str(&format!(
        "Period:    {}\n",
        period_label(summary.period, config.regulation_periods)
    ));
    if summary.game_over {
        out.push_str("Status:    Final\n");
    }
    out.push_str(&format!(
        "Penalties: Home {} - {} Away\n",
        summary.penalties.home, summary.penalties.away
    ));
    out.push_str(&format!("Events:    {} ({} invalid)\n", rows.len(), rejected.len()));
    out
}

fn render_games(games: Vec<Game>, limit: usize) -> Vec<String> {
    order_recent_games(games, limit)
        .into_iter()
        .map(|game| {
            let date = game
                .start_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "----------".to_string());
            let time = game
                .start_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string());
            let status = game.status.map(|s| s.as_str()).unwrap_or("new");
            let location = game.location.as_deref().unwrap_or("");
            format!("{date} {time}  {status:<11}  {}  {location}", game.id)
        })
        .collect()
}

fn render_log(rows: &[GameEventRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match GameEvent::try_from(row) {
            Ok(event) => {
                let entry = TimelineEntry::from(&event);
                let clock = entry.clock.unwrap_or_default();
                if entry.details.is_empty() {
                    format!("{clock:>12}  {}", entry.summary)
                } else {
                    format!("{clock:>12}  {}  ({})", entry.summary, entry.details)
                }
            }
            Err(err) => format!("{:>12}  invalid {} row: {err}", "", row.event_type),
        })
        .collect()
}
