// Rust Dayview
// Command line entry point: lay out a day file and follow the clock

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Serialize;

use rust_dayview::models::layout::PositionedEvent;
use rust_dayview::models::settings::Settings;
use rust_dayview::services::cursor::{compute_time_cursor_with_format, TimeCursor, TimeCursorClock};
use rust_dayview::services::day_file::load_events;
use rust_dayview::services::grid::{hour_marks, HourMark};
use rust_dayview::services::layout::LayoutEngine;
use rust_dayview::services::schedule::PeriodicTask;
use rust_dayview::services::settings::SettingsService;
use rust_dayview::services::upcoming::{upcoming_events, UpcomingEvents};
use rust_dayview::utils::time::parse_clock;

#[derive(Parser)]
#[command(name = "rust-dayview")]
#[command(about = "Lay out a day of calendar events and track the current time")]
struct Cli {
    /// Settings file (defaults to config.toml in the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print positioned events, time cursor, hour grid and upcoming events as JSON
    Layout {
        /// JSON array of the day's events
        day: PathBuf,

        /// JSON array of tomorrow's events, for the upcoming list
        #[arg(short, long)]
        tomorrow: Option<PathBuf>,

        /// Wall-clock time to use instead of now (HH:MM)
        #[arg(short, long)]
        now: Option<String>,
    },
    /// Re-read the day file on every refresh and print the cursor on every tick
    Watch {
        /// JSON array of the day's events
        day: PathBuf,
    },
    /// Print the effective settings as TOML
    Config,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayReport {
    events: Vec<PositionedEvent>,
    cursor: TimeCursor,
    hour_marks: Vec<HourMark>,
    upcoming: UpcomingEvents,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Layout { day, tomorrow, now } => {
            cmd_layout(&settings, &day, tomorrow.as_deref(), now.as_deref())
        }
        Commands::Watch { day } => cmd_watch(settings, day).await,
        Commands::Config => cmd_config(&settings),
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let service = match path {
        Some(path) => SettingsService::new(path),
        None => match SettingsService::from_default_location() {
            Some(service) => service,
            None => {
                log::warn!("No config directory available, using default settings");
                return Ok(Settings::default());
            }
        },
    };

    log::info!("Using settings from {}", service.path().display());
    service.get()
}

fn cmd_layout(
    settings: &Settings,
    day: &Path,
    tomorrow: Option<&Path>,
    now: Option<&str>,
) -> Result<()> {
    let engine = LayoutEngine::new(settings.view, settings.layout)?;

    let now = match now {
        Some(value) => parse_clock(value).ok_or_else(|| anyhow!("Invalid time '{}', expected HH:MM", value))?,
        None => Local::now().time(),
    };

    let today_events = load_events(day)?;
    let tomorrow_events = match tomorrow {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };

    let report = DayReport {
        events: engine.layout_day(&today_events),
        cursor: compute_time_cursor_with_format(now, &settings.view, settings.cursor.time_format),
        hour_marks: hour_marks(&settings.view, settings.cursor.time_format),
        upcoming: upcoming_events(&today_events, &tomorrow_events, now),
    };

    let output = serde_json::to_string_pretty(&report).context("Failed to serialize day layout")?;
    println!("{}", output);
    Ok(())
}

async fn cmd_watch(settings: Settings, day: PathBuf) -> Result<()> {
    let engine = LayoutEngine::new(settings.view, settings.layout)?;

    let refresh = PeriodicTask::spawn(
        "event-refresh",
        Duration::from_secs(settings.refresh.interval_seconds),
        move || match load_events(&day) {
            Ok(events) => print_layout(&engine.layout_day(&events)),
            Err(err) => log::warn!("Event refresh failed: {:#}", err),
        },
    );

    let mut clock = TimeCursorClock::new(settings.view, settings.cursor.time_format);
    let tick = PeriodicTask::spawn(
        "clock-tick",
        Duration::from_secs(settings.cursor.tick_seconds),
        move || {
            let cursor = clock.tick();
            if cursor.visible {
                println!("now {} at {:.1}px", cursor.label, cursor.indicator_top);
            } else {
                println!("now {} (outside the day view)", cursor.label);
            }
        },
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    log::info!("Stopping day view watch");

    tick.shutdown().await;
    refresh.shutdown().await;
    Ok(())
}

fn print_layout(positioned: &[PositionedEvent]) {
    println!("{} events", positioned.len());
    for event in positioned {
        println!(
            "  {:>5}-{:<5} {:<24} top={:.1} height={:.1} left={:.1}% width={:.1}% z={}",
            clock_text(event.event.start_minute),
            clock_text(event.event.end_minute),
            event.event.title,
            event.top,
            event.height,
            event.left_percent,
            event.width_percent,
            event.z_index
        );
    }
}

fn clock_text(minute: i32) -> String {
    match u32::try_from(minute)
        .ok()
        .and_then(|m| NaiveTime::from_hms_opt(m / 60, m % 60, 0))
    {
        Some(time) => time.format("%H:%M").to_string(),
        None => format!("{}m", minute),
    }
}

fn cmd_config(settings: &Settings) -> Result<()> {
    let output = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    print!("{}", output);
    Ok(())
}
