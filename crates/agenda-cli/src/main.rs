//! `agenda` CLI — inspect day-grid layout and two-source reconciliation
//! from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Column layout for one date (events JSON on stdin or via -i)
//! agenda layout --date 2026-03-01 -i events.json
//!
//! # Merge a local and an external event list
//! agenda merge --local local.json --external external.json
//!
//! # Merge, then simulate disabling the external source
//! agenda merge --local local.json --external external.json --disabled
//!
//! # Ids of events visible on a date
//! agenda visible --date 2026-03-01 -i events.json
//! ```
//!
//! Events are JSON arrays of the `TimedEvent` record shape (camelCase keys).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use agenda_core::event::{TimedEvent, MIN_DURATION_MINUTES};
use agenda_core::{
    disable_external_source, events_for_date, layout_day, reconcile_detailed, sort_for_display,
};

#[derive(Parser)]
#[command(name = "agenda", version, about = "Agenda event layout and reconciliation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute column placements for the timed events visible on a date
    Layout {
        /// Date to lay out (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Minimum effective duration in minutes
        #[arg(long, default_value_t = MIN_DURATION_MINUTES)]
        min_duration: i64,
    },
    /// Merge a local and an external event list into one display list
    Merge {
        /// Local events JSON file
        #[arg(long)]
        local: String,
        /// External events JSON file
        #[arg(long)]
        external: String,
        /// Apply the disable-external-source transition after merging
        #[arg(long)]
        disabled: bool,
    },
    /// List ids of events visible on a date
    Visible {
        /// Date to query (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            date,
            input,
            min_duration,
        } => {
            let events = read_events(input.as_deref())?;
            let visible = events_for_date(&events, date);
            let placements = layout_day(&visible, min_duration)?;
            println!("{}", serde_json::to_string_pretty(&placements)?);
        }
        Commands::Merge {
            local,
            external,
            disabled,
        } => {
            let local_events = read_events(Some(&local))?;
            let external_events = read_events(Some(&external))?;

            let result = reconcile_detailed(&local_events, &external_events);
            for ambiguous in &result.ambiguous_refs {
                eprintln!("warning: external ref {ambiguous} is claimed by multiple local events");
            }

            let mut merged = if disabled {
                disable_external_source(&result.events)
            } else {
                result.events
            };
            sort_for_display(&mut merged);
            println!("{}", serde_json::to_string_pretty(&merged)?);
        }
        Commands::Visible { date, input } => {
            let events = read_events(input.as_deref())?;
            let ids: Vec<&str> = events_for_date(&events, date)
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
    }

    Ok(())
}

/// Read an event list from a file, or stdin when no path is given.
fn read_events(path: Option<&str>) -> Result<Vec<TimedEvent>> {
    let raw = match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("failed to read {}", p))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("events must be a JSON array of event records")
}
