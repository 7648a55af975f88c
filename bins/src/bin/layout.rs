// SPDX-License-Identifier: MIT

//!
//! The Lifeline layout inspection CLI
//!
//! Reads a JSON list of events, runs the layout engine over it, and prints
//! the computed layout as JSON.  Useful for eyeballing what a renderer would
//! be given, and for diffing layouts across engine changes.
//!

use clap::Parser;
use lifeline_core::{Event, Year};
use lifeline_layout::Engine;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

/// Lifeline entry point (lay out a timeline from a JSON event list)
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new().add_filter_allow_str("lifeline").build();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    // Read and parse the event list
    let json = match std::fs::read_to_string(&args.events) {
        Ok(json) => json,
        Err(error) => {
            eprintln!("Error reading {}: {error}", args.events.display());
            std::process::exit(1);
        }
    };
    let events: Vec<Event> = match serde_json::from_str(&json) {
        Ok(events) => events,
        Err(error) => {
            eprintln!("Error parsing {}: {error}", args.events.display());
            std::process::exit(1);
        }
    };

    // Build the engine, injecting the current year if one was given
    let mut engine = match args.current_year {
        Some(current_year) => match Year::try_from(current_year) {
            Ok(current_year) => Engine::with_current_year(current_year),
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        },
        None => Engine::new(),
    };
    engine.set_events(events);

    // Print the layout
    let layout = engine.layout();
    let output = if args.pretty {
        serde_json::to_string_pretty(&layout)
    } else {
        serde_json::to_string(&layout)
    };
    match output {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("Error serialising layout: {error}");
            std::process::exit(1);
        }
    }
}

/// Lay out a timeline from a JSON event list and print the result
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a JSON file holding an array of events
    events: PathBuf,

    /// The year that "ongoing" events resolve to (defaults to the actual
    /// current calendar year)
    #[arg(long)]
    current_year: Option<i64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}
