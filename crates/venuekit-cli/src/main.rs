//! `venuekit` CLI — room availability and agenda filtering from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List the day's half-hour slots for a room (stdin → stdout)
//! cat bookings.json | venuekit slots
//!
//! # Check one candidate slot against the day's bookings
//! venuekit check --start 10:00 --duration 1.5 -i bookings.json
//!
//! # Free gaps between bookings, at least an hour long
//! venuekit free -i bookings.json --min-minutes 60
//!
//! # Distinct filter options for an agenda
//! venuekit options -i sessions.json --facet focus --facet level --facet goals:contains
//!
//! # Apply active selections
//! venuekit filter -i sessions.json --facet focus --select focus=Trust,Adoption
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

use facet_engine::{
    apply_filters, extract_filter_options, FacetConfig, FacetDef, FilterSelection,
};
use slot_engine::{
    compute_end_time, find_conflicts, free_periods, generate_time_slots, is_slot_available,
    Booking, BookingWindow, TimeOfDay,
};

#[derive(Parser)]
#[command(name = "venuekit", version, about = "Conference room availability and agenda filtering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The daily operating window, overridable per invocation.
#[derive(Args)]
struct WindowArgs {
    /// Opening time (HH:MM)
    #[arg(long, default_value = "08:00")]
    open: String,

    /// Closing time (HH:MM)
    #[arg(long, default_value = "18:00")]
    close: String,

    /// Minutes between bookable start marks
    #[arg(long, default_value_t = 30)]
    step: u16,
}

impl WindowArgs {
    fn build(&self) -> Result<BookingWindow> {
        let open: TimeOfDay = self.open.parse()?;
        let close: TimeOfDay = self.close.parse()?;
        Ok(BookingWindow::new(open, close, self.step)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the day's bookable start marks with availability
    Slots {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Check whether one candidate slot can be booked
    Check {
        /// Candidate start time (HH:MM)
        #[arg(long)]
        start: String,
        /// Duration in hours (a positive half-hour multiple)
        #[arg(long)]
        duration: f64,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// List free gaps between a day's bookings
    Free {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Only report gaps at least this many minutes long
        #[arg(long)]
        min_minutes: Option<u16>,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Extract the distinct filter options per facet category
    Options {
        /// Items JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Facet category, optionally with a rule ("goals:contains"); repeatable
        #[arg(long = "facet", required = true)]
        facets: Vec<String>,
    },
    /// Filter items by active facet selections
    Filter {
        /// Items JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Facet category, optionally with a rule ("goals:contains"); repeatable
        #[arg(long = "facet", required = true)]
        facets: Vec<String>,
        /// Active selection, e.g. "focus=Trust,Adoption"; repeatable
        #[arg(long = "select")]
        selections: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            input,
            output,
            window,
        } => {
            let window = window.build()?;
            let bookings = read_bookings(input.as_deref())?;
            let slots = generate_time_slots(&bookings, &window);
            write_json(output.as_deref(), &slots)?;
        }
        Commands::Check {
            start,
            duration,
            input,
            output,
            window,
        } => {
            let window = window.build()?;
            let start: TimeOfDay = start.parse()?;
            let bookings = read_bookings(input.as_deref())?;

            let available = is_slot_available(start, duration, &bookings, &window);
            let end = compute_end_time(start, duration);
            let conflicts = match end {
                Some(end) => find_conflicts(start, end, &bookings),
                None => Vec::new(),
            };
            let report = serde_json::json!({
                "start": start,
                "end": end,
                "duration_hours": duration,
                "available": available,
                "conflicts": conflicts,
            });
            write_json(output.as_deref(), &report)?;
        }
        Commands::Free {
            input,
            output,
            min_minutes,
            window,
        } => {
            let window = window.build()?;
            let bookings = read_bookings(input.as_deref())?;
            let mut periods = free_periods(&bookings, &window);
            if let Some(min) = min_minutes {
                periods.retain(|p| p.duration_minutes >= min);
            }
            write_json(output.as_deref(), &periods)?;
        }
        Commands::Options {
            input,
            output,
            facets,
        } => {
            let config = parse_facets(&facets)?;
            let items = read_items(input.as_deref())?;

            // Emit a {category: [values]} object in config order.
            let mut map = serde_json::Map::new();
            for group in extract_filter_options(&items, &config) {
                map.insert(group.category, serde_json::json!(group.values));
            }
            write_json(output.as_deref(), &serde_json::Value::Object(map))?;
        }
        Commands::Filter {
            input,
            output,
            facets,
            selections,
        } => {
            let config = parse_facets(&facets)?;
            let selection = parse_selections(&selections)?;
            let items = read_items(input.as_deref())?;
            let filtered = apply_filters(&items, &config, &selection);
            write_json(output.as_deref(), &filtered)?;
        }
    }

    Ok(())
}

/// Parse `--facet` arguments of the form `name` or `name:rule`.
fn parse_facets(specs: &[String]) -> Result<FacetConfig> {
    let mut defs = Vec::new();
    for spec in specs {
        let def = match spec.split_once(':') {
            None => FacetDef::exact(spec.trim()),
            Some((name, "exact")) => FacetDef::exact(name.trim()),
            Some((name, "contains")) => FacetDef::contains(name.trim()),
            Some((_, other)) => {
                anyhow::bail!("Unknown facet rule: '{other}'. Available rules: exact, contains")
            }
        };
        defs.push(def);
    }
    Ok(FacetConfig::new(defs)?)
}

/// Parse `--select` arguments of the form `category=value1,value2`.
fn parse_selections(specs: &[String]) -> Result<FilterSelection> {
    let mut selection = FilterSelection::new();
    for spec in specs {
        let (category, raw) = spec
            .split_once('=')
            .with_context(|| format!("Invalid selection '{spec}' (expected category=value,...)"))?;
        let values: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect();
        selection.set(category.trim(), values);
    }
    Ok(selection)
}

fn read_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse bookings JSON")
}

fn read_items(path: Option<&str>) -> Result<Vec<serde_json::Value>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse items JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: serde::Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
