//! Output formatting for CLI commands.
//!
//! Vehicles are printed either as their labeled text block or as JSON for
//! programmatic use. The writer-generic functions back the stdout wrappers so
//! they can be tested against a buffer.

use crate::domain::Vehicle;
use serde::Serialize;
use std::io::{self, Write};

/// Separator printed under a result-count header
const SUMMARY_RULE: &str = "----------------------------------";

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a vehicle in the specified format
pub fn print_vehicle(vehicle: &Vehicle, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_vehicle(&mut handle, vehicle, mode)
}

/// Print a list of vehicles in the specified format
pub fn print_vehicles<'a, I>(vehicles: I, mode: OutputMode) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_vehicles(&mut handle, vehicles, mode)
}

/// Print a search result: a count header followed by each hit
pub fn print_search_result(label: &str, hits: &[Vehicle], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_search_result(&mut handle, label, hits, mode)
}

/// Print a simple message
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

// ============================================================================
// Writers
// ============================================================================

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

pub(crate) fn write_vehicle<W: Write>(
    w: &mut W,
    vehicle: &Vehicle,
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => writeln!(w, "{vehicle}"),
        OutputMode::Json => write_json(w, vehicle),
    }
}

pub(crate) fn write_vehicles<'a, W, I>(w: &mut W, vehicles: I, mode: OutputMode) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Vehicle>,
{
    match mode {
        OutputMode::Text => {
            for vehicle in vehicles {
                writeln!(w, "{vehicle}")?;
            }
            Ok(())
        }
        OutputMode::Json => {
            let list: Vec<&Vehicle> = vehicles.into_iter().collect();
            write_json(w, &list)
        }
    }
}

pub(crate) fn write_search_result<W: Write>(
    w: &mut W,
    label: &str,
    hits: &[Vehicle],
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => {
            writeln!(w)?;
            writeln!(w, "{label}: {}", hits.len())?;
            writeln!(w, "{SUMMARY_RULE}")?;
            write_vehicles(w, hits, mode)
        }
        OutputMode::Json => write_json(w, hits),
    }
}
