//! WASM bindings for the venuekit engines.
//!
//! Exposes slot generation, candidate validation, free-period computation,
//! and facet filtering to JavaScript via `wasm-bindgen`. All complex types
//! cross the boundary as JSON strings; the booking form and agenda views
//! parse the results directly into their list state.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p venuekit-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir site/wasm/ \
//!   target/wasm32-unknown-unknown/release/venuekit_wasm.wasm
//! ```

use facet_engine::{FacetConfig, FilterSelection};
use serde::Serialize;
use slot_engine::{Booking, BookingWindow, TimeOfDay, TimeSlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TimeSlotDto {
    time: String,
    label: String,
    available: bool,
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            time: slot.time.to_string(),
            label: slot.label.clone(),
            available: slot.available,
        }
    }
}

#[derive(Serialize)]
struct FreePeriodDto {
    start: String,
    end: String,
    duration_minutes: u16,
}

// ---------------------------------------------------------------------------
// Parse helpers
// ---------------------------------------------------------------------------

/// Parse an `HH:MM` time-of-day string, surfacing parse failures as JS errors.
fn parse_time(s: &str) -> Result<TimeOfDay, JsValue> {
    s.parse().map_err(|e: slot_engine::SlotError| JsValue::from_str(&e.to_string()))
}

/// Build a booking window from optional overrides (defaults: 08:00-18:00,
/// 30-minute marks).
fn parse_window(
    open: Option<String>,
    close: Option<String>,
    step_minutes: Option<u16>,
) -> Result<BookingWindow, JsValue> {
    let defaults = BookingWindow::default();
    let open = match open {
        Some(s) => parse_time(&s)?,
        None => defaults.open(),
    };
    let close = match close {
        Some(s) => parse_time(&s)?,
        None => defaults.close(),
    };
    let step = step_minutes.unwrap_or(defaults.step_minutes());
    BookingWindow::new(open, close, step).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a JSON array of `{start_time, end_time}` rows into `Vec<Booking>`.
fn parse_bookings_json(json: &str) -> Result<Vec<Booking>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))
}

/// Parse a JSON array of facet definitions, e.g.
/// `[{"name":"focus"},{"name":"goals","rule":"contains"}]`.
fn parse_config_json(json: &str) -> Result<FacetConfig, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid facets JSON: {}", e)))
}

/// Parse a `{category: [values]}` selection object.
fn parse_selection_json(json: &str) -> Result<FilterSelection, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid selection JSON: {}", e)))
}

fn parse_items_json(json: &str) -> Result<Vec<serde_json::Value>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports: availability engine
// ---------------------------------------------------------------------------

/// Generate the day's bookable start marks for a room.
///
/// `bookings_json` must be a JSON array of `{start_time, end_time}` rows with
/// `HH:MM` times. Returns a JSON array of `{time, label, available}` objects
/// in chronological order.
#[wasm_bindgen(js_name = "generateTimeSlots")]
pub fn generate_time_slots(
    bookings_json: &str,
    open: Option<String>,
    close: Option<String>,
    step_minutes: Option<u16>,
) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let window = parse_window(open, close, step_minutes)?;

    let slots = slot_engine::generate_time_slots(&bookings, &window);
    let dtos: Vec<TimeSlotDto> = slots.iter().map(TimeSlotDto::from).collect();
    to_json(&dtos)
}

/// Check whether a candidate `(start, duration)` can be booked.
///
/// Returns `false` for any invalid candidate (bad duration, past closing,
/// conflicting); throws only when an input string cannot be parsed at all.
#[wasm_bindgen(js_name = "isSlotAvailable")]
pub fn is_slot_available(
    start: &str,
    duration_hours: f64,
    bookings_json: &str,
    open: Option<String>,
    close: Option<String>,
) -> Result<bool, JsValue> {
    let start = parse_time(start)?;
    let bookings = parse_bookings_json(bookings_json)?;
    let window = parse_window(open, close, None)?;

    Ok(slot_engine::is_slot_available(
        start,
        duration_hours,
        &bookings,
        &window,
    ))
}

/// End time of a candidate slot as `HH:MM`.
///
/// Throws when the start does not parse or the duration is not a positive
/// half-hour multiple that keeps the end within the same day.
#[wasm_bindgen(js_name = "computeEndTime")]
pub fn compute_end_time(start: &str, duration_hours: f64) -> Result<String, JsValue> {
    let start = parse_time(start)?;
    match slot_engine::compute_end_time(start, duration_hours) {
        Some(end) => Ok(end.to_string()),
        None => Err(JsValue::from_str(&format!(
            "Invalid duration: {} hours",
            duration_hours
        ))),
    }
}

/// Free gaps between a day's bookings.
///
/// Returns a JSON array of `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "freePeriods")]
pub fn free_periods(
    bookings_json: &str,
    open: Option<String>,
    close: Option<String>,
) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let window = parse_window(open, close, None)?;

    let periods = slot_engine::free_periods(&bookings, &window);
    let dtos: Vec<FreePeriodDto> = periods
        .iter()
        .map(|p| FreePeriodDto {
            start: p.start.to_string(),
            end: p.end.to_string(),
            duration_minutes: p.duration_minutes,
        })
        .collect();
    to_json(&dtos)
}

// ---------------------------------------------------------------------------
// WASM exports: facet filter engine
// ---------------------------------------------------------------------------

/// Distinct filter options per facet category.
///
/// `items_json` is a JSON array of objects; `facets_json` is a JSON array of
/// `{name, rule?}` definitions. Returns a `{category: [values]}` JSON object
/// in facet order.
#[wasm_bindgen(js_name = "extractFilterOptions")]
pub fn extract_filter_options(items_json: &str, facets_json: &str) -> Result<String, JsValue> {
    let items = parse_items_json(items_json)?;
    let config = parse_config_json(facets_json)?;

    let mut map = serde_json::Map::new();
    for group in facet_engine::extract_filter_options(&items, &config) {
        map.insert(group.category, serde_json::json!(group.values));
    }
    to_json(&serde_json::Value::Object(map))
}

/// Apply active facet selections to an item collection.
///
/// `selection_json` is a `{category: [values]}` object. Returns the matching
/// items as a JSON array, preserving input order.
#[wasm_bindgen(js_name = "applyFilters")]
pub fn apply_filters(
    items_json: &str,
    facets_json: &str,
    selection_json: &str,
) -> Result<String, JsValue> {
    let items = parse_items_json(items_json)?;
    let config = parse_config_json(facets_json)?;
    let selection = parse_selection_json(selection_json)?;

    let filtered = facet_engine::apply_filters(&items, &config, &selection);
    to_json(&filtered)
}
