//! Bookable start marks and candidate-slot validation.
//!
//! Slot generation and the candidate check share the same half-open interval
//! rule via [`crate::conflict`], so the two can never disagree at a boundary
//! instant.

use serde::Serialize;

use crate::booking::Booking;
use crate::conflict;
use crate::time::TimeOfDay;
use crate::window::BookingWindow;

/// A discrete bookable start mark within the operating window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub time: TimeOfDay,
    /// 12-hour display form, e.g. `8:30 AM`.
    pub label: String,
    pub available: bool,
}

/// Convert a booking duration in hours to whole minutes.
///
/// Durations must be positive multiples of half an hour and fit within one
/// day; anything else (zero, negative, NaN, quarter hours) returns `None`.
pub fn duration_to_minutes(duration_hours: f64) -> Option<u16> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return None;
    }
    let half_steps = duration_hours * 2.0;
    if (half_steps - half_steps.round()).abs() > 1e-9 {
        return None;
    }
    let half_steps = half_steps.round();
    if !(1.0..=48.0).contains(&half_steps) {
        return None;
    }
    Some(half_steps as u16 * 30)
}

/// Produce every step mark from the window's open (inclusive) to its close
/// (exclusive), in chronological order.
///
/// A mark is unavailable iff it falls inside `[start_time, end_time)` of any
/// well-formed booking; a mark exactly at a booking's end is available.
/// Deterministic for identical input.
pub fn generate_time_slots(bookings: &[Booking], window: &BookingWindow) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut mark = window.open();

    while mark < window.close() {
        let busy = bookings
            .iter()
            .filter(|b| b.is_well_formed())
            .any(|b| b.start_time <= mark && mark < b.end_time);
        slots.push(TimeSlot {
            time: mark,
            label: mark.label_12h(),
            available: !busy,
        });
        mark = match mark.checked_add_minutes(window.step_minutes()) {
            Some(next) => next,
            None => break,
        };
    }

    slots
}

/// Whether a candidate `(start, duration)` can be booked.
///
/// Returns `false` -- never an error -- when the duration is not a positive
/// half-hour multiple, when the slot would start before opening or end after
/// closing (ending exactly at close is allowed), or when the candidate
/// overlaps any existing booking.
///
/// The check runs against a possibly stale snapshot of bookings. It only
/// stops a single user from picking a slot already known to conflict; the
/// persistence layer must re-validate when the reservation is committed.
pub fn is_slot_available(
    start: TimeOfDay,
    duration_hours: f64,
    bookings: &[Booking],
    window: &BookingWindow,
) -> bool {
    let Some(minutes) = duration_to_minutes(duration_hours) else {
        return false;
    };
    let Some(end) = start.checked_add_minutes(minutes) else {
        return false;
    };
    if !window.contains(start, end) {
        return false;
    }
    conflict::find_conflicts(start, end, bookings).is_empty()
}

/// End instant of a candidate slot: `start + duration_hours * 60` minutes.
///
/// `None` when the duration is not a positive half-hour multiple or the end
/// would pass midnight.
pub fn compute_end_time(start: TimeOfDay, duration_hours: f64) -> Option<TimeOfDay> {
    duration_to_minutes(duration_hours).and_then(|m| start.checked_add_minutes(m))
}
