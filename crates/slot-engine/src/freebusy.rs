//! Free periods between merged bookings.
//!
//! Sorts bookings by start time, merges overlapping or back-to-back rows,
//! then reports the gaps inside the operating window. Used for the room
//! "at a glance" view next to the slot picker.

use serde::Serialize;

use crate::booking::Booking;
use crate::time::TimeOfDay;
use crate::window::BookingWindow;

/// A maximal free gap inside the operating window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreePeriod {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_minutes: u16,
}

/// Merge overlapping or adjacent bookings, clipped to the window.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
/// Bookings entirely outside the window are discarded.
fn merge_busy_periods(bookings: &[Booking], window: &BookingWindow) -> Vec<(TimeOfDay, TimeOfDay)> {
    let mut intervals: Vec<(TimeOfDay, TimeOfDay)> = bookings
        .iter()
        .filter(|b| b.is_well_formed())
        .filter(|b| b.start_time < window.close() && b.end_time > window.open())
        .map(|b| {
            (
                b.start_time.max(window.open()),
                b.end_time.min(window.close()),
            )
        })
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time, then end time.
    intervals.sort();

    let mut merged: Vec<(TimeOfDay, TimeOfDay)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or back-to-back -- extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// List the free gaps between merged bookings inside the window.
///
/// Returns periods sorted by start time. An empty booking list yields one
/// period spanning the whole window.
pub fn free_periods(bookings: &[Booking], window: &BookingWindow) -> Vec<FreePeriod> {
    let merged = merge_busy_periods(bookings, window);

    let mut periods = Vec::new();
    let mut cursor = window.open();

    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            periods.push(FreePeriod {
                start: cursor,
                end: *busy_start,
                duration_minutes: busy_start.minutes() - cursor.minutes(),
            });
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing gap after the last booking.
    if cursor < window.close() {
        periods.push(FreePeriod {
            start: cursor,
            end: window.close(),
            duration_minutes: window.close().minutes() - cursor.minutes(),
        });
    }

    periods
}

/// First free period of at least `min_duration_minutes`, if any.
pub fn first_free_period(
    bookings: &[Booking],
    window: &BookingWindow,
    min_duration_minutes: u16,
) -> Option<FreePeriod> {
    free_periods(bookings, window)
        .into_iter()
        .find(|p| p.duration_minutes >= min_duration_minutes)
}
