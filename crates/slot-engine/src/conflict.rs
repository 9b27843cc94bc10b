//! Detect bookings that overlap a candidate interval.
//!
//! Half-open semantics throughout: a candidate beginning exactly at a
//! booking's end, or ending exactly at its start, is NOT a conflict.

use serde::Serialize;

use crate::booking::Booking;
use crate::time::TimeOfDay;

/// A booking that overlaps the candidate, with the size of the overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub booking: Booking,
    pub overlap_minutes: u16,
}

/// Two half-open intervals overlap iff `s1 < e2 && e1 > s2`.
pub fn overlaps(s1: TimeOfDay, e1: TimeOfDay, s2: TimeOfDay, e2: TimeOfDay) -> bool {
    s1 < e2 && e1 > s2
}

/// Find every well-formed booking overlapping the candidate `[start, end)`.
///
/// The overlap duration is `min(e1, e2) - max(s1, s2)`. Malformed rows
/// (`start_time >= end_time`) are skipped.
pub fn find_conflicts(start: TimeOfDay, end: TimeOfDay, bookings: &[Booking]) -> Vec<Conflict> {
    bookings
        .iter()
        .filter(|b| b.is_well_formed())
        .filter(|b| overlaps(start, end, b.start_time, b.end_time))
        .map(|b| {
            let overlap_start = start.max(b.start_time);
            let overlap_end = end.min(b.end_time);
            Conflict {
                booking: b.clone(),
                overlap_minutes: overlap_end.minutes() - overlap_start.minutes(),
            }
        })
        .collect()
}
