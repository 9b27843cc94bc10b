//! Tests for half-open interval conflict detection.

use slot_engine::{find_conflicts, Booking, TimeOfDay};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn booking(start: &str, end: &str) -> Booking {
    Booking {
        start_time: t(start),
        end_time: t(end),
    }
}

// ── Boundary instants are not conflicts ─────────────────────────────────────

#[test]
fn adjacent_intervals_do_not_conflict() {
    let bookings = vec![booking("09:00", "10:00")];

    // Candidate starts exactly when the booking ends.
    assert!(find_conflicts(t("10:00"), t("11:00"), &bookings).is_empty());
    // Candidate ends exactly when the booking starts.
    assert!(find_conflicts(t("08:00"), t("09:00"), &bookings).is_empty());
}

#[test]
fn one_minute_of_overlap_is_a_conflict() {
    let bookings = vec![booking("09:00", "10:00")];

    let conflicts = find_conflicts(t("09:59"), t("11:00"), &bookings);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 1);
}

// ── Overlap shapes ──────────────────────────────────────────────────────────

#[test]
fn contained_candidate_reports_full_overlap() {
    let bookings = vec![booking("09:00", "12:00")];

    let conflicts = find_conflicts(t("10:00"), t("11:00"), &bookings);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn candidate_containing_booking_reports_booking_length() {
    let bookings = vec![booking("10:00", "10:30")];

    let conflicts = find_conflicts(t("09:00"), t("12:00"), &bookings);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[0].booking, bookings[0]);
}

#[test]
fn multiple_overlapping_bookings_all_reported() {
    let bookings = vec![
        booking("09:00", "10:00"),
        booking("09:30", "10:30"),
        booking("14:00", "15:00"), // clear of the candidate
    ];

    let conflicts = find_conflicts(t("09:45"), t("11:00"), &bookings);
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].overlap_minutes, 15);
    assert_eq!(conflicts[1].overlap_minutes, 45);
}

#[test]
fn malformed_rows_never_conflict() {
    let bookings = vec![booking("12:00", "09:00")];

    assert!(find_conflicts(t("08:00"), t("18:00"), &bookings).is_empty());
}

#[test]
fn no_bookings_no_conflicts() {
    assert!(find_conflicts(t("08:00"), t("18:00"), &[]).is_empty());
}
