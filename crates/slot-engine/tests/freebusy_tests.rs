//! Tests for free-period computation between merged bookings.

use slot_engine::{first_free_period, free_periods, Booking, BookingWindow, TimeOfDay};

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

#[test]
fn single_booking_produces_two_gaps() {
    // Window 08:00-18:00, booking 10:00-11:00.
    // Free: 08:00-10:00 (120 min), 11:00-18:00 (420 min).
    let periods = free_periods(&[booking("10:00", "11:00")], &BookingWindow::default());

    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].start, t("08:00"));
    assert_eq!(periods[0].end, t("10:00"));
    assert_eq!(periods[0].duration_minutes, 120);
    assert_eq!(periods[1].start, t("11:00"));
    assert_eq!(periods[1].end, t("18:00"));
    assert_eq!(periods[1].duration_minutes, 420);
}

#[test]
fn overlapping_bookings_merge_before_gap_computation() {
    // 10:00-11:30 and 11:00-12:00 merge into one busy block 10:00-12:00.
    let bookings = vec![booking("10:00", "11:30"), booking("11:00", "12:00")];
    let periods = free_periods(&bookings, &BookingWindow::default());

    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].end, t("10:00"));
    assert_eq!(periods[1].start, t("12:00"));
}

#[test]
fn back_to_back_bookings_leave_no_gap_between() {
    let bookings = vec![booking("09:00", "10:00"), booking("10:00", "11:00")];
    let periods = free_periods(&bookings, &BookingWindow::default());

    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].end, t("09:00"));
    assert_eq!(periods[1].start, t("11:00"));
}

#[test]
fn no_bookings_whole_window_is_free() {
    let periods = free_periods(&[], &BookingWindow::default());

    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].start, t("08:00"));
    assert_eq!(periods[0].end, t("18:00"));
    assert_eq!(periods[0].duration_minutes, 600);
}

#[test]
fn bookings_outside_window_are_clipped_or_ignored() {
    let bookings = vec![
        booking("06:00", "09:00"), // starts before opening, clipped
        booking("17:30", "19:00"), // ends after closing, clipped
        booking("19:00", "20:00"), // entirely outside, ignored
    ];
    let periods = free_periods(&bookings, &BookingWindow::default());

    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].start, t("09:00"));
    assert_eq!(periods[0].end, t("17:30"));
    assert_eq!(periods[0].duration_minutes, 510);
}

#[test]
fn fully_booked_day_has_no_free_periods() {
    let periods = free_periods(&[booking("08:00", "18:00")], &BookingWindow::default());
    assert!(periods.is_empty());
}

#[test]
fn first_free_period_skips_short_gaps() {
    // Gaps: 08:00-08:15 (15 min), then 12:00-18:00 (360 min).
    let bookings = vec![booking("08:15", "09:00"), booking("09:00", "12:00")];

    let period = first_free_period(&bookings, &BookingWindow::default(), 60).unwrap();
    assert_eq!(period.start, t("12:00"));
    assert_eq!(period.duration_minutes, 360);
}

#[test]
fn first_free_period_none_when_no_gap_long_enough() {
    let bookings = vec![booking("08:00", "17:45")];
    assert!(first_free_period(&bookings, &BookingWindow::default(), 30).is_none());
}
