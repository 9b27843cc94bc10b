//! # slot-engine
//!
//! Room-booking availability for a conference venue: half-hour slot
//! generation and candidate-slot conflict detection over a day's existing
//! bookings.
//!
//! Every entry point is a pure function over a caller-supplied snapshot; the
//! engine performs no I/O and holds no state between calls. All interval
//! arithmetic uses half-open `[start, end)` semantics, so a slot starting
//! exactly when a booking ends is available and one starting exactly when a
//! booking starts is not.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{generate_time_slots, is_slot_available, Booking, BookingWindow};
//!
//! let bookings = vec![Booking {
//!     start_time: "10:00".parse().unwrap(),
//!     end_time: "11:00".parse().unwrap(),
//! }];
//! let window = BookingWindow::default(); // 08:00-18:00, 30-minute marks
//!
//! let slots = generate_time_slots(&bookings, &window);
//! let ten = slots.iter().find(|s| s.time.to_string() == "10:00").unwrap();
//! assert!(!ten.available);
//!
//! // Starting exactly when the booking ends is fine.
//! assert!(is_slot_available("11:00".parse().unwrap(), 1.0, &bookings, &window));
//! ```
//!
//! ## Modules
//!
//! - [`time`] — minute-resolution [`TimeOfDay`] with strict `HH:MM[:SS]` parsing
//! - [`window`] — the daily operating interval bounding bookable times
//! - [`booking`] — read-only booking rows from the external data layer
//! - [`slots`] — slot generation and candidate validation
//! - [`conflict`] — half-open interval overlap detection
//! - [`freebusy`] — merged free gaps between bookings
//! - [`error`] — error types

pub mod booking;
pub mod conflict;
pub mod error;
pub mod freebusy;
pub mod slots;
pub mod time;
pub mod window;

pub use booking::Booking;
pub use conflict::{find_conflicts, Conflict};
pub use error::SlotError;
pub use freebusy::{first_free_period, free_periods, FreePeriod};
pub use slots::{
    compute_end_time, duration_to_minutes, generate_time_slots, is_slot_available, TimeSlot,
};
pub use time::TimeOfDay;
pub use window::BookingWindow;
