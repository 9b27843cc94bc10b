//! Booking rows supplied by the external data layer.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// An existing reservation for one room on one date, as read from the
/// backing store. Read-only input to the engine; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl Booking {
    /// Rows must satisfy `start_time < end_time` within a single day.
    /// Rows that don't are skipped by every consumer rather than failing
    /// the whole computation.
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }
}
