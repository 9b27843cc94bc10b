//! The daily operating window that bounds bookable times.

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

const DEFAULT_OPEN: TimeOfDay = TimeOfDay::from_minutes(8 * 60);
const DEFAULT_CLOSE: TimeOfDay = TimeOfDay::from_minutes(18 * 60);
const DEFAULT_STEP_MINUTES: u16 = 30;

/// The conference's daily operating interval plus the granularity of
/// bookable start marks.
///
/// Invariants: `open < close`, `step_minutes > 0`. Fields are private so
/// every constructed window honors them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    open: TimeOfDay,
    close: TimeOfDay,
    step_minutes: u16,
}

impl BookingWindow {
    pub fn new(open: TimeOfDay, close: TimeOfDay, step_minutes: u16) -> Result<Self> {
        if open >= close {
            return Err(SlotError::WindowOrder { open, close });
        }
        if step_minutes == 0 {
            return Err(SlotError::ZeroStep);
        }
        Ok(Self {
            open,
            close,
            step_minutes,
        })
    }

    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    pub fn step_minutes(&self) -> u16 {
        self.step_minutes
    }

    /// Whether the half-open interval `[start, end)` fits entirely inside
    /// the window. The close itself is a valid end instant.
    pub fn contains(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start >= self.open && end <= self.close
    }
}

impl Default for BookingWindow {
    /// 08:00–18:00 at half-hour marks.
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN,
            close: DEFAULT_CLOSE,
            step_minutes: DEFAULT_STEP_MINUTES,
        }
    }
}
