//! Error types for slot-engine operations.

use thiserror::Error;

use crate::time::TimeOfDay;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: '{0}' (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    #[error("Booking window open {open} must be before close {close}")]
    WindowOrder { open: TimeOfDay, close: TimeOfDay },

    #[error("Slot step must be a positive number of minutes")]
    ZeroStep,
}

pub type Result<T> = std::result::Result<T, SlotError>;
