//! Clock port for timestamps embedded in banners.

use chrono::NaiveDateTime;

/// Source of the current local date and time.
pub trait Clock {
    /// The current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}
