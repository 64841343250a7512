//! Live adapter for the `Clock` port.

use chrono::{Local, NaiveDateTime};

use crate::ports::Clock;

/// Reads the system clock in the local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
