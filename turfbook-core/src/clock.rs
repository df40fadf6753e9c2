//! Wall-clock time source.
//!
//! The cutoff and expiry rules compare reservation start times against
//! "now". Injecting the clock keeps those rules testable with fixed times.

use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system clock. Reservation dates and times are timezone-naive
/// wall-clock values, so local time is the right frame to compare against.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
