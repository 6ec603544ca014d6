//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait that allows injecting fixed clocks
//! in tests while using the local wall clock in production. Backup file
//! names are derived from it.

use chrono::{Local, NaiveDateTime};

/// Format of the timestamp embedded in backup file names.
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Abstraction over local wall-clock time.
///
/// # Example
///
/// ```
/// use hyprmax::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let stamp = clock.stamp();
/// assert_eq!(stamp.len(), "20240131_235959".len());
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current time as `YYYYMMDD_HHMMSS`.
    fn stamp(&self) -> String {
        self.now().format(STAMP_FORMAT).to_string()
    }
}

/// Production clock using the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
