//! The user's selected calendar date.
//!
//! Only month and day drive the lookup: the upstream feed is keyed by
//! calendar date and returns events from many different years. February
//! is counted as 29 days because the feed serves leap-day events.

use chrono::{Datelike, Local};

/// Number of days in `month` (1-12), February counted as 29.
///
/// Out-of-range months fall back to 31 so a malformed value can never
/// make a day unselectable.
pub const fn days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// English display name for `month` (1-12).
const fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// The calendar date currently chosen by the user.
///
/// Stepping methods keep the value well-formed: months wrap 12 to 1 and
/// back, days wrap across month boundaries, and changing month clamps the
/// day to the new month's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySelection {
    month: u32,
    day: u32,
}

impl DaySelection {
    /// Create a selection, clamping both values into range.
    pub const fn new(month: u32, day: u32) -> Self {
        let month = if month < 1 {
            1
        } else if month > 12 {
            12
        } else {
            month
        };
        let max_day = days_in_month(month);
        let day = if day < 1 {
            1
        } else if day > max_day {
            max_day
        } else {
            day
        };
        Self { month, day }
    }

    /// Today's month and day in the local timezone.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(now.month(), now.day())
    }

    /// Calendar month, 1-12.
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Day of month, 1 to [`days_in_month`].
    pub const fn day(self) -> u32 {
        self.day
    }

    /// The following day, wrapping across month and year boundaries.
    pub const fn next_day(self) -> Self {
        if self.day < days_in_month(self.month) {
            Self { month: self.month, day: self.day.saturating_add(1) }
        } else if self.month < 12 {
            Self { month: self.month.saturating_add(1), day: 1 }
        } else {
            Self { month: 1, day: 1 }
        }
    }

    /// The preceding day, wrapping across month and year boundaries.
    pub const fn previous_day(self) -> Self {
        if self.day > 1 {
            Self { month: self.month, day: self.day.saturating_sub(1) }
        } else if self.month > 1 {
            let month = self.month.saturating_sub(1);
            Self { month, day: days_in_month(month) }
        } else {
            Self { month: 12, day: 31 }
        }
    }

    /// Same day in the following month, clamped to the month's length.
    pub const fn next_month(self) -> Self {
        let month = if self.month == 12 { 1 } else { self.month.saturating_add(1) };
        Self::new(month, self.day)
    }

    /// Same day in the preceding month, clamped to the month's length.
    pub const fn previous_month(self) -> Self {
        let month = if self.month == 1 { 12 } else { self.month.saturating_sub(1) };
        Self::new(month, self.day)
    }

    /// Display string in "December 25" form.
    pub fn label(self) -> String {
        format!("{} {}", month_name(self.month), self.day)
    }
}

impl Default for DaySelection {
    fn default() -> Self {
        Self::today()
    }
}
