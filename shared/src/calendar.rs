//! Calendar arithmetic shared by the store and the calendar view.
//!
//! Weekdays are numbered from Sunday (0) to Saturday (6), matching the column
//! order of the month grid.

use chrono::{Datelike, NaiveDate};

/// Column headers for the month grid, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month, or 0 for a month outside 1..=12
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// Get the weekday of the 1st of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Parse the calendar date at the start of a `YYYY-MM-DD` or RFC 3339 string
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next()?;
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

/// Extract the day of month from a stored entry date.
///
/// Reads the calendar date literally rather than converting through a
/// timezone, so `2024-03-05` is always day 5.
pub fn day_of_month(date_str: &str) -> Option<u32> {
    parse_date(date_str).map(|date| date.day())
}

/// The month currently shown by the calendar view.
///
/// Always holds a valid month (1..=12); navigation rolls the year over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Like `new`, but pulls an out-of-range month back into 1..=12
    pub fn clamped(year: i32, month: u32) -> Self {
        Self { year, month: month.clamp(1, 12) }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Navigate to the previous month
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Navigate to the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(&self) -> u32 {
        first_weekday_of_month(self.year, self.month)
    }

    /// ISO date (YYYY-MM-DD) for a day of this month
    pub fn date_for_day(&self, day: u32) -> Option<String> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .map(|date| date.format("%Y-%m-%d").to_string())
    }

    /// Short weekday name for a day of this month
    pub fn weekday_label(&self, day: u32) -> Option<&'static str> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .map(|date| WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize])
    }

    /// Header label, e.g. "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// A single cell in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st so it lands under the right weekday
    Blank,
    /// A real day of the month
    Day(u32),
}

/// Geometry of one month laid out in Sunday-first weekly rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub leading_blanks: u32,
    pub days_in_month: u32,
}

impl MonthGrid {
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            leading_blanks: cursor.first_weekday(),
            days_in_month: cursor.days_in_month(),
        }
    }

    /// Leading blanks followed by every day of the month, in render order
    pub fn cells(&self) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity((self.leading_blanks + self.days_in_month) as usize);
        cells.extend((0..self.leading_blanks).map(|_| GridCell::Blank));
        cells.extend((1..=self.days_in_month).map(GridCell::Day));
        cells
    }

    /// Number of weekly rows the grid spans
    pub fn week_rows(&self) -> u32 {
        (self.leading_blanks + self.days_in_month).div_ceil(7)
    }
}
