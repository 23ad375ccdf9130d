use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::domain::AppleDay;

pub const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid calendar month {0:?}, expected YYYY-MM")]
pub struct ParseMonthError(pub String);

/// The month the calendar grid shows. Set by configuration, not by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self {
            year: 2026,
            month: 1,
        }
    }
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(self) -> u32 {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Blank cells before the 1st in a week starting on Sunday.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn title(self) -> String {
        let name = MONTH_NAMES
            .get(self.month as usize - 1)
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for CalendarMonth {
    type Err = ParseMonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthError(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(err)?;
        let year = year.parse::<i32>().map_err(|_| err())?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: NaiveDate,
    pub item: Option<&'a AppleDay>,
    pub selected: bool,
}

impl DayCell<'_> {
    pub const fn is_enabled(&self) -> bool {
        self.item.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell<'a> {
    Blank,
    Day(DayCell<'a>),
}

/// Day-of-month lookup over the loaded apples for one configured month.
///
/// Built from the list on demand; the list stays the only source of truth.
#[derive(Debug, Clone)]
pub struct CalendarIndex<'a> {
    month: CalendarMonth,
    by_day: BTreeMap<u32, &'a AppleDay>,
    selected: Option<NaiveDate>,
    outside_month: usize,
}

impl<'a> CalendarIndex<'a> {
    pub fn build(items: &'a [AppleDay], month: CalendarMonth, selected: Option<NaiveDate>) -> Self {
        let mut by_day = BTreeMap::new();
        let mut outside_month = 0;

        for item in items {
            if month.contains(item.date) {
                by_day.entry(item.date.day()).or_insert(item);
            } else {
                outside_month += 1;
            }
        }

        Self {
            month,
            by_day,
            selected,
            outside_month,
        }
    }

    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Apples whose dates the grid cannot show.
    pub const fn outside_month(&self) -> usize {
        self.outside_month
    }

    pub fn item_for_day(&self, day: u32) -> Option<&'a AppleDay> {
        self.by_day.get(&day).copied()
    }

    pub fn enabled_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_day.keys().copied()
    }

    pub fn cell(&self, day: u32) -> Option<DayCell<'a>> {
        let date = self.month.date(day)?;
        Some(DayCell {
            day,
            date,
            item: self.item_for_day(day),
            selected: self.selected == Some(date),
        })
    }

    /// Grid cells in reading order, seven per row.
    pub fn cells(&self) -> Vec<CalendarCell<'a>> {
        let blanks = self.month.leading_blanks() as usize;
        let days = self.month.days_in_month();

        std::iter::repeat(CalendarCell::Blank)
            .take(blanks)
            .chain((1..=days).filter_map(|day| self.cell(day).map(CalendarCell::Day)))
            .collect()
    }

    /// Date to select when `day` is activated; disabled days do nothing.
    pub fn activate(&self, day: u32) -> Option<NaiveDate> {
        self.item_for_day(day).map(|item| item.date)
    }
}
