use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{HAAB_MONTHS, HAAB_MONTH_DAYS, HAAB_YEAR_DAYS, WAYEB_DAYS, WAYEB_INDEX};
use crate::{Correction, Digit, HaabMonth, LongCount};

/// Invalid arguments to [`MayaCalendar::to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 0-18)")]
    InvalidMonth(i64),

    #[error("Invalid day {day} for month {month}")]
    InvalidDay { month: i64, day: i64 },

    #[error("Invalid era: {0} (must be 0-19)")]
    InvalidEra(i64),
}

/// Calendar-style queries over Gregorian dates, read through the Long Count
/// with a fixed correlation.
///
/// Years are Tun, months Winal and days K'in, except where a method says it
/// counts in the 365-day Haab'. The era is the B'ak'tun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MayaCalendar {
    pub correction: Correction,
}

impl MayaCalendar {
    pub fn new(correction: impl Into<Correction>) -> Self {
        Self {
            correction: correction.into(),
        }
    }

    /// Long Count of a Gregorian date under this calendar's correlation
    pub fn long_count(&self, date: NaiveDate) -> LongCount {
        LongCount::from_date(date, self.correction)
    }

    /// Moves `months` Haab' months, see [`LongCount::add_months`]
    pub fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        self.long_count(date).add_months(months).date()
    }

    /// Moves `years` 365-day years
    pub fn add_years(&self, date: NaiveDate, years: i64) -> NaiveDate {
        self.long_count(date).add_years(years).date()
    }

    /// K'in of the date
    pub fn day_of_month(&self, date: NaiveDate) -> u32 {
        self.long_count(date).kin()
    }

    /// Zero-based day of the Haab' year, `month * 20 + day`.
    ///
    /// This is the Haab' position, not the Winal-based count
    /// (`winal * 20`, or `360 + haab_day` from Winal 17) that older
    /// implementations return; that count ignores the day and repeats every Tun.
    pub fn day_of_year(&self, date: NaiveDate) -> u32 {
        self.long_count(date).haab().day_of_year()
    }

    /// Days in a Haab' month: 5 in Wayeb' (month 18), 20 otherwise
    pub const fn days_in_month(&self, month: u8) -> i64 {
        if month == WAYEB_INDEX {
            WAYEB_DAYS
        } else {
            HAAB_MONTH_DAYS
        }
    }

    pub const fn days_in_year(&self) -> i64 {
        HAAB_YEAR_DAYS
    }

    pub const fn months_in_year(&self) -> u8 {
        HAAB_MONTHS
    }

    /// B'ak'tun of the date
    pub fn era(&self, date: NaiveDate) -> u32 {
        self.long_count(date).baktun()
    }

    /// Winal of the date
    pub fn month(&self, date: NaiveDate) -> u32 {
        self.long_count(date).winal()
    }

    /// Tun of the date
    pub fn year(&self, date: NaiveDate) -> u32 {
        self.long_count(date).tun()
    }

    pub const fn is_leap_year(&self, _year: i64) -> bool {
        false
    }

    pub const fn is_leap_month(&self, _year: i64, _month: u8) -> bool {
        false
    }

    pub const fn is_leap_day(&self, _year: i64, _month: u8, _day: u8) -> bool {
        false
    }

    /// Eras the calendar accepts: every B'ak'tun value
    pub fn eras(&self) -> impl Iterator<Item = u32> {
        0..=Digit::Baktun.max()
    }

    /// Gregorian date of `year` Haab' years, `month` months and `day` days
    /// after `era`.0.0.0.0.
    ///
    /// # Errors
    /// Returns `CalendarError` if the month is outside 0..=18, the day is
    /// outside 0..=19 (0..=4 in Wayeb') or the era is outside 0..=19.
    pub fn to_date(&self, year: i64, month: i64, day: i64, era: i64) -> Result<NaiveDate, CalendarError> {
        let month_index = u8::try_from(month)
            .ok()
            .filter(|m| *m < HAAB_MONTHS)
            .ok_or(CalendarError::InvalidMonth(month))?;
        let month_days = HaabMonth::from_index(month_index).days();
        if !(0..month_days).contains(&day) {
            return Err(CalendarError::InvalidDay { month, day });
        }

        let mut start = LongCount::before_time(self.correction);
        start
            .set_baktun(era)
            .map_err(|_| CalendarError::InvalidEra(era))?;

        let days = year
            .saturating_mul(HAAB_YEAR_DAYS)
            .saturating_add(month * HAAB_MONTH_DAYS + day);
        Ok(start.add_days(days).date())
    }

    /// [`to_date`](Self::to_date) in B'ak'tun 13
    ///
    /// # Errors
    /// Same as [`to_date`](Self::to_date).
    pub fn to_date_current_era(&self, year: i64, month: i64, day: i64) -> Result<NaiveDate, CalendarError> {
        self.to_date(year, month, day, 13)
    }
}
