//! Maya Long Count dates and their Gregorian, Tzolk'in and Haab' projections.
//!
//! ```
//! use mayan_date::{Correlation, LongCount};
//!
//! let date = LongCount::from_gregorian(2012, 12, 21, Correlation::Gmt);
//! assert_eq!(date.to_string(), "13.0.0.0.0");
//! assert_eq!(date.calendar_round(), "4 Ajaw, 3 K'ank'in, G9");
//! ```

mod calendar;
mod consts;
mod correction;
mod cycles;
mod gregorian;
mod prelude;
mod types;

pub use calendar::{CalendarError, MayaCalendar};
pub use consts::*;
pub use correction::{Correction, Correlation, describe};
pub use cycles::{
    Haab, HaabMonth, LordOfTheNight, Tzolkin, TzolkinDay, haab_day, haab_month_index,
    tzolkin_day, tzolkin_number,
};
pub use gregorian::{
    date_to_jdn, gregorian_to_jdn, jdn_to_date, jdn_to_gregorian, jdn_to_gregorian_f64,
};
pub use types::{Digit, DomainError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;

/// A Maya Long Count date: nine place-value digits counting days since the
/// creation date 0.0.0.0.0, plus the correlation used to project it onto the
/// Gregorian calendar.
///
/// The all-zero value doubles as the "before time" sentinel that negative
/// day counts clamp to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "LongCountRepr", into = "LongCountRepr")]
pub struct LongCount {
    /// Indexed by `Digit::index`, K'in first
    digits: [u32; DIGIT_COUNT],
    correction: Correction,
}

/// Error parsing a Long Count or a correction from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "A date string must consist of at least {} numbers, found {found} in '{input}'",
        MIN_COMPONENTS
    )]
    TooFewComponents { input: String, found: usize },

    #[error(
        "A date string may consist of at most {} numbers, found {found} in '{input}'",
        DIGIT_COUNT
    )]
    TooManyComponents { input: String, found: usize },

    #[error("Invalid date string ('{0}')")]
    InvalidDateString(String),

    /// A component parsed but is out of range for its place.
    #[error("Invalid date string ('{input}')")]
    Digit {
        input: String,
        #[source]
        source: DomainError,
    },

    #[error("Invalid correction: {0}")]
    InvalidCorrection(String),
}

impl LongCount {
    /// Creates a date from the five conventional places, GMT correlation.
    ///
    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if any place is out of range.
    pub fn new(baktun: i64, katun: i64, tun: i64, winal: i64, kin: i64) -> Result<Self, DomainError> {
        Self::from_digits([0, 0, 0, 0, baktun, katun, tun, winal, kin], Correction::GMT)
    }

    /// Creates a date from all nine places, highest (Alautun) first.
    ///
    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if any place is out of range.
    pub fn from_digits(
        digits: [i64; DIGIT_COUNT],
        correction: impl Into<Correction>,
    ) -> Result<Self, DomainError> {
        let mut date = Self {
            digits: [0; DIGIT_COUNT],
            correction: correction.into(),
        };
        for (digit, value) in Digit::ALL.iter().rev().zip(digits) {
            date.set_digit(*digit, value)?;
        }
        Ok(date)
    }

    /// The all-zero "before time" date with the given correlation
    pub fn before_time(correction: impl Into<Correction>) -> Self {
        Self {
            digits: [0; DIGIT_COUNT],
            correction: correction.into(),
        }
    }

    /// Creates a date `days` after 0.0.0.0.0.
    ///
    /// Negative day counts clamp to the "before time" date.
    pub fn from_day_count(days: i64, correction: impl Into<Correction>) -> Self {
        let correction = correction.into();
        if days < 0 {
            tracing::debug!(days, "negative day count, clamping to before time");
            return Self::before_time(correction);
        }
        Self {
            digits: decompose(days),
            correction,
        }
    }

    /// Creates the date falling on a proleptic Gregorian day.
    pub fn from_gregorian(year: i64, month: i64, day: i64, correction: impl Into<Correction>) -> Self {
        let correction = correction.into();
        Self::from_day_count(
            gregorian_to_jdn(year, month, day).saturating_sub(correction.days()),
            correction,
        )
    }

    /// Creates the date falling on a `NaiveDate`.
    pub fn from_date(date: NaiveDate, correction: impl Into<Correction>) -> Self {
        let correction = correction.into();
        Self::from_day_count(date_to_jdn(date).saturating_sub(correction.days()), correction)
    }

    /// Parses a dotted Long Count of 5 to 9 components, highest place first.
    /// Missing high places are zero, so `9.12.2.0.16` is B'ak'tun 9.
    ///
    /// # Errors
    /// Returns `ParseError` if there are too few or too many components, a
    /// component is not an integer, or a component is out of range.
    pub fn parse_with_correction(s: &str, correction: impl Into<Correction>) -> Result<Self, ParseError> {
        let parts: Vec<&str> = s.split(DIGIT_SEPARATOR).map(str::trim).collect();
        if parts.len() < MIN_COMPONENTS {
            return Err(ParseError::TooFewComponents {
                input: s.to_owned(),
                found: parts.len(),
            });
        }
        if parts.len() > DIGIT_COUNT {
            return Err(ParseError::TooManyComponents {
                input: s.to_owned(),
                found: parts.len(),
            });
        }

        let padded: Vec<&str> = iter::repeat_n("0", DIGIT_COUNT - parts.len())
            .chain(parts)
            .collect();
        tracing::trace!(input = s, padded = %padded.join("."), "parsing long count");

        let mut values = [0_i64; DIGIT_COUNT];
        for (value, part) in values.iter_mut().zip(&padded) {
            *value = part
                .parse()
                .map_err(|_| ParseError::InvalidDateString(s.to_owned()))?;
        }

        Self::from_digits(values, correction).map_err(|source| ParseError::Digit {
            input: s.to_owned(),
            source,
        })
    }

    /// Value of one place
    #[inline]
    pub const fn digit(&self, digit: Digit) -> u32 {
        self.digits[digit.index()]
    }

    /// Sets one place.
    ///
    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` and leaves the date unchanged if
    /// `value` is out of range for the place.
    pub fn set_digit(&mut self, digit: Digit, value: i64) -> Result<(), DomainError> {
        self.digits[digit.index()] = digit.check(value)?;
        Ok(())
    }

    pub const fn kin(&self) -> u32 {
        self.digit(Digit::Kin)
    }

    pub const fn winal(&self) -> u32 {
        self.digit(Digit::Winal)
    }

    /// Alternative spelling of [`winal`](Self::winal)
    pub const fn uinal(&self) -> u32 {
        self.winal()
    }

    pub const fn tun(&self) -> u32 {
        self.digit(Digit::Tun)
    }

    pub const fn katun(&self) -> u32 {
        self.digit(Digit::Katun)
    }

    pub const fn baktun(&self) -> u32 {
        self.digit(Digit::Baktun)
    }

    pub const fn piktun(&self) -> u32 {
        self.digit(Digit::Piktun)
    }

    pub const fn kalabtun(&self) -> u32 {
        self.digit(Digit::Kalabtun)
    }

    pub const fn kinchiltun(&self) -> u32 {
        self.digit(Digit::Kinchiltun)
    }

    pub const fn alautun(&self) -> u32 {
        self.digit(Digit::Alautun)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_kin(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Kin, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=17.
    pub fn set_winal(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Winal, value)
    }

    /// Alternative spelling of [`set_winal`](Self::set_winal)
    ///
    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=17.
    pub fn set_uinal(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_winal(value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_tun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Tun, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_katun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Katun, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_baktun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Baktun, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_piktun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Piktun, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_kalabtun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Kalabtun, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_kinchiltun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Kinchiltun, value)
    }

    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if `value` is outside 0..=19.
    pub fn set_alautun(&mut self, value: i64) -> Result<(), DomainError> {
        self.set_digit(Digit::Alautun, value)
    }

    /// Days since 0.0.0.0.0
    pub fn jdn(&self) -> i64 {
        Digit::ALL
            .iter()
            .map(|digit| i64::from(self.digit(*digit)) * digit.place_value())
            .sum()
    }

    /// Replaces every place with the decomposition of `days`.
    ///
    /// Alautun absorbs any carry, so it can exceed 19 for very large counts.
    /// Negative counts give the "before time" date.
    pub fn set_jdn(&mut self, days: i64) {
        self.digits = decompose(days.max(0));
    }

    pub const fn correction(&self) -> Correction {
        self.correction
    }

    /// Replaces the correlation; the places are unchanged.
    pub fn set_correction(&mut self, correction: impl Into<Correction>) {
        self.correction = correction.into();
    }

    /// Returns a copy with another correlation
    #[must_use]
    pub fn with_correction(mut self, correction: impl Into<Correction>) -> Self {
        self.set_correction(correction);
        self
    }

    /// Display name of the correlation, see [`describe`]
    pub fn correction_name(&self) -> String {
        self.correction.name()
    }

    /// True for the all-zero "before time" date
    pub fn is_before_time(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// Clears every place, keeping the correlation
    pub fn reset_to_before_time(&mut self) {
        self.digits = [0; DIGIT_COUNT];
    }

    /// Date `days` later (or earlier when negative)
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_day_count(self.jdn().saturating_add(days), self.correction)
    }

    /// Steps `months` Haab' months forward or backward from the current
    /// Haab' month, counting 20 days per month and 5 for Wayeb'.
    #[must_use]
    pub fn add_months(&self, months: i32) -> Self {
        let cycles = i64::from(months / i32::from(HAAB_MONTHS));
        let mut delta = cycles * HAAB_YEAR_DAYS;
        let mut month = self.haab_month();
        let rest = months % i32::from(HAAB_MONTHS);
        if rest < 0 {
            for _ in rest..0 {
                delta -= month.days();
                month = HaabMonth::from_index(month.index() + HAAB_MONTHS - 1);
            }
        } else {
            for _ in 0..rest {
                delta += month.days();
                month = HaabMonth::from_index(month.index() + 1);
            }
        }
        self.add_days(delta)
    }

    /// Date `years * 365` days later; there are no leap days.
    #[must_use]
    pub fn add_years(&self, years: i64) -> Self {
        self.add_days(years.saturating_mul(HAAB_YEAR_DAYS))
    }

    /// Julian Day Number of the date under its correlation, saturating at
    /// the `i64` bounds
    pub fn julian_day(&self) -> i64 {
        self.jdn().saturating_add(self.correction.days())
    }

    /// Proleptic Gregorian `(year, month, day)`
    pub fn gregorian(&self) -> (i64, i64, i64) {
        jdn_to_gregorian(self.julian_day())
    }

    pub fn year(&self) -> i64 {
        self.gregorian().0
    }

    pub fn month(&self) -> i64 {
        self.gregorian().1
    }

    pub fn day(&self) -> i64 {
        self.gregorian().2
    }

    /// Gregorian date, saturated to `chrono`'s supported range
    pub fn date(&self) -> NaiveDate {
        jdn_to_date(self.julian_day())
    }

    pub fn tzolkin(&self) -> Tzolkin {
        Tzolkin::from_day_count(self.jdn())
    }

    /// Tzolk'in number, 1..=13
    pub fn tzolkin_number(&self) -> u8 {
        tzolkin_number(self.jdn())
    }

    pub fn tzolkin_day(&self) -> TzolkinDay {
        tzolkin_day(self.jdn())
    }

    pub fn haab(&self) -> Haab {
        Haab::from_day_count(self.jdn())
    }

    /// Haab' month index, 0..=18
    pub fn haab_month_index(&self) -> u8 {
        haab_month_index(self.jdn())
    }

    pub fn haab_month(&self) -> HaabMonth {
        HaabMonth::from_index(self.haab_month_index())
    }

    pub fn haab_day(&self) -> u8 {
        haab_day(self.jdn())
    }

    pub const fn lord_of_the_night(&self) -> LordOfTheNight {
        LordOfTheNight::new(self.winal(), self.kin())
    }

    /// Tzolk'in, Haab' and Lord of the Night, e.g. `4 Ajaw, 3 K'ank'in, G9`
    pub fn calendar_round(&self) -> String {
        format!(
            "{}, {}, {}",
            self.tzolkin(),
            self.haab(),
            self.lord_of_the_night()
        )
    }

    /// All nine places, Alautun first
    pub fn to_string_long(&self) -> String {
        Digit::ALL
            .iter()
            .rev()
            .map(|digit| self.digit(*digit).to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Splits a non-negative day count into places, highest first.
fn decompose(days: i64) -> [u32; DIGIT_COUNT] {
    let mut digits = [0; DIGIT_COUNT];
    let mut rest = days;
    for digit in Digit::ALL.iter().rev() {
        let place = digit.place_value();
        // below Alautun the quotient is < 20; Alautun is at most i64::MAX / 23_040_000_000
        digits[digit.index()] = u32::try_from(rest / place).unwrap_or(u32::MAX);
        rest %= place;
    }
    digits
}

/// Conventional five-place form, `B'ak'tun.K'atun.Tun.Winal.K'in`
impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun(),
            self.katun(),
            self.tun(),
            self.winal(),
            self.kin()
        )
    }
}

impl FromStr for LongCount {
    type Err = ParseError;

    /// Parses with the GMT correlation, see [`LongCount::parse_with_correction`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_correction(s, Correction::GMT)
    }
}

impl PartialOrd for LongCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LongCount {
    fn cmp(&self, other: &Self) -> Ordering {
        // Day count first, correlation only breaks ties.
        match self.jdn().cmp(&other.jdn()) {
            Ordering::Equal => self.correction.cmp(&other.correction),
            ord => ord,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct LongCountRepr {
    date: String,
    correction: Correction,
}

impl TryFrom<LongCountRepr> for LongCount {
    type Error = ParseError;

    fn try_from(repr: LongCountRepr) -> Result<Self, Self::Error> {
        Self::parse_with_correction(&repr.date, repr.correction)
    }
}

impl From<LongCount> for LongCountRepr {
    fn from(date: LongCount) -> Self {
        Self {
            date: date.to_string_long(),
            correction: date.correction,
        }
    }
}
