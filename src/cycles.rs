//! Tzolk'in, Haab' and Lords of the Night, derived from a Long Count day number.
//!
//! Every function here takes the raw day count and normalizes it itself, so
//! negative inputs are accepted.

use serde::{Deserialize, Serialize};

use crate::consts::{
    HAAB_EPOCH_OFFSET, HAAB_MONTH_DAYS, HAAB_MONTH_WRAP, HAAB_YEAR_DAYS, LORDS_OF_THE_NIGHT,
    TZOLKIN_EPOCH_OFFSET, TZOLKIN_DAY_SIGNS, TZOLKIN_NUMBERS, WAYEB_DAYS, WAYEB_INDEX,
};
use crate::prelude::*;

/// The twenty named days of the Tzolk'in, Imix' first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum TzolkinDay {
    #[display(fmt = "Imix'")]
    Imix,
    #[display(fmt = "Ik'")]
    Ik,
    #[display(fmt = "Ak'b'al")]
    Akbal,
    #[display(fmt = "K'an")]
    Kan,
    #[display(fmt = "Chikchan")]
    Chikchan,
    #[display(fmt = "Kimi")]
    Kimi,
    #[display(fmt = "Manik'")]
    Manik,
    #[display(fmt = "Lamat")]
    Lamat,
    #[display(fmt = "Muluk")]
    Muluk,
    #[display(fmt = "Ok")]
    Ok,
    #[display(fmt = "Chuwen")]
    Chuwen,
    #[display(fmt = "Eb'")]
    Eb,
    #[display(fmt = "B'en")]
    Ben,
    #[display(fmt = "Ix")]
    Ix,
    #[display(fmt = "Men")]
    Men,
    #[display(fmt = "K'ib'")]
    Kib,
    #[display(fmt = "Kab'an")]
    Kaban,
    #[display(fmt = "Etz'nab'")]
    Etznab,
    #[display(fmt = "Kawak")]
    Kawak,
    #[display(fmt = "Ajaw")]
    Ajaw,
}

impl TzolkinDay {
    pub const ALL: [Self; 20] = [
        Self::Imix,
        Self::Ik,
        Self::Akbal,
        Self::Kan,
        Self::Chikchan,
        Self::Kimi,
        Self::Manik,
        Self::Lamat,
        Self::Muluk,
        Self::Ok,
        Self::Chuwen,
        Self::Eb,
        Self::Ben,
        Self::Ix,
        Self::Men,
        Self::Kib,
        Self::Kaban,
        Self::Etznab,
        Self::Kawak,
        Self::Ajaw,
    ];

    /// Day sign for a cycle position where 0 is Ajaw and 1 is Imix'
    pub const fn from_cycle_index(index: usize) -> Self {
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The nineteen Haab' months, Wayeb' last
///
/// Names use the conventional spellings `Yaxk'in` and `Muwan`, without the
/// trailing apostrophe some older tables print (`Yaxk'in'`, `Muwan'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum HaabMonth {
    #[display(fmt = "Pop")]
    Pop,
    #[display(fmt = "Wo'")]
    Wo,
    #[display(fmt = "Sip")]
    Sip,
    #[display(fmt = "Sotz'")]
    Sotz,
    #[display(fmt = "Sek")]
    Sek,
    #[display(fmt = "Xul")]
    Xul,
    #[display(fmt = "Yaxk'in")]
    Yaxkin,
    #[display(fmt = "Mol")]
    Mol,
    #[display(fmt = "Ch'en")]
    Chen,
    #[display(fmt = "Yax")]
    Yax,
    #[display(fmt = "Sak'")]
    Sak,
    #[display(fmt = "Keh")]
    Keh,
    #[display(fmt = "Mak")]
    Mak,
    #[display(fmt = "K'ank'in")]
    Kankin,
    #[display(fmt = "Muwan")]
    Muwan,
    #[display(fmt = "Pax")]
    Pax,
    #[display(fmt = "K'ayab")]
    Kayab,
    #[display(fmt = "Kumk'u")]
    Kumku,
    #[display(fmt = "Wayeb'")]
    Wayeb,
}

impl HaabMonth {
    pub const ALL: [Self; 19] = [
        Self::Pop,
        Self::Wo,
        Self::Sip,
        Self::Sotz,
        Self::Sek,
        Self::Xul,
        Self::Yaxkin,
        Self::Mol,
        Self::Chen,
        Self::Yax,
        Self::Sak,
        Self::Keh,
        Self::Mak,
        Self::Kankin,
        Self::Muwan,
        Self::Pax,
        Self::Kayab,
        Self::Kumku,
        Self::Wayeb,
    ];

    /// Zero-based position in the year (Pop is 0, Wayeb' is 18)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Month at `index`, wrapping past Wayeb'
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[index as usize % Self::ALL.len()]
    }

    /// 5 for Wayeb', 20 for every other month
    pub const fn days(self) -> i64 {
        if self.index() == WAYEB_INDEX {
            WAYEB_DAYS
        } else {
            HAAB_MONTH_DAYS
        }
    }
}

/// A Tzolk'in date: a number 1..=13 paired with a day sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{number} {day}")]
pub struct Tzolkin {
    pub number: u8,
    pub day: TzolkinDay,
}

impl Tzolkin {
    pub fn from_day_count(jdn: i64) -> Self {
        Self {
            number: tzolkin_number(jdn),
            day: tzolkin_day(jdn),
        }
    }
}

/// A Haab' date: a day 0..=19 (0..=4 in Wayeb') within a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{day} {month}")]
pub struct Haab {
    pub day: u8,
    pub month: HaabMonth,
}

impl Haab {
    pub fn from_day_count(jdn: i64) -> Self {
        Self {
            day: haab_day(jdn),
            month: HaabMonth::from_index(haab_month_index(jdn)),
        }
    }

    /// Days elapsed since 0 Pop
    pub const fn day_of_year(self) -> u32 {
        self.month.index() as u32 * HAAB_MONTH_DAYS as u32 + self.day as u32
    }
}

/// One of the nine Lords of the Night, G1..=G9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "G{_0}")]
pub struct LordOfTheNight(u8);

impl LordOfTheNight {
    /// Lord for a Winal and K'in pair
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(winal: u32, kin: u32) -> Self {
        let night =
            ((winal % LORDS_OF_THE_NIGHT) * 2 + kin % LORDS_OF_THE_NIGHT) % LORDS_OF_THE_NIGHT;
        Self(if night == 0 { 9 } else { night as u8 })
    }

    /// Position in the cycle, 1..=9
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Tzolk'in number, 1..=13
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn tzolkin_number(jdn: i64) -> u8 {
    let number = (TZOLKIN_EPOCH_OFFSET + jdn.rem_euclid(TZOLKIN_NUMBERS)) % TZOLKIN_NUMBERS;
    if number == 0 { 13 } else { number as u8 }
}

/// Tzolk'in day sign
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn tzolkin_day(jdn: i64) -> TzolkinDay {
    TzolkinDay::from_cycle_index(jdn.rem_euclid(TZOLKIN_DAY_SIGNS) as usize)
}

/// Haab' month index, 0..=18
///
/// Negative positions are lifted by whole 360-day steps before taking the
/// year remainder.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn haab_month_index(jdn: i64) -> u8 {
    let position = lift(haab_position(jdn), HAAB_MONTH_WRAP as i128);
    ((position % HAAB_YEAR_DAYS as i128) / HAAB_MONTH_DAYS as i128) as u8
}

/// Day within the Haab' month, 0..=19
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn haab_day(jdn: i64) -> u8 {
    let position = lift(haab_position(jdn), HAAB_YEAR_DAYS as i128);
    ((position % HAAB_YEAR_DAYS as i128) % HAAB_MONTH_DAYS as i128) as u8
}

/// Days since the first 0 Pop after day zero, widened to `i128`
const fn haab_position(jdn: i64) -> i128 {
    jdn as i128 - HAAB_EPOCH_OFFSET as i128
}

/// Adds the fewest multiples of `step` that make `value` non-negative.
const fn lift(value: i128, step: i128) -> i128 {
    if value >= 0 {
        value
    } else {
        value + step * ((-value + step - 1) / step)
    }
}
