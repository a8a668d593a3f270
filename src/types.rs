use crate::consts::{DIGIT_COUNT, DIGIT_MAX, DIGIT_MIN, PLACE_VALUES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine places of a Long Count, ordered from the lowest (K'in)
/// to the highest (Alautun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Digit {
    Kin,
    Winal,
    Tun,
    Katun,
    Baktun,
    Piktun,
    Kalabtun,
    Kinchiltun,
    Alautun,
}

impl Digit {
    /// All places, lowest first
    pub const ALL: [Self; DIGIT_COUNT] = [
        Self::Kin,
        Self::Winal,
        Self::Tun,
        Self::Katun,
        Self::Baktun,
        Self::Piktun,
        Self::Kalabtun,
        Self::Kinchiltun,
        Self::Alautun,
    ];

    /// Position of the place in `ALL` (K'in is 0)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Days represented by one unit of this place
    #[inline]
    pub const fn place_value(self) -> i64 {
        PLACE_VALUES[self.index()]
    }

    /// Largest value the place accepts
    #[inline]
    pub const fn max(self) -> u32 {
        DIGIT_MAX[self.index()]
    }

    /// Display name of the place, with its glottal stops
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kin => "K'in",
            Self::Winal => "Winal",
            Self::Tun => "Tun",
            Self::Katun => "K'atun",
            Self::Baktun => "B'ak'tun",
            Self::Piktun => "Piktun",
            Self::Kalabtun => "Kalabtun",
            Self::Kinchiltun => "K'inchiltun",
            Self::Alautun => "Alautun",
        }
    }

    /// Place names lowest first. With `uinal` set the Winal place is spelled "Uinal".
    pub fn names(uinal: bool) -> Vec<&'static str> {
        Self::ALL
            .iter()
            .map(|digit| match digit {
                Self::Winal if uinal => "Uinal",
                other => other.name(),
            })
            .collect()
    }

    /// Validates `value` against this place's range.
    ///
    /// # Errors
    /// Returns `DomainError::DigitOutOfRange` if the value is negative or above `max()`.
    pub fn check(self, value: i64) -> Result<u32, DomainError> {
        let max = self.max();
        match u32::try_from(value) {
            Ok(v) if v <= max => Ok(v),
            _ => Err(DomainError::DigitOutOfRange {
                digit: self,
                value,
                min: DIGIT_MIN,
                max,
            }),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Long Count place assignment outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{digit} must be between {min} and {max}, got {value}")]
    DigitOutOfRange {
        digit: Digit,
        value: i64,
        min: u32,
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, digit) in Digit::ALL.iter().enumerate() {
            assert_eq!(digit.index(), i, "{digit} is out of place");
        }
    }

    #[test]
    fn test_place_values_multiply_up() {
        for pair in Digit::ALL.windows(2) {
            let radix = if pair[0] == Digit::Winal { 18 } else { 20 };
            assert_eq!(
                pair[0].place_value() * radix,
                pair[1].place_value(),
                "{} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_check_accepts_full_range() {
        for digit in Digit::ALL {
            for value in 0..=i64::from(digit.max()) {
                assert!(digit.check(value).is_ok(), "{digit} = {value}");
            }
        }
    }

    #[test]
    fn test_check_rejects_twenty() {
        for digit in Digit::ALL {
            let result = digit.check(20);
            assert!(
                matches!(result, Err(DomainError::DigitOutOfRange { digit: d, value: 20, .. }) if d == digit),
                "{digit} accepted 20"
            );
        }
    }

    #[test]
    fn test_check_rejects_winal_eighteen() {
        let result = Digit::Winal.check(18);
        assert_eq!(
            result,
            Err(DomainError::DigitOutOfRange {
                digit: Digit::Winal,
                value: 18,
                min: 0,
                max: 17
            })
        );
    }

    #[test]
    fn test_check_rejects_negative() {
        assert!(Digit::Kin.check(-1).is_err());
        assert!(Digit::Alautun.check(i64::MIN).is_err());
    }

    #[test]
    fn test_error_message_names_digit() {
        let err = Digit::Katun.check(25).unwrap_err();
        assert_eq!(err.to_string(), "K'atun must be between 0 and 19, got 25");
    }

    #[test]
    fn test_display_matches_name() {
        for digit in Digit::ALL {
            assert_eq!(digit.to_string(), digit.name());
        }
    }

    #[test]
    fn test_names_with_uinal() {
        let names = Digit::names(true);
        assert_eq!(names.len(), 9);
        assert_eq!(names[1], "Uinal");
        assert_eq!(Digit::names(false)[1], "Winal");
        assert_eq!(names[8], "Alautun");
    }
}
