//! Proleptic Gregorian calendar <-> Julian Day Number.

use chrono::{Datelike, NaiveDate};

/// Julian Day Number of a proleptic Gregorian date.
///
/// `year` is an astronomical year number (1 BC is `0`). Intermediate
/// divisions floor, so dates before the JDN epoch come out negative.
/// Results beyond the `i64` range saturate.
///
/// ```
/// use mayan_date::gregorian_to_jdn;
///
/// assert_eq!(2440588, gregorian_to_jdn(1970, 1, 1));
/// ```
pub const fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let (year, month, day) = (year as i128, month as i128, day as i128);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    saturate(
        day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045,
    )
}

/// Proleptic Gregorian `(year, month, day)` of a Julian Day Number.
///
/// Every division floors, so the inverse holds for negative day numbers too.
///
/// ```
/// use mayan_date::jdn_to_gregorian;
///
/// assert_eq!((2000, 1, 1), jdn_to_gregorian(2451545));
/// assert_eq!((-4800, 3, 1), jdn_to_gregorian(-32044));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub const fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    const Y: i128 = 4716;
    const V: i128 = 3;
    const J: i128 = 1401;
    const U: i128 = 5;
    const M: i128 = 2;
    const S: i128 = 153;
    const N: i128 = 12;
    const W: i128 = 2;
    const R: i128 = 4;
    const B: i128 = 274_277;
    const P: i128 = 1461;
    const C: i128 = -38;

    let jdn = jdn as i128;
    let f = jdn + J + ((4 * jdn + B).div_euclid(146_097) * 3).div_euclid(4) + C;
    let e = R * f + V;
    let g = e.rem_euclid(P).div_euclid(R);
    let h = U * g + W;
    let day = h.rem_euclid(S).div_euclid(U) + 1;
    let month = (h.div_euclid(S) + M).rem_euclid(N) + 1;
    let year = e.div_euclid(P) - Y + (N + M - month).div_euclid(N);
    // |year| is about |jdn| / 365, month and day are small
    (year as i64, month as i64, day as i64)
}

#[allow(clippy::cast_possible_truncation)]
const fn saturate(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

/// Same as [`jdn_to_gregorian`] for a fractional day number, truncated first
#[allow(clippy::cast_possible_truncation)]
pub fn jdn_to_gregorian_f64(jdn: f64) -> (i64, i64, i64) {
    jdn_to_gregorian(jdn.trunc() as i64)
}

/// `NaiveDate` for a Julian Day Number, saturating at `NaiveDate::MIN` and
/// `NaiveDate::MAX` when the year is out of `chrono`'s range.
pub fn jdn_to_date(jdn: i64) -> NaiveDate {
    let (year, month, day) = jdn_to_gregorian(jdn);
    if year < i64::from(NaiveDate::MIN.year()) {
        tracing::debug!(jdn, year, "gregorian year below range, saturating");
        return NaiveDate::MIN;
    }
    if year > i64::from(NaiveDate::MAX.year()) {
        tracing::debug!(jdn, year, "gregorian year above range, saturating");
        return NaiveDate::MAX;
    }
    // in range, so the triple is a real calendar date
    match (i32::try_from(year), u32::try_from(month), u32::try_from(day)) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        _ => NaiveDate::MIN,
    }
}

/// Julian Day Number of a `NaiveDate`
pub fn date_to_jdn(date: NaiveDate) -> i64 {
    gregorian_to_jdn(
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_epoch() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
        assert_eq!(jdn_to_gregorian(2_440_588), (1970, 1, 1));
    }

    #[test]
    fn test_known_days() {
        struct TestCase {
            ymd: (i64, i64, i64),
            jdn: i64,
        }

        let cases = [
            TestCase {
                ymd: (2000, 1, 1),
                jdn: 2_451_545,
            },
            TestCase {
                ymd: (2012, 12, 21),
                jdn: 2_456_283,
            },
            TestCase {
                ymd: (-3113, 8, 11),
                jdn: 584_283,
            },
            TestCase {
                ymd: (-4713, 11, 24),
                jdn: 0,
            },
            TestCase {
                ymd: (2024, 2, 29),
                jdn: 2_460_370,
            },
            TestCase {
                ymd: (-4800, 3, 1),
                jdn: -32_044,
            },
            TestCase {
                ymd: (-4740, 7, 8),
                jdn: -10_000,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            assert_eq!(gregorian_to_jdn(y, m, d), case.jdn, "{y}-{m}-{d}");
            assert_eq!(jdn_to_gregorian(case.jdn), case.ymd, "JDN {}", case.jdn);
        }
    }

    #[test]
    fn test_round_trip_every_day_of_sample_years() {
        for year in [
            -10_000, -5000, -4800, -4714, -3113, -1, 0, 1, 1582, 1900, 2000, 2023, 2024, 2100,
        ] {
            for month in 1..=12 {
                let days = match month {
                    2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
                    2 => 28,
                    4 | 6 | 9 | 11 => 30,
                    _ => 31,
                };
                for day in 1..=days {
                    let jdn = gregorian_to_jdn(year, month, day);
                    assert_eq!(
                        jdn_to_gregorian(jdn),
                        (year, month, day),
                        "{year}-{month}-{day}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_consecutive_days() {
        let start = gregorian_to_jdn(1999, 12, 31);
        assert_eq!(gregorian_to_jdn(2000, 1, 1), start + 1);
        assert_eq!(gregorian_to_jdn(2000, 3, 1) - gregorian_to_jdn(2000, 2, 28), 2);
        assert_eq!(gregorian_to_jdn(1900, 3, 1) - gregorian_to_jdn(1900, 2, 28), 1);
    }

    #[test]
    fn test_f64_truncates() {
        assert_eq!(jdn_to_gregorian_f64(2_440_588.9), (1970, 1, 1));
    }

    #[test]
    fn test_jdn_to_date() {
        let date = jdn_to_date(2_456_283);
        assert_eq!(date, NaiveDate::from_ymd_opt(2012, 12, 21).unwrap());
        assert_eq!(date_to_jdn(date), 2_456_283);
    }

    #[test]
    fn test_jdn_to_date_saturates() {
        assert_eq!(jdn_to_date(500_000_000_000), NaiveDate::MAX);
        assert_eq!(jdn_to_date(-500_000_000_000), NaiveDate::MIN);
    }

    #[test]
    fn test_date_to_jdn_matches_chrono_day_count() {
        let a = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            date_to_jdn(b) - date_to_jdn(a),
            b.signed_duration_since(a).num_days()
        );
    }

    #[test]
    fn test_negative_jdn_is_a_real_date() {
        for jdn in (-2_000_000..-1_000).step_by(997) {
            let (year, month, day) = jdn_to_gregorian(jdn);
            assert!((1..=12).contains(&month), "JDN {jdn} gave month {month}");
            assert!((1..=31).contains(&day), "JDN {jdn} gave day {day}");
            assert_eq!(gregorian_to_jdn(year, month, day), jdn);
        }
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        for jdn in [i64::MIN, i64::MIN / 2, i64::MAX / 2, i64::MAX] {
            let (_, month, day) = jdn_to_gregorian(jdn);
            assert!((1..=12).contains(&month));
            assert!((1..=31).contains(&day));
        }
        assert_eq!(gregorian_to_jdn(i64::MAX, 1, 1), i64::MAX);
        assert_eq!(gregorian_to_jdn(i64::MIN, 1, 1), i64::MIN);
        assert_eq!(jdn_to_date(i64::MAX), NaiveDate::MAX);
        assert_eq!(jdn_to_date(i64::MIN), NaiveDate::MIN);
    }
}
