//! Correlation constants between the Long Count and the Julian Day Number.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prelude::*};

/// A named correlation constant: the Julian Day Number of Long Count day zero
/// according to one scholarly convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Correlation {
    #[display(fmt = "Bowditch")]
    Bowditch,
    #[display(fmt = "Willson")]
    Willson,
    #[display(fmt = "Smiley")]
    Smiley,
    #[display(fmt = "Makemson")]
    Makemson,
    #[display(fmt = "Modified Spinden")]
    ModifiedSpinden,
    #[display(fmt = "Spinden")]
    Spinden,
    #[display(fmt = "Teeple")]
    Teeple,
    #[display(fmt = "Dinsmoor")]
    Dinsmoor,
    #[display(fmt = "−4CR")]
    Minus4Cr,
    #[display(fmt = "−2CR")]
    Minus2Cr,
    #[display(fmt = "Stock")]
    Stock,
    #[display(fmt = "Goodman")]
    Goodman,
    #[display(fmt = "Martinez–Hernandez")]
    MartinezHernandez,
    /// Goodman–Martinez–Thompson, the default correlation
    #[display(fmt = "GMT")]
    Gmt,
    #[display(fmt = "Modified Thompson 1")]
    ModifiedThompson1,
    #[display(fmt = "Thompson (Lounsbury)")]
    ThompsonLounsbury,
    #[display(fmt = "Pogo")]
    Pogo,
    #[display(fmt = "+2CR")]
    Plus2Cr,
    #[display(fmt = "Böhm & Böhm")]
    BohmAndBohm,
    #[display(fmt = "Kreichgauer")]
    Kreichgauer,
    #[display(fmt = "+4CR")]
    Plus4Cr,
    #[display(fmt = "Fuls, et al.")]
    FulsEtAl,
    #[display(fmt = "Hochleitner")]
    Hochleitner,
    #[display(fmt = "Schultz")]
    Schultz,
    #[display(fmt = "Escalona–Ramos")]
    EscalonaRamos,
    #[display(fmt = "Vaillant")]
    Vaillant,
    #[display(fmt = "Weitzel")]
    Weitzel,
}

impl Correlation {
    /// Every named correlation, in ascending order of value
    pub const ALL: [Self; 27] = [
        Self::Bowditch,
        Self::Willson,
        Self::Smiley,
        Self::Makemson,
        Self::ModifiedSpinden,
        Self::Spinden,
        Self::Teeple,
        Self::Dinsmoor,
        Self::Minus4Cr,
        Self::Minus2Cr,
        Self::Stock,
        Self::Goodman,
        Self::MartinezHernandez,
        Self::Gmt,
        Self::ModifiedThompson1,
        Self::ThompsonLounsbury,
        Self::Pogo,
        Self::Plus2Cr,
        Self::BohmAndBohm,
        Self::Kreichgauer,
        Self::Plus4Cr,
        Self::FulsEtAl,
        Self::Hochleitner,
        Self::Schultz,
        Self::EscalonaRamos,
        Self::Vaillant,
        Self::Weitzel,
    ];

    /// Julian Day Number of Long Count day zero under this correlation
    pub const fn value(self) -> i64 {
        match self {
            Self::Bowditch => 394_483,
            Self::Willson => 438_906,
            Self::Smiley => 482_699,
            Self::Makemson => 489_138,
            Self::ModifiedSpinden => 489_383,
            Self::Spinden => 489_384,
            Self::Teeple => 492_622,
            Self::Dinsmoor => 497_879,
            Self::Minus4Cr => 508_363,
            Self::Minus2Cr => 546_323,
            Self::Stock => 556_408,
            Self::Goodman => 584_280,
            Self::MartinezHernandez => 584_281,
            Self::Gmt => 584_283,
            Self::ModifiedThompson1 => 584_284,
            Self::ThompsonLounsbury => 584_285,
            Self::Pogo => 588_626,
            Self::Plus2Cr => 622_243,
            Self::BohmAndBohm => 622_261,
            Self::Kreichgauer => 626_927,
            Self::Plus4Cr => 660_203,
            Self::FulsEtAl => 660_208,
            Self::Hochleitner => 674_265,
            Self::Schultz => 677_723,
            Self::EscalonaRamos => 679_108,
            Self::Vaillant => 679_183,
            Self::Weitzel => 774_078,
        }
    }

    /// Finds the named correlation with exactly this value
    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    /// `(correlation, display name)` pairs for a selection list
    pub fn registry() -> impl Iterator<Item = (Self, String)> {
        Self::ALL.into_iter().map(|c| (c, c.to_string()))
    }
}

/// Display name for a correlation value: the registry name when `value` is
/// exactly a named constant, `Custom (<value>)` with one decimal otherwise.
#[allow(clippy::cast_possible_truncation)]
pub fn describe(value: f64) -> String {
    if value.fract() == 0.0 {
        // saturating cast; nothing near i64 bounds is a named value anyway
        if let Some(named) = Correlation::from_value(value as i64) {
            return named.to_string();
        }
    }
    format!("Custom ({value:.1})")
}

/// Day offset between Long Count day zero and the Julian Day Number epoch.
///
/// Either a named [`Correlation`] or any integral day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Correction(i64);

impl Correction {
    /// The GMT correlation (584283)
    pub const GMT: Self = Self(Correlation::Gmt.value());

    /// Creates a correction from a whole day count
    #[inline]
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// Creates a correction from a fractional day count, truncating toward zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_days(days: f64) -> Self {
        Self(days.trunc() as i64)
    }

    /// Offset in days
    #[inline]
    pub const fn days(self) -> i64 {
        self.0
    }

    /// The named correlation with this exact value, if any
    pub fn named(self) -> Option<Correlation> {
        Correlation::from_value(self.0)
    }

    /// Display name, see [`describe`]
    #[allow(clippy::cast_precision_loss)]
    pub fn name(self) -> String {
        describe(self.0 as f64)
    }
}

impl Default for Correction {
    fn default() -> Self {
        Self::GMT
    }
}

impl From<Correlation> for Correction {
    fn from(correlation: Correlation) -> Self {
        Self(correlation.value())
    }
}

impl FromStr for Correction {
    type Err = ParseError;

    /// Accepts a day count (fractions are truncated) or a registry name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(days) = trimmed.parse::<i64>() {
            return Ok(Self(days));
        }
        if let Ok(days) = trimmed.parse::<f64>() {
            if days.is_finite() {
                return Ok(Self::from_days(days));
            }
        }
        Correlation::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(trimmed))
            .map(Self::from)
            .ok_or_else(|| ParseError::InvalidCorrection(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_ascending() {
        for pair in Correlation::ALL.windows(2) {
            assert!(
                pair[0].value() < pair[1].value(),
                "{} should come before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(Correlation::Bowditch.value(), 394_483);
        assert_eq!(Correlation::Gmt.value(), 584_283);
        assert_eq!(Correlation::Weitzel.value(), 774_078);
    }

    #[test]
    fn test_describe_named() {
        assert_eq!(describe(584_283.0), "GMT");
        assert_eq!(describe(584_285.0), "Thompson (Lounsbury)");
        assert_eq!(describe(622_261.0), "Böhm & Böhm");
        assert_eq!(describe(508_363.0), "−4CR");
    }

    #[test]
    fn test_describe_custom() {
        assert_eq!(describe(584_282.0), "Custom (584282.0)");
        assert_eq!(describe(584_283.5), "Custom (584283.5)");
        assert_eq!(describe(-12.0), "Custom (-12.0)");
    }

    #[test]
    fn test_registry_lists_every_name() {
        let registry: Vec<_> = Correlation::registry().collect();
        assert_eq!(registry.len(), Correlation::ALL.len());
        assert_eq!(registry[0], (Correlation::Bowditch, "Bowditch".to_owned()));
        assert!(
            registry
                .iter()
                .any(|(c, name)| *c == Correlation::Gmt && name == "GMT")
        );
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Correlation::from_value(584_283), Some(Correlation::Gmt));
        assert_eq!(Correlation::from_value(1), None);
    }

    #[test]
    fn test_correction_default_is_gmt() {
        assert_eq!(Correction::default(), Correction::GMT);
        assert_eq!(Correction::default().days(), 584_283);
        assert_eq!(Correction::default().named(), Some(Correlation::Gmt));
    }

    #[test]
    fn test_correction_truncates() {
        assert_eq!(Correction::from_days(584_283.9).days(), 584_283);
        assert_eq!(Correction::from_days(-3.7).days(), -3);
    }

    #[test]
    fn test_correction_name() {
        assert_eq!(Correction::from(Correlation::Spinden).name(), "Spinden");
        assert_eq!(Correction::new(100).name(), "Custom (100.0)");
    }

    #[test]
    fn test_correction_from_str() {
        assert_eq!("584285".parse::<Correction>().unwrap().days(), 584_285);
        assert_eq!(" 584283.8 ".parse::<Correction>().unwrap().days(), 584_283);
        assert_eq!(
            "gmt".parse::<Correction>().unwrap(),
            Correction::from(Correlation::Gmt)
        );
        assert_eq!(
            "Modified Spinden".parse::<Correction>().unwrap(),
            Correction::from(Correlation::ModifiedSpinden)
        );
        let result = "nope".parse::<Correction>();
        assert!(matches!(result, Err(ParseError::InvalidCorrection(ref s)) if s == "nope"));
        assert!("NaN".parse::<Correction>().is_err());
    }

    #[test]
    fn test_correction_serde() {
        let correction = Correction::from(Correlation::Goodman);
        let json = serde_json::to_string(&correction).unwrap();
        assert_eq!(json, "584280");

        let parsed: Correction = serde_json::from_str(&json).unwrap();
        assert_eq!(correction, parsed);
    }

    #[test]
    fn test_correlation_serde() {
        let json = serde_json::to_string(&Correlation::Gmt).unwrap();
        let parsed: Correlation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Correlation::Gmt);
    }
}
