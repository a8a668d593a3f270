/// Number of places in a full Long Count (K'in through Alautun)
pub const DIGIT_COUNT: usize = 9;

/// Fewest dot-separated components accepted by the parser (B'ak'tun.K'atun.Tun.Winal.K'in)
pub const MIN_COMPONENTS: usize = 5;

/// Long Count component separator
pub const DIGIT_SEPARATOR: char = '.';

/// Days per unit of each place, lowest place first (K'in .. Alautun)
pub const PLACE_VALUES: [i64; DIGIT_COUNT] = [
    1,              // K'in
    20,             // Winal
    360,            // Tun
    7_200,          // K'atun
    144_000,        // B'ak'tun
    2_880_000,      // Piktun
    57_600_000,     // Kalabtun
    1_152_000_000,  // K'inchiltun
    23_040_000_000, // Alautun
];

/// Largest valid value of each place, lowest place first
/// Winal is the only place that rolls over at 18 instead of 20.
pub const DIGIT_MAX: [u32; DIGIT_COUNT] = [19, 17, 19, 19, 19, 19, 19, 19, 19];

/// Smallest valid value of every place
pub const DIGIT_MIN: u32 = 0;

/// Days in the Haab' year (there is no leap day)
pub const HAAB_YEAR_DAYS: i64 = 365;
/// Months in the Haab' year, Wayeb' included
pub const HAAB_MONTHS: u8 = 19;
/// Days in each of the first 18 Haab' months
pub const HAAB_MONTH_DAYS: i64 = 20;
/// Days in Wayeb', the 19th Haab' month
pub const WAYEB_DAYS: i64 = 5;
/// Zero-based index of Wayeb'
pub const WAYEB_INDEX: u8 = 18;
/// Offset of the Haab' count from Long Count day zero (0.0.0.0.0 is 8 Kumk'u)
pub(crate) const HAAB_EPOCH_OFFSET: i64 = 17;
/// Normalization step applied to negative Haab' month positions
pub(crate) const HAAB_MONTH_WRAP: i64 = 360;

/// Tzolk'in day numbers run 1..=13
pub const TZOLKIN_NUMBERS: i64 = 13;
/// Twenty named Tzolk'in days
pub const TZOLKIN_DAY_SIGNS: i64 = 20;
/// Offset of the Tzolk'in number from Long Count day zero (0.0.0.0.0 is 4 Ajaw)
pub(crate) const TZOLKIN_EPOCH_OFFSET: i64 = 4;

/// Length of the Lords of the Night cycle
pub const LORDS_OF_THE_NIGHT: u32 = 9;

/// Display name of the Tzolk'in calendar
pub const TZOLKIN_NAME: &str = "Tzolk'in";
/// Display name of the Haab' calendar
pub const HAAB_NAME: &str = "Haab'";
