use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr},
    str::FromStr,
};

/// The days of the week a section meets, stored as a 7-bit mask.
///
/// Bits are laid out in week-pattern order: Monday is the most significant
/// bit and Sunday the least, so the mask equals the `Y`/`N` week pattern read
/// as a binary number (`"YNYNYNY"` is `0b1010101`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DaySet(u8);

impl DaySet {
    // Constants for individual days
    pub const MONDAY: Self = DaySet(1 << 6);
    pub const TUESDAY: Self = DaySet(1 << 5);
    pub const WEDNESDAY: Self = DaySet(1 << 4);
    pub const THURSDAY: Self = DaySet(1 << 3);
    pub const FRIDAY: Self = DaySet(1 << 2);
    pub const SATURDAY: Self = DaySet(1 << 1);
    pub const SUNDAY: Self = DaySet(1 << 0);

    pub const ALL: Self = DaySet(0b1111111);

    /// Number of flags in a week pattern
    pub const PATTERN_LEN: usize = 7;

    /// Day-to-char mapping for display, in week-pattern order
    const DAY_CHARS: [(Self, char); 7] = [
        (Self::MONDAY, 'M'),
        (Self::TUESDAY, 'T'),
        (Self::WEDNESDAY, 'W'),
        (Self::THURSDAY, 'R'),
        (Self::FRIDAY, 'F'),
        (Self::SATURDAY, 'S'),
        (Self::SUNDAY, 'U'),
    ];

    /// Builds a set from a stored mask, dropping anything above the 7th bit
    pub fn from_bits(bits: u8) -> Self {
        DaySet(bits & Self::ALL.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, day: Self) -> bool {
        (self & day) == day
    }

    /// Parses an optional week pattern, mapping absent or malformed patterns to `None`
    pub fn from_week_pattern(pattern: Option<&str>) -> Option<Self> {
        pattern.and_then(|p| p.parse().ok())
    }
}

impl FromStr for DaySet {
    type Err = ();

    /// Parses a 7-character week pattern such as `"NYNYNNN"`.
    ///
    /// `Y` marks a meeting day; every other character counts as absent.
    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        if pattern.chars().count() != Self::PATTERN_LEN {
            return Err(());
        }

        let bits = pattern
            .chars()
            .fold(0u8, |acc, c| (acc << 1) | u8::from(c == 'Y'));

        Ok(DaySet(bits))
    }
}

impl Display for DaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut result = String::new();

        for &(day, day_char) in &Self::DAY_CHARS {
            if self.contains(day) {
                result.push(day_char);
            }
        }

        write!(f, "{result}")
    }
}

impl BitOr for DaySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        DaySet(self.0 | rhs.0)
    }
}

impl BitAnd for DaySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        DaySet(self.0 & rhs.0)
    }
}
