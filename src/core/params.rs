use std::fmt;
use std::str::FromStr;

use crate::core::YhfError;

/// Time span of chart data (`range` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Range {
    D1,
    D5,
    #[default]
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    const ALL: [Self; 11] = [
        Self::D1,
        Self::D5,
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Y2,
        Self::Y5,
        Self::Y10,
        Self::Ytd,
        Self::Max,
    ];

    /// The wire value, e.g. `"1mo"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

/// Bar size of chart data (`interval` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    #[default]
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    const ALL: [Self; 13] = [
        Self::I1m,
        Self::I2m,
        Self::I5m,
        Self::I15m,
        Self::I30m,
        Self::I60m,
        Self::I90m,
        Self::I1h,
        Self::D1,
        Self::D5,
        Self::W1,
        Self::M1,
        Self::M3,
    ];

    /// The wire value, e.g. `"1wk"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I2m => "2m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I60m => "60m",
            Self::I90m => "90m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Range {
    type Err = YhfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| YhfError::Data(format!("unknown range '{s}'")))
    }
}

impl FromStr for Interval {
    type Err = YhfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "1m" and "1mo" differ only by case-insensitive suffix, so match exactly.
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| YhfError::Data(format!("unknown interval '{s}'")))
    }
}
