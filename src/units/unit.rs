use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::units::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Base,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zeta,
}

impl Unit {
    /// All variants, ascending by power.
    pub const ALL: [Unit; 8] = [
        Self::Base,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zeta,
    ];

    pub const fn scale(&self) -> Scale {
        match self {
            Self::Base => Scale::new(0, B),
            Self::Kilo => Scale::new(1, KB),
            Self::Mega => Scale::new(2, MB),
            Self::Giga => Scale::new(3, GB),
            Self::Tera => Scale::new(4, TB),
            Self::Peta => Scale::new(5, PB),
            Self::Exa => Scale::new(6, EB),
            Self::Zeta => Scale::new(7, ZB),
        }
    }

    pub const fn power(&self) -> u32 {
        self.scale().power
    }

    pub const fn suffix(&self) -> &'static str {
        self.scale().suffix
    }

    /// Resolves a suffix string to its unit. Only the first character is
    /// significant ("G", "GB", and "Gigabytes" all resolve to `Giga`),
    /// and it is uppercased before lookup. Empty input is rejected the
    /// same way as an unknown letter.
    pub fn from_suffix(suffix: &str) -> Result<Self, InvalidSuffix> {
        match suffix.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('B') => Ok(Self::Base),
            Some('K') => Ok(Self::Kilo),
            Some('M') => Ok(Self::Mega),
            Some('G') => Ok(Self::Giga),
            Some('T') => Ok(Self::Tera),
            Some('P') => Ok(Self::Peta),
            Some('E') => Ok(Self::Exa),
            Some('Z') => Ok(Self::Zeta),
            _ => Err(InvalidSuffix::new(suffix)),
        }
    }
}

impl FromStr for Unit {
    type Err = InvalidSuffix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_suffix(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
