//! UTM zone labels and their WGS 84 EPSG codes.
//!
//! Only the identifier is derived here (`326zz` north, `327zz` south); points
//! are never reprojected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// EPSG base code for WGS 84 / UTM northern zones.
pub const EPSG_UTM_NORTH: u32 = 32600;
/// EPSG base code for WGS 84 / UTM southern zones.
pub const EPSG_UTM_SOUTH: u32 = 32700;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

impl FromStr for Hemisphere {
    type Err = UtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Ok(Hemisphere::North),
            "S" | "SOUTH" => Ok(Hemisphere::South),
            _ => Err(UtmError::Parse(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UtmError {
    #[error("UTM zone {0} is outside 1..=60")]
    ZoneOutOfRange(u8),
    #[error("cannot parse UTM zone from {0:?} (expected e.g. \"17S\")")]
    Parse(String),
}

/// A UTM zone number with its hemisphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UtmZone {
    number: u8,
    hemisphere: Hemisphere,
}

impl UtmZone {
    pub fn new(number: u8, hemisphere: Hemisphere) -> Result<Self, UtmError> {
        if !(1..=60).contains(&number) {
            return Err(UtmError::ZoneOutOfRange(number));
        }
        Ok(Self { number, hemisphere })
    }

    #[inline]
    pub fn number(&self) -> u8 {
        self.number
    }

    #[inline]
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// EPSG code of the WGS 84 / UTM projection for this zone.
    #[inline]
    pub fn epsg(&self) -> u32 {
        let base = match self.hemisphere {
            Hemisphere::North => EPSG_UTM_NORTH,
            Hemisphere::South => EPSG_UTM_SOUTH,
        };
        base + u32::from(self.number)
    }
}

impl Default for UtmZone {
    /// Zone 17 South (coastal Ecuador).
    fn default() -> Self {
        Self {
            number: 17,
            hemisphere: Hemisphere::South,
        }
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.hemisphere.letter())
    }
}

impl FromStr for UtmZone {
    type Err = UtmError;

    /// Accepts `"17S"`, `"17s"`, `"17 N"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let split = t
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| UtmError::Parse(s.to_string()))?;
        let (digits, rest) = t.split_at(split);
        if digits.is_empty() {
            return Err(UtmError::Parse(s.to_string()));
        }
        let number: u8 = digits.parse().map_err(|_| UtmError::Parse(s.to_string()))?;
        let hemisphere: Hemisphere = rest.parse().map_err(|_| UtmError::Parse(s.to_string()))?;
        UtmZone::new(number, hemisphere)
    }
}
