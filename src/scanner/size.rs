use std::fmt;

pub const KILO: u64 = 1_000;
pub const MEGA: u64 = 10_000_000;
pub const GIGA: u64 = 100_000_000_000;
/// Upper bound of the Giga range. Sizes at or above it are printed raw.
pub const TERA: u64 = 1_000_000_000_000_000;

/// Unit a byte count is scaled to for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleUnit {
    None,
    Kilo,
    Mega,
    Giga,
}

impl ScaleUnit {
    /// Suffix character printed right after the scaled value
    pub fn suffix(self) -> Option<char> {
        match self {
            ScaleUnit::None => None,
            ScaleUnit::Kilo => Some('K'),
            ScaleUnit::Mega => Some('M'),
            ScaleUnit::Giga => Some('G'),
        }
    }

    fn divisor(self) -> u64 {
        match self {
            ScaleUnit::None => 1,
            ScaleUnit::Kilo => KILO,
            ScaleUnit::Mega => MEGA,
            ScaleUnit::Giga => GIGA,
        }
    }
}

impl fmt::Display for ScaleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix() {
            Some(c) => write!(f, "{}", c),
            None => Ok(()),
        }
    }
}

/// Pick a unit for `bytes` and rescale it, truncating.
pub fn scale(bytes: u64) -> (ScaleUnit, u64) {
    let unit = if (KILO..MEGA).contains(&bytes) {
        ScaleUnit::Kilo
    } else if (MEGA..GIGA).contains(&bytes) {
        ScaleUnit::Mega
    } else if (GIGA..TERA).contains(&bytes) {
        ScaleUnit::Giga
    } else {
        ScaleUnit::None
    };
    (unit, bytes / unit.divisor())
}
