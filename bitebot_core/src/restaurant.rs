//! Restaurant records produced by reply extraction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative cost of a restaurant, written as one to four `$` in bot replies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PriceLevel {
    Budget = 1,
    #[default]
    Moderate = 2,
    Expensive = 3,
    Luxury = 4,
}

impl PriceLevel {
    /// Map a currency symbol count to a level.
    ///
    /// Counts outside `1..=4` (including zero) fall back to `Moderate`
    /// rather than clamping.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            1 => Self::Budget,
            3 => Self::Expensive,
            4 => Self::Luxury,
            _ => Self::Moderate,
        }
    }

    /// Returns the string representation of this level.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Expensive => "expensive",
            Self::Luxury => "luxury",
        }
    }

    /// Dollar-sign rendering used on restaurant cards.
    #[must_use]
    pub const fn symbol(&self) -> &str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Expensive => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl FromStr for PriceLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" | "$" => Ok(Self::Budget),
            "moderate" | "$$" => Ok(Self::Moderate),
            "expensive" | "$$$" => Ok(Self::Expensive),
            "luxury" | "$$$$" => Ok(Self::Luxury),
            _ => Err("unknown price level"),
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A restaurant recommendation recovered from a bot reply.
///
/// `name` is never empty and `rating` is always a finite number; records
/// without them are dropped during extraction instead of being built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub rating: f64,
    pub address: String,
    /// Empty when the reply carried no link.
    pub link: String,
    pub price_level: PriceLevel,
}

impl Restaurant {
    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  ★ {:.1}  {}", self.name, self.rating, self.price_level)?;
        write!(f, "  {}", self.address)?;
        if self.has_link() {
            write!(f, "\n  {}", self.link)?;
        }
        Ok(())
    }
}
