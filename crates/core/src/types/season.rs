//! Catalog seasons.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a season name is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown season: {0:?} (expected winter or summer)")]
pub struct ParseSeasonError(String);

/// One of the two independent catalog variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Winter,
    Summer,
}

impl Season {
    /// Both seasons, in display order.
    pub const ALL: [Self; 2] = [Self::Winter, Self::Summer];

    /// Lowercase name, as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Summer => "summer",
        }
    }

    /// The opposite season.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Winter => Self::Summer,
            Self::Summer => Self::Winter,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winter => f.write_str("WINTER"),
            Self::Summer => f.write_str("SUMMER"),
        }
    }
}

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "summer" => Ok(Self::Summer),
            _ => Err(ParseSeasonError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("SUMMER".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!(" winter ".parse::<Season>().unwrap(), Season::Winter);
        assert!("autumn".parse::<Season>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Season::Summer).unwrap(), "\"summer\"");
        let parsed: Season = serde_json::from_str("\"winter\"").unwrap();
        assert_eq!(parsed, Season::Winter);
    }

    #[test]
    fn test_display_and_other() {
        assert_eq!(Season::Winter.to_string(), "WINTER");
        assert_eq!(Season::Winter.other(), Season::Summer);
        assert_eq!(Season::Summer.other().other(), Season::Summer);
    }
}
