//! Catalog category definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A top-level itch.io catalog section that sale listings are scoped to.
///
/// The set is closed: every fetch is tied to one of these members, and an
/// unknown category string fails at parse time rather than at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Games on sale.
    #[default]
    Games,
}

impl Category {
    /// Returns the category as the path segment used in catalog URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Games => "games",
        }
    }

    /// Returns all supported categories.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Games]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "games" | "game" => Ok(Self::Games),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid category '{}', expected one of: games", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Games.as_str(), "games");
        assert_eq!(Category::Games.to_string(), "games");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("games".parse::<Category>().unwrap(), Category::Games);
        assert_eq!("Games".parse::<Category>().unwrap(), Category::Games);
        assert!("assets".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_all_is_closed() {
        assert_eq!(Category::all(), &[Category::Games]);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Games).unwrap();
        assert_eq!(json, "\"games\"");
        let parsed: Category = serde_json::from_str("\"games\"").unwrap();
        assert_eq!(parsed, Category::Games);
    }
}
