//! Product categories.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid product category: {0}")]
pub struct CategoryError(pub String);

/// Shelf category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Dairy,
    Meat,
    Produce,
    Bakery,
    Frozen,
    Pantry,
    Beverages,
    Snacks,
    Household,
    PersonalCare,
    #[default]
    Other,
}

impl ProductCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Dairy,
        Self::Meat,
        Self::Produce,
        Self::Bakery,
        Self::Frozen,
        Self::Pantry,
        Self::Beverages,
        Self::Snacks,
        Self::Household,
        Self::PersonalCare,
        Self::Other,
    ];

    /// The `snake_case` name used in seed files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Produce => "produce",
            Self::Bakery => "bakery",
            Self::Frozen => "frozen",
            Self::Pantry => "pantry",
            Self::Beverages => "beverages",
            Self::Snacks => "snacks",
            Self::Household => "household",
            Self::PersonalCare => "personal_care",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_category() {
        for category in ProductCategory::ALL {
            assert_eq!(category.as_str().parse::<ProductCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("toys".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&ProductCategory::PersonalCare).unwrap();
        assert_eq!(json, "\"personal_care\"");
    }
}
