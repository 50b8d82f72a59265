//! Country name resolution
//!
//! Maps free-form user input ("france", "Ivory Coast", "DEU") to an
//! ISO 3166-1 record. The flag provider is keyed by the alpha-2 code.

mod table;

use crate::error::{AnalysisError, Result};
use serde::Serialize;
use tracing::debug;

/// ISO 3166-1 country record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO short name
    pub name: &'static str,
    /// Two-letter code, uppercase
    pub alpha_2: &'static str,
    /// Three-letter code, uppercase
    pub alpha_3: &'static str,
    /// Formal state name, when it differs from `name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_name: Option<&'static str>,
    #[serde(skip)]
    aliases: &'static [&'static str],
}

impl Country {
    const fn new(name: &'static str, alpha_2: &'static str, alpha_3: &'static str) -> Self {
        Self {
            name,
            alpha_2,
            alpha_3,
            official_name: None,
            aliases: &[],
        }
    }

    const fn official(self, official_name: &'static str) -> Self {
        Self {
            official_name: Some(official_name),
            ..self
        }
    }

    const fn aka(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Lowercase alpha-2 code, as used in flag URLs
    pub fn flag_code(&self) -> String {
        self.alpha_2.to_ascii_lowercase()
    }

    /// Alternative spellings accepted by [`search_fuzzy`]
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name)
            .chain(self.official_name)
            .chain(self.aliases.iter().copied())
    }
}

/// All known countries, in ISO short-name order
pub fn all() -> &'static [Country] {
    table::COUNTRIES
}

/// Look up a country by exact alpha-2 or alpha-3 code (case-insensitive)
pub fn by_code(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    table::COUNTRIES.iter().find(|c| {
        c.alpha_2.eq_ignore_ascii_case(code) || c.alpha_3.eq_ignore_ascii_case(code)
    })
}

/// Resolve user input to a country
///
/// Matching runs in three passes and the first hit wins:
/// 1. exact alpha-2 / alpha-3 code
/// 2. exact name, official name or alias
/// 3. substring of the short name, then of any other name
///
/// All comparisons ignore case and surrounding whitespace.
///
/// # Errors
///
/// Returns `AnalysisError::CountryNotFound` when nothing matches.
pub fn search_fuzzy(query: &str) -> Result<&'static Country> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Err(AnalysisError::CountryNotFound {
            query: query.to_string(),
        });
    }

    let countries = table::COUNTRIES;

    let found = by_code(&needle)
        .or_else(|| {
            countries
                .iter()
                .find(|c| c.names().any(|n| normalize(n) == needle))
        })
        .or_else(|| {
            countries
                .iter()
                .find(|c| normalize(c.name).contains(&needle))
        })
        .or_else(|| {
            countries
                .iter()
                .find(|c| c.names().any(|n| normalize(n).contains(&needle)))
        });

    match found {
        Some(country) => {
            debug!(query, country = country.name, code = country.alpha_2, "resolved country");
            Ok(country)
        }
        None => Err(AnalysisError::CountryNotFound {
            query: query.to_string(),
        }),
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_codes_are_unique() {
        let a2: HashSet<_> = all().iter().map(|c| c.alpha_2).collect();
        let a3: HashSet<_> = all().iter().map(|c| c.alpha_3).collect();
        assert_eq!(a2.len(), all().len());
        assert_eq!(a3.len(), all().len());
        assert!(all().iter().all(|c| c.alpha_2.len() == 2 && c.alpha_3.len() == 3));
    }

    #[test]
    fn test_exact_name() {
        assert_eq!(search_fuzzy("France").unwrap().alpha_2, "FR");
        assert_eq!(search_fuzzy("japan").unwrap().alpha_2, "JP");
        assert_eq!(search_fuzzy("  Brazil ").unwrap().alpha_2, "BR");
    }

    #[test]
    fn test_codes() {
        assert_eq!(search_fuzzy("de").unwrap().name, "Germany");
        assert_eq!(search_fuzzy("DEU").unwrap().name, "Germany");
        assert_eq!(by_code("gb").unwrap().alpha_3, "GBR");
        assert!(by_code("zz").is_none());
    }

    #[test]
    fn test_aliases_and_official_names() {
        assert_eq!(search_fuzzy("Ivory Coast").unwrap().alpha_2, "CI");
        assert_eq!(search_fuzzy("south korea").unwrap().alpha_2, "KR");
        assert_eq!(search_fuzzy("French Republic").unwrap().alpha_2, "FR");
        assert_eq!(search_fuzzy("Russia").unwrap().alpha_2, "RU");
    }

    #[test]
    fn test_exact_beats_substring() {
        // "Niger" is also a substring of "Nigeria"
        assert_eq!(search_fuzzy("Niger").unwrap().alpha_2, "NE");
        assert_eq!(search_fuzzy("Guinea").unwrap().alpha_2, "GN");
        assert_eq!(search_fuzzy("Dominica").unwrap().alpha_2, "DM");
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(search_fuzzy("zealand").unwrap().alpha_2, "NZ");
        assert_eq!(search_fuzzy("Bolivia").unwrap().alpha_2, "BO");
    }

    #[test]
    fn test_not_found() {
        assert!(matches!(
            search_fuzzy("Atlantis"),
            Err(AnalysisError::CountryNotFound { .. })
        ));
        assert!(search_fuzzy("   ").is_err());
    }

    #[test]
    fn test_flag_code_is_lowercase() {
        assert_eq!(search_fuzzy("United Kingdom").unwrap().flag_code(), "gb");
    }
}
