//! Country and province display names.
//!
//! Addresses store ISO 3166-1 alpha-2 country codes (`US`) and ISO 3166-2
//! subdivision codes (`US-CA`). Emails and admin pages show the display
//! names instead. Lookups are case-insensitive and return `None` for codes
//! the tables do not know.

mod countries;
mod provinces;

pub use countries::COUNTRIES;
pub use provinces::PROVINCES;

/// A country entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
}

/// A first-level subdivision (state, province, territory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    /// Alpha-2 code of the owning country.
    pub country_code: &'static str,
    /// ISO 3166-2 code, e.g. `US-CA`.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
}

/// Display name for a country code.
#[must_use]
pub fn country_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .map(|c| c.name)
}

/// Display name for a province code.
#[must_use]
pub fn province_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    PROVINCES
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code))
        .map(|p| p.name)
}

/// All provinces of a country, in table order.
pub fn provinces_of(country_code: &str) -> impl Iterator<Item = &'static Province> + '_ {
    let country_code = country_code.trim();
    PROVINCES
        .iter()
        .filter(move |p| p.country_code.eq_ignore_ascii_case(country_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_lookup() {
        assert_eq!(country_name("US"), Some("United States"));
        assert_eq!(country_name("de"), Some("Germany"));
        assert_eq!(country_name(" VN "), Some("Vietnam"));
        assert_eq!(country_name("ZZ"), None);
        assert_eq!(country_name(""), None);
    }

    #[test]
    fn test_province_name_lookup() {
        assert_eq!(province_name("US-CA"), Some("California"));
        assert_eq!(province_name("ca-on"), Some("Ontario"));
        assert_eq!(province_name("US-XX"), None);
    }

    #[test]
    fn test_provinces_of() {
        assert_eq!(provinces_of("US").count(), 51);
        assert_eq!(provinces_of("CA").count(), 13);
        assert!(provinces_of("ZZ").next().is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = COUNTRIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len());

        let mut codes: Vec<_> = PROVINCES.iter().map(|p| p.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len());
    }

    #[test]
    fn test_province_codes_match_country() {
        for p in PROVINCES {
            assert!(
                p.code.starts_with(&format!("{}-", p.country_code)),
                "{} does not belong to {}",
                p.code,
                p.country_code
            );
            assert!(country_name(p.country_code).is_some());
        }
    }
}
