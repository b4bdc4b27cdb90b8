//! Regions and their provinces as listed by the statistics API

use serde::{Deserialize, Serialize};

/// A country-level region
///
/// # Examples
///
/// ```
/// use covid_alerts::domain::Region;
///
/// let region = Region::new("Brazil", "BRA");
/// assert!(region.matches_country("brazil"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Country name as spelled by the API
    pub name: String,

    /// ISO code used to scope province listings
    pub iso: String,
}

impl Region {
    pub fn new(name: impl Into<String>, iso: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iso: iso.into(),
        }
    }

    /// Case-insensitive comparison against a configured country name
    pub fn matches_country(&self, country: &str) -> bool {
        self.name.to_uppercase() == country.to_uppercase()
    }
}

/// Find the region whose name matches `country`, ignoring case
pub fn find_region<'a>(regions: &'a [Region], country: &str) -> Option<&'a Region> {
    regions.iter().find(|region| region.matches_country(country))
}

/// A state or province within a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub province: String,
}

impl State {
    pub fn new(province: impl Into<String>) -> Self {
        Self {
            province: province.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_region_case_insensitive() {
        let regions = vec![Region::new("Brazil", "BR"), Region::new("Canada", "CAN")];

        let found = find_region(&regions, "brazil").unwrap();
        assert_eq!(found.iso, "BR");

        let found = find_region(&regions, "CANADA").unwrap();
        assert_eq!(found.name, "Canada");
    }

    #[test]
    fn test_find_region_missing() {
        let regions = vec![Region::new("Brazil", "BR")];
        assert!(find_region(&regions, "Chile").is_none());
        assert!(find_region(&[], "Brazil").is_none());
    }

    #[test]
    fn test_state_ignores_extra_fields() {
        let state: State = serde_json::from_str(
            r#"{"iso":"BRA","name":"Brazil","province":"Sao Paulo","lat":"-23.5","long":"-46.6"}"#,
        )
        .unwrap();
        assert_eq!(state.province, "Sao Paulo");
    }
}
