//! Daily case reports

use serde::{Deserialize, Serialize};

/// Case counts for a province on a given date
///
/// Only the fields needed to build notifications are modelled; everything
/// else the API returns (deaths, recovered, fatality rate, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub region: ReportRegion,

    /// Report date as returned by the API (`yyyy-MM-dd`)
    pub date: String,

    pub confirmed: i64,

    /// Change in confirmed cases since the previous day
    pub confirmed_diff: i64,
}

/// Region block nested inside a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRegion {
    pub name: String,
    pub province: String,

    #[serde(default)]
    pub cities: Vec<CityReport>,
}

/// Per-city breakdown of a province report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityReport {
    pub name: String,
    pub confirmed: i64,
    pub confirmed_diff: i64,
    pub date: String,
}

impl Report {
    /// Convenience constructor for a report without city breakdowns
    pub fn new(
        name: impl Into<String>,
        province: impl Into<String>,
        date: impl Into<String>,
        confirmed: i64,
        confirmed_diff: i64,
    ) -> Self {
        Self {
            region: ReportRegion {
                name: name.into(),
                province: province.into(),
                cities: Vec::new(),
            },
            date: date.into(),
            confirmed,
            confirmed_diff,
        }
    }

    /// Attach a city breakdown
    pub fn with_city(mut self, city: CityReport) -> Self {
        self.region.cities.push(city);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserialize_api_shape() {
        let json = r#"{
            "date": "2021-01-01",
            "confirmed": 1462297,
            "deaths": 47768,
            "recovered": 0,
            "confirmed_diff": 9262,
            "deaths_diff": 101,
            "active": 1414529,
            "fatality_rate": 0.0327,
            "region": {
                "iso": "BRA",
                "name": "Brazil",
                "province": "Sao Paulo",
                "lat": "-23.5505",
                "long": "-46.6333",
                "cities": [
                    {"name": "Campinas", "date": "2021-01-01", "fips": null, "lat": null,
                     "long": null, "confirmed": 38000, "deaths": 1200,
                     "confirmed_diff": 410, "deaths_diff": 3}
                ]
            }
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.region.province, "Sao Paulo");
        assert_eq!(report.confirmed, 1462297);
        assert_eq!(report.confirmed_diff, 9262);
        assert_eq!(report.region.cities.len(), 1);
        assert_eq!(report.region.cities[0].name, "Campinas");
    }

    #[test]
    fn test_report_without_cities() {
        let json = r#"{"date":"2021-01-01","confirmed":10,"confirmed_diff":-2,
            "region":{"name":"Brazil","province":"Acre"}}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert!(report.region.cities.is_empty());
        assert_eq!(report.confirmed_diff, -2);
    }
}
