//! Notification message formatting

use crate::domain::{generate_topic, CityReport, Message, MessageData, Notification, Report};

/// Build the province-level notification for a report
///
/// # Examples
///
/// ```
/// use covid_alerts::core::notify::generate_state_message;
/// use covid_alerts::domain::Report;
///
/// let report = Report::new("Brazil", "SP", "2021-01-01", 100, 5);
/// let message = generate_state_message(&report);
/// assert_eq!(message.topic, "Brazil_SP");
/// ```
pub fn generate_state_message(report: &Report) -> Message {
    let region = &report.region;

    Message {
        notification: Notification {
            title: format!("Latest COVID-19 Cases for {}", region.province),
            body: format!(
                "{} has {} confirmed cases of COVID-19 as of {}, which is a difference of {} from the previous day.",
                region.province, report.confirmed, report.date, report.confirmed_diff
            ),
        },
        data: MessageData {
            name: region.name.clone(),
            province: region.province.clone(),
            city: None,
            date: report.date.clone(),
        },
        topic: generate_topic(&[&region.name, &region.province]),
    }
}

/// Build the city-level notification for one city of a report
///
/// `data.date` carries the report date; the body uses the city's own date.
pub fn generate_city_message(report: &Report, city: &CityReport) -> Message {
    let region = &report.region;

    Message {
        notification: Notification {
            title: format!("Latest COVID-19 Cases for {}, {}", city.name, region.province),
            body: format!(
                "{}, {} has {} confirmed cases of COVID-19 as of {}, which is a difference of {} from the previous day.",
                city.name, region.province, city.confirmed, city.date, city.confirmed_diff
            ),
        },
        data: MessageData {
            name: region.name.clone(),
            province: region.province.clone(),
            city: Some(city.name.clone()),
            date: report.date.clone(),
        },
        topic: generate_topic(&[&region.name, &region.province, &city.name]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city() -> CityReport {
        CityReport {
            name: "Campinas".to_string(),
            confirmed: 40,
            confirmed_diff: 2,
            date: "2020-12-31".to_string(),
        }
    }

    #[test]
    fn test_state_message() {
        let report = Report::new("Brazil", "SP", "2021-01-01", 100, 5);
        let message = generate_state_message(&report);

        assert_eq!(message.topic, "Brazil_SP");
        assert_eq!(message.notification.title, "Latest COVID-19 Cases for SP");
        assert_eq!(
            message.notification.body,
            "SP has 100 confirmed cases of COVID-19 as of 2021-01-01, which is a difference of 5 from the previous day."
        );
        assert_eq!(message.data.name, "Brazil");
        assert_eq!(message.data.province, "SP");
        assert_eq!(message.data.date, "2021-01-01");
        assert!(!message.is_city_message());
    }

    #[test]
    fn test_state_message_serialized_data_has_no_city() {
        let report = Report::new("Brazil", "SP", "2021-01-01", 100, 5);
        let value = serde_json::to_value(generate_state_message(&report)).unwrap();
        assert!(value["data"].get("city").is_none());
    }

    #[test]
    fn test_negative_diff_is_rendered() {
        let report = Report::new("Brazil", "SP", "2021-01-01", 90, -10);
        let message = generate_state_message(&report);
        assert!(message.notification.body.contains("difference of -10"));
    }

    #[test]
    fn test_city_message() {
        let report = Report::new("Brazil", "Sao Paulo", "2021-01-01", 100, 5);
        let message = generate_city_message(&report, &city());

        assert_eq!(message.topic, "Brazil_Sao%20Paulo_Campinas");
        assert_eq!(
            message.notification.title,
            "Latest COVID-19 Cases for Campinas, Sao Paulo"
        );
        assert_eq!(
            message.notification.body,
            "Campinas, Sao Paulo has 40 confirmed cases of COVID-19 as of 2020-12-31, which is a difference of 2 from the previous day."
        );
        assert_eq!(message.data.city.as_deref(), Some("Campinas"));
        assert_eq!(message.data.date, "2021-01-01");
    }
}
