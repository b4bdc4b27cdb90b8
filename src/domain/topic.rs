//! Topic names for push notifications
//!
//! Subscribers register for topics built from the same components, so the
//! output of [`generate_topic`] must stay stable across releases.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped by ECMAScript `encodeURI`
///
/// URI delimiters and unreserved marks pass through untouched; everything
/// else, including all non-ASCII text, is percent-encoded as UTF-8.
const URI_ESCAPED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters dropped from every encoded component
const STRIPPED: [char; 3] = ['\'', '(', ')'];

/// Separator placed between components
pub const TOPIC_SEPARATOR: &str = "_";

/// Build a topic from ordered name components
///
/// # Examples
///
/// ```
/// use covid_alerts::domain::topic::generate_topic;
///
/// assert_eq!(generate_topic(&["Brazil", "Sao Paulo"]), "Brazil_Sao%20Paulo");
/// assert_eq!(generate_topic::<&str>(&[]), "");
/// ```
pub fn generate_topic<S: AsRef<str>>(components: &[S]) -> String {
    components
        .iter()
        .map(|component| encode_component(component.as_ref()))
        .collect::<Vec<_>>()
        .join(TOPIC_SEPARATOR)
}

fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, URI_ESCAPED)
        .to_string()
        .replace(&STRIPPED[..], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&["A", "B"], "A_B" ; "two components")]
    #[test_case(&[], "" ; "no components")]
    #[test_case(&["Brazil"], "Brazil" ; "single component has no separator")]
    #[test_case(&["Brazil", "SP"], "Brazil_SP" ; "region and province")]
    #[test_case(&["Brazil", "Sao Paulo"], "Brazil_Sao%20Paulo" ; "spaces are encoded")]
    #[test_case(&["Brazil", "São Paulo"], "Brazil_S%C3%A3o%20Paulo" ; "non ascii is utf8 encoded")]
    #[test_case(&["US", "Hawaii", "Kalawao"], "US_Hawaii_Kalawao" ; "three components")]
    #[test_case(&["Korea, South"], "Korea,%20South" ; "uri delimiters are kept")]
    #[test_case(&["Cote d'Ivoire"], "Cote%20dIvoire" ; "apostrophe is stripped")]
    #[test_case(&["Mary's (O'Brien) (City)"], "Marys%20OBrien%20City" ; "every stripped character is removed")]
    #[test_case(&["A", ""], "A_" ; "empty trailing component keeps one separator")]
    fn test_generate_topic(components: &[&str], expected: &str) {
        assert_eq!(generate_topic(components), expected);
    }

    #[test]
    fn test_generate_topic_is_deterministic() {
        let components = vec!["Brazil".to_string(), "Rio de Janeiro".to_string()];
        assert_eq!(generate_topic(&components), generate_topic(&components));
    }

    #[test]
    fn test_single_component_has_no_edge_separators() {
        let topic = generate_topic(&["Ontario"]);
        assert!(!topic.starts_with(TOPIC_SEPARATOR));
        assert!(!topic.ends_with(TOPIC_SEPARATOR));
    }
}
