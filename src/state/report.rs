/// The decoded analysis report
///
/// This is the immutable value the analysis service returns for one
/// submitted screenshot. It is deserialized straight from the response
/// body; `metrics` uses an `IndexMap` because the service's key order
/// is the display order.
use base64::Engine;
use indexmap::IndexMap;
use serde::Deserialize;

/// Quality assessment for one submitted UI screenshot.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Overall quality score, 0-100
    #[serde(rename = "overallScore")]
    pub overall_score: u8,

    /// Positive observations, in the order the service ranked them
    pub strengths: Vec<String>,

    /// Actionable suggestions, in the order the service ranked them
    pub improvements: Vec<String>,

    /// Per-category scores, 0-100 each; insertion order is display order
    pub metrics: IndexMap<String, u8>,

    /// Annotated copy of the screenshot with detected elements marked,
    /// as a data URI or a URL. Absent when the service did not run
    /// element detection.
    #[serde(default)]
    pub detected_image: Option<String>,
}

impl AnalysisReport {
    /// Parse a response body into a report.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Three-band quality rating used for the score bar and every metric
/// bar independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// score >= 80
    Strong,
    /// 60 <= score < 80
    Caution,
    /// score < 60
    Weak,
}

impl ScoreBand {
    pub fn for_value(value: u8) -> Self {
        if value >= 80 {
            ScoreBand::Strong
        } else if value >= 60 {
            ScoreBand::Caution
        } else {
            ScoreBand::Weak
        }
    }
}

/// Where the annotated image of a report lives.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedSource {
    /// Raw image bytes decoded from an inline data URI
    Inline(Vec<u8>),
    /// An address to fetch, possibly relative to the service base
    Url(String),
}

impl AnnotatedSource {
    /// Classify a `detected_image` value. Data URIs are decoded here;
    /// anything else is treated as an address for the client to fetch.
    /// Returns `None` for a malformed data URI.
    pub fn classify(source: &str) -> Option<Self> {
        if let Some(rest) = source.strip_prefix("data:") {
            let payload = rest.split_once(";base64,").map(|(_, data)| data)?;
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(payload.trim())
                .ok()?;
            Some(AnnotatedSource::Inline(bytes))
        } else {
            Some(AnnotatedSource::Url(source.to_string()))
        }
    }
}

/// Turn a raw metric key into a display label: `visualDesign` and
/// `visual_design` both become `Visual Design`. Display transform only;
/// lookups keep using the raw key.
pub fn humanize_metric(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut start_of_word = true;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            start_of_word = true;
            continue;
        }

        if ch.is_uppercase() && !label.is_empty() {
            start_of_word = true;
        }

        if start_of_word {
            if !label.is_empty() {
                label.push(' ');
            }
            label.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            label.push(ch);
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors the service's own fixture response.
    const SAMPLE: &str = r#"{
        "overallScore": 72,
        "improvements": [
            "Increase spacing between buttons.",
            "Text contrast is low, consider darker font."
        ],
        "strengths": [
            "Consistent button styling.",
            "Good use of whitespace."
        ],
        "metrics": {
            "accessibility": 65,
            "consistency": 75,
            "usability": 80,
            "visualDesign": 68
        }
    }"#;

    #[test]
    fn test_decodes_sample_response() {
        let report = AnalysisReport::from_json(SAMPLE.as_bytes()).unwrap();

        assert_eq!(report.overall_score, 72);
        assert_eq!(report.improvements.len(), 2);
        assert_eq!(report.strengths[1], "Good use of whitespace.");
        assert_eq!(report.detected_image, None);
    }

    #[test]
    fn test_metrics_preserve_insertion_order() {
        let body = r#"{
            "overallScore": 50,
            "strengths": [],
            "improvements": [],
            "metrics": { "contrast": 72, "spacing": 91 }
        }"#;
        let report = AnalysisReport::from_json(body.as_bytes()).unwrap();

        let entries: Vec<(&str, u8)> = report
            .metrics
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        assert_eq!(entries, vec![("contrast", 72), ("spacing", 91)]);
    }

    #[test]
    fn test_empty_lists_are_valid() {
        let body = r#"{
            "overallScore": 100,
            "strengths": [],
            "improvements": [],
            "metrics": {}
        }"#;
        let report = AnalysisReport::from_json(body.as_bytes()).unwrap();
        assert!(report.strengths.is_empty());
        assert!(report.metrics.is_empty());
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(AnalysisReport::from_json(b"not json").is_err());
        assert!(AnalysisReport::from_json(br#"{"overallScore": "high"}"#).is_err());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::for_value(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_value(79), ScoreBand::Caution);
        assert_eq!(ScoreBand::for_value(60), ScoreBand::Caution);
        assert_eq!(ScoreBand::for_value(59), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_value(0), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_value(100), ScoreBand::Strong);
    }

    #[test]
    fn test_data_uri_is_decoded_inline() {
        // "hi" in base64
        let source = "data:image/png;base64,aGk=";
        assert_eq!(
            AnnotatedSource::classify(source),
            Some(AnnotatedSource::Inline(b"hi".to_vec()))
        );
    }

    #[test]
    fn test_malformed_data_uri_is_rejected() {
        assert_eq!(AnnotatedSource::classify("data:image/png;base64,!!!"), None);
        assert_eq!(AnnotatedSource::classify("data:image/png,plain"), None);
    }

    #[test]
    fn test_plain_address_is_a_url() {
        assert_eq!(
            AnnotatedSource::classify("/media/detected/42.png"),
            Some(AnnotatedSource::Url("/media/detected/42.png".to_string()))
        );
    }

    #[test]
    fn test_humanize_metric_keys() {
        assert_eq!(humanize_metric("visualDesign"), "Visual Design");
        assert_eq!(humanize_metric("accessibility"), "Accessibility");
        assert_eq!(humanize_metric("color_contrast"), "Color Contrast");
        assert_eq!(humanize_metric(""), "");
    }
}
