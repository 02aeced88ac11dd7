//! Result Normalizer — maps wire records onto a render-ready model.
//!
//! One output per input, same order. Optional fields are carried only when the
//! record had them; presence decides, not value, so a score of 0 is shown.

use serde::Serialize;

use crate::models::result::ResultRecord;

/// An optional, present field of a result. A score sent as `null` is present
/// with no value; a `null` text field becomes empty text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ResultDetail {
    Score(Option<f64>),
    ModernScore(Option<f64>),
    Matched(String),
    Missing(String),
    CareerPath(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    pub filename: String,
    pub feedback: String,
    /// Present fields only, in display order.
    pub details: Vec<ResultDetail>,
}

pub fn normalize(records: Vec<ResultRecord>) -> Vec<DisplayResult> {
    records.into_iter().map(DisplayResult::from).collect()
}

impl From<ResultRecord> for DisplayResult {
    fn from(record: ResultRecord) -> Self {
        let details = [
            record.score.map(ResultDetail::Score),
            record.modern_score.map(ResultDetail::ModernScore),
            record.matched.map(|t| ResultDetail::Matched(t.unwrap_or_default())),
            record.missing.map(|t| ResultDetail::Missing(t.unwrap_or_default())),
            record
                .career_path
                .map(|t| ResultDetail::CareerPath(t.unwrap_or_default())),
        ]
        .into_iter()
        .flatten()
        .collect();

        DisplayResult {
            filename: record.filename,
            feedback: record.feedback,
            details,
        }
    }
}

impl ResultDetail {
    /// Career path is shown under the feedback; everything else above it.
    fn follows_feedback(&self) -> bool {
        matches!(self, ResultDetail::CareerPath(_))
    }

    pub fn render(&self) -> String {
        match self {
            ResultDetail::Score(score) => format!("Score: {}/100", score_text(*score)),
            ResultDetail::ModernScore(score) => {
                format!("Modern Tech Score: {}/100", score_text(*score))
            }
            ResultDetail::Matched(text) => format!("Matched: {text}"),
            ResultDetail::Missing(text) => format!("Missing: {text}"),
            ResultDetail::CareerPath(text) => text.clone(),
        }
    }
}

fn score_text(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

impl DisplayResult {
    pub fn score(&self) -> Option<f64> {
        self.details.iter().find_map(|d| match d {
            ResultDetail::Score(s) => *s,
            _ => None,
        })
    }

    /// Text lines for display: filename, scores and keyword lists, feedback, career path.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![self.filename.clone()];
        lines.extend(
            self.details
                .iter()
                .filter(|d| !d.follows_feedback())
                .map(ResultDetail::render),
        );
        lines.push(self.feedback.clone());
        lines.extend(
            self.details
                .iter()
                .filter(|d| d.follows_feedback())
                .map(ResultDetail::render),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ResultRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_match_record_only_has_present_fields() {
        let out = normalize(vec![record(
            r#"{"filename":"resume.pdf","score":82,"feedback":"Good fit"}"#,
        )]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].filename, "resume.pdf");
        assert_eq!(out[0].feedback, "Good fit");
        assert_eq!(out[0].details, vec![ResultDetail::Score(Some(82.0))]);
        assert_eq!(out[0].score(), Some(82.0));
    }

    #[test]
    fn test_zero_and_empty_values_are_kept() {
        let out = normalize(vec![record(
            r#"{"filename":"a.pdf","feedback":"","score":0,"matched":"","career_path":""}"#,
        )]);
        assert_eq!(
            out[0].details,
            vec![
                ResultDetail::Score(Some(0.0)),
                ResultDetail::Matched(String::new()),
                ResultDetail::CareerPath(String::new()),
            ]
        );
    }

    #[test]
    fn test_order_and_length_preserved() {
        let input = vec![
            record(r#"{"filename":"low.pdf","score":10,"feedback":"a"}"#),
            record(r#"{"filename":"high.pdf","score":90,"feedback":"b"}"#),
            record(r#"{"filename":"low.pdf","feedback":"c"}"#),
        ];
        let out = normalize(input);
        let names: Vec<&str> = out.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["low.pdf", "high.pdf", "low.pdf"]);
        assert!(out[2].details.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn test_render_lines_match_mode() {
        let out = DisplayResult::from(record(
            r#"{"filename":"a.pdf","score":75,"matched":"Rust, SQL","missing":"Kafka","feedback":"Solid."}"#,
        ));
        assert_eq!(
            out.render_lines(),
            vec![
                "a.pdf",
                "Score: 75/100",
                "Matched: Rust, SQL",
                "Missing: Kafka",
                "Solid.",
            ]
        );
    }

    #[test]
    fn test_render_lines_tech_audit_puts_career_path_last() {
        let out = DisplayResult::from(record(
            r#"{"filename":"a.pdf","feedback":"- uses jQuery","career_path":"Backend engineer","modern_score":40}"#,
        ));
        assert_eq!(
            out.render_lines(),
            vec![
                "a.pdf",
                "Modern Tech Score: 40/100",
                "- uses jQuery",
                "Backend engineer",
            ]
        );
    }

    #[test]
    fn test_fractional_score_renders_as_is() {
        assert_eq!(ResultDetail::Score(Some(82.5)).render(), "Score: 82.5/100");
    }

    #[test]
    fn test_null_fields_are_shown_as_present() {
        let out = DisplayResult::from(record(
            r#"{"filename":"a.pdf","feedback":"x","score":null,"career_path":null}"#,
        ));
        assert_eq!(
            out.details,
            vec![
                ResultDetail::Score(None),
                ResultDetail::CareerPath(String::new()),
            ]
        );
        assert_eq!(out.score(), None);
        assert_eq!(out.render_lines(), vec!["a.pdf", "Score: /100", "x", ""]);
    }

    #[test]
    fn test_serialized_form_has_no_absent_fields() {
        let out = DisplayResult::from(record(r#"{"filename":"a.pdf","feedback":"ok"}"#));
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"filename":"a.pdf","feedback":"ok","details":[]})
        );
    }
}
