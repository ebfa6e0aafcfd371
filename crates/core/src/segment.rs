//! Heading-based segmentation of the model's free-text reply.
//!
//! The model is asked (not forced) to answer with a "Prediction Summary of
//! Risk" section followed by a "Recommendations" section. `segment` recovers
//! the two bullet lists from whatever text actually comes back. It is total:
//! any input yields a result, in the worst case two empty lists.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Heading line that opens the predictions block.
/// The phrase may sit anywhere on the line ("Here is the Prediction Summary
/// of Risk:"); everything else on that line belongs to the heading.
static PREDICTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bprediction\s+summary\s+of\s+risks?\b").unwrap()
});

/// Heading line that opens the recommendations block: a decorative prefix,
/// optional qualifiers ("Personalized"), then "Recommendations" and any
/// title text ("& Specific Precautions for the Patient").
static RECOMMENDATIONS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[^\p{L}\p{N}]|\d+[.)])*(?:(?:personali[sz]ed|key|general|health|lifestyle|medical|specific|clinical|practical|final|additional|important|your|our|my)\s+)*recommendations\b(?P<rest>.*)$",
    )
    .unwrap()
});

/// "Recommendations: cut sugar" is a labelled line of content, not a heading
static LABELLED_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*:+[^\p{L}\p{N}]*[\p{L}\p{N}]").unwrap());

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-_—–─]+$").unwrap());

/// Leading bullets ("-", "•", "*") and numbered list markers ("1.", "2)")
static BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-•*▪◦–]+\s*|\d+[.)](?:\s+|$))+").unwrap()
});

static ADVICE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:recommendations?|advices?)(?:\s*:+|\s+)").unwrap()
});

/// Predictions and recommendations recovered from one model reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedResult {
    pub predictions: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SegmentedResult {
    /// True when neither section produced a line; the renderer falls back
    /// to a "no results" message.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty() && self.recommendations.is_empty()
    }
}

/// Split a raw model reply into prediction and recommendation lines.
///
/// The predictions block runs from the first prediction heading to the next
/// recommendations heading (or end of text). The recommendations block runs
/// from the first recommendations heading to end of text, whatever order the
/// headings appear in.
pub fn segment(raw: &str) -> SegmentedResult {
    let lines: Vec<&str> = raw.split(['\n', '\r']).collect();

    let predictions = match lines.iter().position(|l| is_prediction_heading(l)) {
        Some(start) => {
            let body = &lines[start + 1..];
            let end = body
                .iter()
                .position(|l| is_recommendations_heading(l))
                .unwrap_or(body.len());
            collect_block(&body[..end], clean_prediction_line)
        }
        None => Vec::new(),
    };

    let recommendations = match lines.iter().position(|l| is_recommendations_heading(l)) {
        Some(start) => collect_block(&lines[start + 1..], clean_recommendation_line),
        None => Vec::new(),
    };

    SegmentedResult {
        predictions,
        recommendations,
    }
}

/// Strip a leading bullet or list number from a prediction line
pub fn clean_prediction_line(line: &str) -> String {
    BULLET_PREFIX.replace(line.trim(), "").trim().to_string()
}

/// Strip a leading bullet, then a leading "Recommendation:" / "Advice:" label
pub fn clean_recommendation_line(line: &str) -> String {
    let without_bullet = clean_prediction_line(line);
    ADVICE_PREFIX
        .replace(&without_bullet, "")
        .trim()
        .to_string()
}

fn is_prediction_heading(line: &str) -> bool {
    PREDICTION_HEADING.is_match(line.trim())
}

fn is_recommendations_heading(line: &str) -> bool {
    let line = line.trim();
    let Some(caps) = RECOMMENDATIONS_HEADING.captures(line) else {
        return false;
    };
    let rest = caps.name("rest").map_or("", |m| m.as_str());
    !LABELLED_CONTENT.is_match(rest) && !line.ends_with('.')
}

fn collect_block(lines: &[&str], clean: fn(&str) -> String) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !SEPARATOR.is_match(l))
        .filter(|l| !is_prediction_heading(l) && !is_recommendations_heading(l))
        .map(clean)
        .filter(|l| !l.is_empty())
        .collect()
}
