//! UI session state for the single-page risk form.
//!
//! The form values, the in-flight flag, the last error and the last result
//! live in one serializable `Session`. Transitions:
//!
//! ```text
//! Idle --begin_submit--> Submitting --complete(Ok)--> Succeeded
//!                                  \--complete(Err)--> Failed --edit--> Idle
//! ```
//!
//! Only one request may be in flight; a second `begin_submit` is rejected
//! rather than cancelling the first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FAILURE_MESSAGE, RequestFailure, SessionError};
use crate::parameters::{FIELD_KEYS, HealthParameters, RawValue, field_key};
use crate::segment::{SegmentedResult, segment};

/// Fallback shown when a reply contained neither section
pub const NO_RESULTS_MESSAGE: &str = "No results to display.";

/// Where the session is in the request lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded(SegmentedResult),
    Failed(String),
}

/// What the renderer should display for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Nothing submitted yet, or the last error was cleared by an edit
    Form,
    Loading,
    Error(&'a str),
    Results {
        predictions: &'a [String],
        recommendations: &'a [String],
    },
    /// A reply arrived but neither section produced a line
    NoResults,
}

/// Form inputs plus request state for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    inputs: BTreeMap<String, String>,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with every field blank
    pub fn new() -> Self {
        Self {
            inputs: FIELD_KEYS
                .iter()
                .map(|k| (k.to_string(), String::new()))
                .collect(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn input(&self, field: &str) -> Option<&str> {
        self.inputs.get(field).map(String::as_str)
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Update one form value. An edit clears a displayed error.
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> Result<(), SessionError> {
        let key = field_key(field).ok_or_else(|| SessionError::UnknownField(field.to_string()))?;
        self.inputs.insert(key.to_string(), value.into());
        if matches!(self.phase, Phase::Failed(_)) {
            self.phase = Phase::Idle;
        }
        Ok(())
    }

    /// Start a prediction request.
    ///
    /// Returns the validated parameters to send. The previous result is
    /// dropped; invalid inputs leave the session in `Failed`.
    pub fn begin_submit(&mut self) -> Result<HealthParameters, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }

        let inputs = &self.inputs;
        match HealthParameters::from_lookup(|key| inputs.get(key).map(|v| RawValue::Text(v))) {
            Ok(params) => {
                self.phase = Phase::Submitting;
                Ok(params)
            }
            Err(e) => {
                self.phase = Phase::Failed(FAILURE_MESSAGE.to_string());
                Err(e.into())
            }
        }
    }

    /// Record the outcome of the in-flight request, replacing any prior result
    pub fn complete(&mut self, outcome: Result<String, RequestFailure>) -> Result<(), SessionError> {
        if !self.is_busy() {
            return Err(SessionError::NotSubmitting);
        }

        self.phase = match outcome {
            Ok(raw) => Phase::Succeeded(segment(&raw)),
            Err(failure) => Phase::Failed(failure.user_message().to_string()),
        };
        Ok(())
    }

    pub fn view(&self) -> View<'_> {
        match &self.phase {
            Phase::Idle => View::Form,
            Phase::Submitting => View::Loading,
            Phase::Failed(message) => View::Error(message),
            Phase::Succeeded(result) if result.is_empty() => View::NoResults,
            Phase::Succeeded(result) => View::Results {
                predictions: &result.predictions,
                recommendations: &result.recommendations,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParameterError;

    const REPLY: &str = "📋 Prediction Summary of Risk\n-----\nHigh risk of hypertension\n\n✅ Recommendations & Precautions\n-----\n- Eat less salt\n";

    fn filled() -> Session {
        let mut session = Session::new();
        let values = [
            ("age", "45"),
            ("systolicBP", "150"),
            ("diastolicBP", "95"),
            ("glucose", "130"),
            ("cholesterol", "220"),
            ("tsh", "2.5"),
            ("t3", "120"),
            ("t4", "8"),
            ("alt", "40"),
            ("ast", "38"),
            ("bilirubin", "1.1"),
        ];
        for (field, value) in values {
            session.edit(field, value).unwrap();
        }
        session
    }

    #[test]
    fn test_successful_round() {
        let mut session = filled();
        assert_eq!(session.view(), View::Form);

        let params = session.begin_submit().unwrap();
        assert_eq!(params.systolic_bp, 150.0);
        assert_eq!(session.view(), View::Loading);

        session.complete(Ok(REPLY.to_string())).unwrap();
        match session.view() {
            View::Results {
                predictions,
                recommendations,
            } => {
                assert_eq!(predictions, ["High risk of hypertension"]);
                assert_eq!(recommendations, ["Eat less salt"]);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_single_flight() {
        let mut session = filled();
        session.begin_submit().unwrap();
        assert_eq!(session.begin_submit(), Err(SessionError::Busy));
        assert!(session.is_busy());
    }

    #[test]
    fn test_complete_without_submit() {
        let mut session = filled();
        assert_eq!(
            session.complete(Ok(REPLY.to_string())),
            Err(SessionError::NotSubmitting)
        );
    }

    #[test]
    fn test_failure_then_edit_clears_error() {
        let mut session = filled();
        session.begin_submit().unwrap();
        session
            .complete(Err(RequestFailure::new("connection refused")))
            .unwrap();
        assert_eq!(session.view(), View::Error(FAILURE_MESSAGE));

        session.edit("age", "46").unwrap();
        assert_eq!(session.view(), View::Form);
        assert_eq!(session.input("age"), Some("46"));
    }

    #[test]
    fn test_invalid_inputs_fail_without_request() {
        let mut session = filled();
        session.edit("glucose", "").unwrap();
        assert_eq!(
            session.begin_submit(),
            Err(SessionError::InvalidInput(ParameterError::Missing("glucose")))
        );
        assert_eq!(session.view(), View::Error(FAILURE_MESSAGE));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_unknown_field() {
        let mut session = Session::new();
        assert_eq!(
            session.edit("weight", "80"),
            Err(SessionError::UnknownField("weight".to_string()))
        );
    }

    #[test]
    fn test_result_replaced_not_merged() {
        let mut session = filled();
        session.begin_submit().unwrap();
        session.complete(Ok(REPLY.to_string())).unwrap();

        session.begin_submit().unwrap();
        assert_eq!(session.view(), View::Loading);
        session
            .complete(Ok("Recommendations\n- Sleep more".to_string()))
            .unwrap();
        assert_eq!(
            session.phase(),
            &Phase::Succeeded(SegmentedResult {
                predictions: vec![],
                recommendations: vec!["Sleep more".to_string()],
            })
        );
    }

    #[test]
    fn test_reply_without_headings_selects_fallback() {
        let mut session = filled();
        session.begin_submit().unwrap();
        session.complete(Ok("   \n".to_string())).unwrap();
        assert_eq!(session.view(), View::NoResults);
    }

    #[test]
    fn test_serializable() {
        let mut session = filled();
        session.begin_submit().unwrap();
        session.complete(Ok(REPLY.to_string())).unwrap();

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["phase"]["state"], "succeeded");
        assert_eq!(json["inputs"]["tsh"], "2.5");

        let restored: Session = serde_json::from_value(json).unwrap();
        assert_eq!(restored, session);
    }
}
