//! health-risk-core: domain types for the health risk predictor
//!
//! This crate holds everything that does not touch the network: the
//! submitted health parameters, the prompt template, the segmentation of the
//! model's reply into predictions and recommendations, and the UI session
//! state machine.

pub mod error;
pub mod parameters;
pub mod prompt;
pub mod segment;
pub mod session;

pub use error::{FAILURE_MESSAGE, ParameterError, RequestFailure, SessionError};
pub use parameters::{FIELD_KEYS, FIELD_SECTIONS, FieldSection, FieldSpec, HealthParameters};
pub use prompt::build_prompt;
pub use segment::{SegmentedResult, segment};
pub use session::{NO_RESULTS_MESSAGE, Phase, Session, View};
