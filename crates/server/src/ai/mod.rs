//! AI features powered by the Gemini API

pub mod client;
pub mod predictor;

pub use client::GeminiClient;
