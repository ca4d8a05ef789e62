//! Risk classification infrastructure

mod gemini;

pub use gemini::{GeminiRiskClassifier, API_KEY_ENV, MODEL_ENV};
