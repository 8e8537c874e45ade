//! Boundary to an external text-generation service that comments on a
//! decomposition. Only the prompt and the fallback policy live here; the
//! service itself is supplied by the caller.

use crate::{
    constants::FALLBACK_ANALYSIS, decomposer::DecompositionResult, format::format_shortest,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("insight service unavailable: {0}")]
    Unavailable(String),
    #[error("insight service returned no text")]
    EmptyResponse,
}

pub trait InsightSource {
    fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}

impl<F> InsightSource for F
where
    F: Fn(&str) -> Result<String, InsightError>,
{
    fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        self(prompt)
    }
}

pub fn build_prompt(result: &DecompositionResult) -> String {
    let t = result.translation;
    let d = result.euler_degrees;
    let m = result.matrix;
    let n = format_shortest;

    format!(
        "As a robotics and computer vision expert, analyze this 3x4 transformation matrix data:

Translation (X, Y, Z): {}, {}, {}
Euler Angles (Degrees - Roll, Pitch, Yaw): {}, {}, {}

Rotation Matrix:
[{}, {}, {}]
[{}, {}, {}]
[{}, {}, {}]

Please provide:
1. A brief interpretation of what this orientation looks like (e.g., \"pointing mostly forward but tilted slightly down\").
2. Check if the rotation matrix is orthogonal (unitary check).
3. Potential physical context (is this a typical camera pose, sensor mount, etc?).
4. Mathematical summary of the transformation.

Keep the explanation professional and concise.
",
        n(t.x),
        n(t.y),
        n(t.z),
        n(d.roll),
        n(d.pitch),
        n(d.yaw),
        n(m.r11),
        n(m.r12),
        n(m.r13),
        n(m.r21),
        n(m.r22),
        n(m.r23),
        n(m.r31),
        n(m.r32),
        n(m.r33),
    )
}

/// Asks `source` about `result`, relaying its text or the fallback message.
pub fn analyze(source: &impl InsightSource, result: &DecompositionResult) -> String {
    match source.generate(&build_prompt(result)) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            log::error!("Insight analysis failed: {}", InsightError::EmptyResponse);
            FALLBACK_ANALYSIS.to_string()
        }
        Err(error) => {
            log::error!("Insight analysis failed: {error}");
            FALLBACK_ANALYSIS.to_string()
        }
    }
}
