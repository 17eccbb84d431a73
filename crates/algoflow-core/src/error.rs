//! Error types for algoflow-core.
//!
//! Navigation and playback never fail: unknown targets fall back to the
//! landing view and indices are clamped. Errors only surface while building
//! the topic registry or decoding user input at the edges.

use thiserror::Error;

use crate::topic::TopicId;

/// Result type for algoflow-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling content or parsing controls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A topic with this identifier is already registered.
    #[error("topic already registered: {0}")]
    DuplicateTopic(TopicId),

    /// A topic must provide at least one narrative step.
    #[error("topic {0} has no steps")]
    EmptySteps(TopicId),

    /// Speed multiplier outside the supported set.
    #[error("unsupported speed multiplier: {0} (expected 0.5, 1, 1.5 or 2)")]
    UnsupportedSpeed(f64),
}
