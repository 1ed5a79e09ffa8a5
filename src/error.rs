use thiserror::Error;

use crate::pollutant::{Pollutant, Window};
use crate::scale::ScaleId;

/// Errors for a single evaluation call. None are retriable and none are
/// fatal; callers receive the typed failure and may re-invoke with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AqiError {
    /// Concentrations are physical measurements; negative or non-finite
    /// values are rejected before any table lookup.
    #[error("invalid concentration {value}: readings must be finite and non-negative")]
    InvalidInput { value: f64 },

    /// A pollutant the chosen scale treats as mandatory was not supplied.
    #[error("{scale} requires a {pollutant} ({window}) reading")]
    MissingPollutant {
        scale: ScaleId,
        pollutant: Pollutant,
        window: Window,
    },

    /// Every pollutant the scale could use was either omitted (optional)
    /// or excluded by the scale's own validity conditions.
    #[error("no sub-index could be produced for {scale}")]
    InsufficientData { scale: ScaleId },

    /// A negative index was passed to the descriptor mapper.
    #[error("index {0} is negative and has no descriptor")]
    InvalidAqi(i32),

    /// The scale's formula or tables are not defined in this build.
    #[error("{0} has no published formula in this build")]
    UnsupportedScale(ScaleId),
}
