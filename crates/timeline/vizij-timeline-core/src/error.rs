//! Error types for timeline construction

use std::fmt;

/// Why a non-numeric timeline could not resolve its value interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInterpolatorReason {
    /// No options were passed at all.
    NoOptions,
    /// Options were passed but carry no `lerp`.
    NoLerp,
}

impl fmt::Display for MissingInterpolatorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOptions => f.write_str(
                "the options argument is required when the value is anything other than a number; \
                 it must provide the \"lerp\" option",
            ),
            Self::NoLerp => f.write_str(
                "the \"lerp\" option must be provided when the value is anything other than a number",
            ),
        }
    }
}

/// Errors raised while building a timeline. Evaluation itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimelineError {
    /// No keyframes were supplied
    #[error("Timeline requires at least one keyframe")]
    EmptyFrames,

    /// Non-numeric values without a value interpolator
    #[error("Missing interpolator: {reason}")]
    MissingInterpolator { reason: MissingInterpolatorReason },

    /// Stored timeline could not be decoded
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl TimelineError {
    #[inline]
    pub fn missing_interpolator(reason: MissingInterpolatorReason) -> Self {
        Self::MissingInterpolator { reason }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyFrames => "input",
            Self::MissingInterpolator { .. } => "configuration",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        let no_options = TimelineError::missing_interpolator(MissingInterpolatorReason::NoOptions);
        let no_lerp = TimelineError::missing_interpolator(MissingInterpolatorReason::NoLerp);
        assert!(no_options.to_string().contains("options"));
        assert!(no_lerp.to_string().contains("\"lerp\""));
        assert_ne!(no_options.to_string(), no_lerp.to_string());
    }

    #[test]
    fn categories() {
        assert_eq!(TimelineError::EmptyFrames.category(), "input");
        assert_eq!(
            TimelineError::missing_interpolator(MissingInterpolatorReason::NoLerp).category(),
            "configuration"
        );
        let parse: TimelineError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(parse.category(), "serialization");
    }
}
