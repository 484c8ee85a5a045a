use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::easing::Easing;
use crate::keyframe::Keyframe;
use crate::options::TimelineOptions;
use crate::timeline::{create_timeline, Timeline};
use crate::Result;

/// Timeline as stored in JSON: keyframes plus an easing curve selected by name.
///
/// ```json
/// { "name": "fade", "ease": "inOut", "frames": [ { "time": 0, "value": 0 } ] }
/// ```
///
/// Deserializing goes through the same lenient easing lookup as
/// [`parse_stored_timeline_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredTimeline<T> {
    pub name: Option<String>,
    pub ease: Easing,
    pub frames: Vec<Keyframe<T>>,
}

#[derive(Deserialize)]
struct RawStoredTimeline<T> {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ease: Option<String>,
    frames: Vec<Keyframe<T>>,
}

impl<T> StoredTimeline<T> {
    fn from_raw(raw: RawStoredTimeline<T>) -> Self {
        let ease = match raw.ease.as_deref() {
            None => Easing::Linear,
            Some(name) => Easing::from_name(name).unwrap_or_else(|| {
                log::warn!(
                    "stored timeline {:?}: unknown easing '{}', using linear",
                    raw.name,
                    name
                );
                Easing::Linear
            }),
        };
        Self {
            name: raw.name,
            ease,
            frames: raw.frames,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StoredTimeline<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawStoredTimeline::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Public API: parse StoredTimeline JSON.
///
/// Notes:
/// - `ease` is optional and matched leniently; unknown names fall back to
///   linear with a warning.
/// - An empty `frames` array parses fine and is rejected by
///   [`StoredTimeline::into_timeline`].
pub fn parse_stored_timeline_json<T: DeserializeOwned>(s: &str) -> Result<StoredTimeline<T>> {
    let stored: StoredTimeline<T> = serde_json::from_str(s)?;
    log::debug!(
        "stored timeline {:?}: {} keyframe(s), ease={}",
        stored.name,
        stored.frames.len(),
        stored.ease.name()
    );
    Ok(stored)
}

impl<T: 'static> StoredTimeline<T> {
    /// Build the evaluator. An `ease` in `options` wins over the stored name;
    /// `lerp` follows the usual rules of [`create_timeline`].
    pub fn into_timeline(self, options: Option<TimelineOptions<T>>) -> Result<Timeline<T>> {
        let mut options = options.unwrap_or_default();
        if options.ease.is_none() {
            options = options.with_ease(self.ease.as_fn());
        }
        create_timeline(self.frames, Some(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MissingInterpolatorReason, TimelineError};

    #[test]
    fn parses_numeric_timeline_with_ease() {
        let json = r#"{ "name": "fade", "ease": "inOut",
            "frames": [ { "time": 0, "value": 0 }, { "time": 1, "value": 10 } ] }"#;
        let stored: StoredTimeline<f64> = parse_stored_timeline_json(json).unwrap();
        assert_eq!(stored.name.as_deref(), Some("fade"));
        assert_eq!(stored.ease, Easing::InOut);
        let tl = stored.into_timeline(None).unwrap();
        assert_eq!(tl.evaluate(0.25), crate::easing::ease_in_out(0.25) * 10.0);
    }

    #[test]
    fn missing_ease_defaults_to_linear() {
        let json = r#"{ "frames": [ { "time": 0, "value": 0 }, { "time": 4, "value": 8 } ] }"#;
        let stored: StoredTimeline<f64> = parse_stored_timeline_json(json).unwrap();
        assert_eq!(stored.ease, Easing::Linear);
        assert_eq!(stored.into_timeline(None).unwrap().evaluate(1.0), 2.0);
    }

    #[test]
    fn unknown_ease_falls_back_to_linear() {
        let json = r#"{ "ease": "bounce", "frames": [ { "time": 0, "value": 1 } ] }"#;
        let stored: StoredTimeline<f64> = parse_stored_timeline_json(json).unwrap();
        assert_eq!(stored.ease, Easing::Linear);
    }

    #[test]
    fn explicit_ease_option_wins() {
        let json = r#"{ "ease": "in", "frames": [ { "time": 0, "value": 0 }, { "time": 1, "value": 1 } ] }"#;
        let stored: StoredTimeline<f64> = parse_stored_timeline_json(json).unwrap();
        let tl = stored
            .into_timeline(Some(TimelineOptions::new().with_ease(crate::easing::EASE_LINEAR)))
            .unwrap();
        assert_eq!(tl.evaluate(0.25), 0.25);
    }

    #[test]
    fn empty_frames_rejected_on_build() {
        let stored: StoredTimeline<f64> = parse_stored_timeline_json(r#"{ "frames": [] }"#).unwrap();
        assert_eq!(stored.into_timeline(None).unwrap_err(), TimelineError::EmptyFrames);
    }

    #[test]
    fn non_numeric_without_lerp_reports_missing_lerp() {
        let json = r#"{ "frames": [ { "time": 0, "value": "a" } ] }"#;
        let stored: StoredTimeline<String> = parse_stored_timeline_json(json).unwrap();
        // into_timeline always passes options, so the missing piece is `lerp`.
        assert_eq!(
            stored.into_timeline(None).unwrap_err(),
            TimelineError::missing_interpolator(MissingInterpolatorReason::NoLerp)
        );
    }

    #[test]
    fn serde_deserialize_matches_parser() {
        let json = r#"{ "ease": "ease-in-out", "frames": [ { "time": 0, "value": 0 } ] }"#;
        let direct: StoredTimeline<f64> = serde_json::from_str(json).unwrap();
        let parsed: StoredTimeline<f64> = parse_stored_timeline_json(json).unwrap();
        assert_eq!(direct.ease, Easing::InOut);
        assert_eq!(direct, parsed);

        let unknown = r#"{ "ease": "bounce", "frames": [] }"#;
        let direct: StoredTimeline<f64> = serde_json::from_str(unknown).unwrap();
        assert_eq!(direct.ease, Easing::Linear);
        assert_eq!(direct.name, None);
    }

    #[test]
    fn serialized_form_reads_back() {
        let stored = StoredTimeline {
            name: Some("pulse".to_string()),
            ease: Easing::Out,
            frames: vec![Keyframe::new(0.0, 1.0), Keyframe::new(2.0, 3.0)],
        };
        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredTimeline<f64> = parse_stored_timeline_json(&json).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_stored_timeline_json::<f64>("{ \"frames\": ").unwrap_err();
        assert!(matches!(err, TimelineError::Serialization { .. }));
    }
}
