use serde::{Deserialize, Serialize};

/// An anchor point on a timeline: `value` holds exactly at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T> {
    /// Position on the timeline. Any real number; need not be unique.
    pub time: f64,
    pub value: T,
}

impl<T> Keyframe<T> {
    #[inline]
    pub fn new(time: f64, value: T) -> Self {
        Self { time, value }
    }
}

impl<T> From<(f64, T)> for Keyframe<T> {
    #[inline]
    fn from((time, value): (f64, T)) -> Self {
        Self { time, value }
    }
}
