//! Segment lookup for a sorted keyframe slice.
//!
//! Model:
//! - Keyframes are sorted ascending by time (ties keep insertion order).
//! - Queries at or before the first keyframe clamp to it; queries at or after
//!   the last clamp to it. Both report a ratio of 0.
//! - Anything else lands in the first segment whose right edge is at or after
//!   the query, so an exact hit on an interior keyframe reports ratio 1 against
//!   its predecessor.

use crate::keyframe::Keyframe;
use crate::lerp::inverse_lerp;

/// Find the keyframes bracketing `time` and the raw ratio between them.
///
/// `frames` must be non-empty and sorted ascending by time; timelines guarantee
/// both at construction. With two or more keyframes a NaN `time` fails every
/// comparison and ends up on the last segment with a NaN ratio.
pub fn locate_frames<T>(frames: &[Keyframe<T>], time: f64) -> (&Keyframe<T>, &Keyframe<T>, f64) {
    let first = &frames[0];
    let last_idx = frames.len() - 1;
    let last = &frames[last_idx];

    // A lone keyframe holds for every query, NaN included.
    if last_idx == 0 || time <= first.time {
        return (first, first, 0.0);
    }
    if time >= last.time {
        return (last, last, 0.0);
    }

    // Linear scan; index 0 is excluded by the clamp above.
    let after_idx = frames[..last_idx]
        .iter()
        .position(|k| time <= k.time)
        .unwrap_or(last_idx);

    let before = &frames[after_idx - 1];
    let after = &frames[after_idx];
    let ratio = inverse_lerp(before.time, after.time, time);
    (before, after, ratio)
}
