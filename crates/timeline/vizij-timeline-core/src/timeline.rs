//! Timeline factory and evaluator.
//!
//! Construction does all of the one-off work (validation, sorting, resolving
//! the easing curve and value interpolator) so that [`Timeline::evaluate`] is
//! just locate -> ease -> interpolate.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::easing::ease_linear;
use crate::error::{MissingInterpolatorReason, TimelineError};
use crate::keyframe::Keyframe;
use crate::lerp::lerp;
use crate::locator::locate_frames;
use crate::options::{EasingFn, Interpolator, ScalarLerp, TimelineOptions};
use crate::Result;

/// Immutable evaluator over a time-sorted keyframe sequence.
///
/// Holds no mutable state; share it freely (`Send + Sync` whenever `T` is).
pub struct Timeline<T> {
    frames: Vec<Keyframe<T>>,
    ease: EasingFn,
    lerp: Interpolator<T>,
}

/// Build a timeline from `frames`.
///
/// Numeric values (`f64`, `f32`) fall back to the built-in interpolator, so
/// `options` may be `None`. Any other value type needs `options` carrying a
/// `lerp`. Pass an empty iterator (or `None::<Keyframe<T>>`) and this fails with
/// [`TimelineError::EmptyFrames`].
pub fn create_timeline<T, I>(frames: I, options: Option<TimelineOptions<T>>) -> Result<Timeline<T>>
where
    T: 'static,
    I: IntoIterator<Item = Keyframe<T>>,
{
    let mut frames: Vec<Keyframe<T>> = frames.into_iter().collect();
    if frames.is_empty() {
        return Err(TimelineError::EmptyFrames);
    }

    let had_options = options.is_some();
    let TimelineOptions { lerp, ease } = options.unwrap_or_default();

    let builtin = lerp.is_none();
    let lerp = match lerp.or_else(builtin_interpolator::<T>) {
        Some(lerp) => lerp,
        None => {
            let reason = if had_options {
                MissingInterpolatorReason::NoLerp
            } else {
                MissingInterpolatorReason::NoOptions
            };
            return Err(TimelineError::missing_interpolator(reason));
        }
    };
    let ease: EasingFn = match ease {
        Some(ease) => ease,
        None => Arc::new(ease_linear),
    };

    let reordered = !frames
        .windows(2)
        .all(|w| cmp_time(w[0].time, w[1].time).is_le());
    if reordered {
        // Stable: equal times keep their input order.
        frames.sort_by(|a, b| cmp_time(a.time, b.time));
    }

    log::debug!(
        "timeline: {} keyframe(s), reordered={}, builtin_lerp={}",
        frames.len(),
        reordered,
        builtin
    );

    Ok(Timeline { frames, ease, lerp })
}

/// Numeric convenience form of [`create_timeline`]; `options` is fully optional.
pub fn create_number_timeline<I>(
    frames: I,
    options: Option<TimelineOptions<f64>>,
) -> Result<Timeline<f64>>
where
    I: IntoIterator<Item = Keyframe<f64>>,
{
    create_timeline(frames, options)
}

/// Total order on keyframe times with `-0.0` and `+0.0` treated as equal.
#[inline]
fn cmp_time(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

fn lerp_f64(a: &f64, b: &f64, ratio: f64, scalar: ScalarLerp) -> f64 {
    scalar(*a, *b, ratio)
}

fn lerp_f32(a: &f32, b: &f32, ratio: f64, scalar: ScalarLerp) -> f32 {
    scalar(f64::from(*a), f64::from(*b), ratio) as f32
}

/// Built-in interpolator for numeric value types, resolved by a runtime type check.
fn builtin_interpolator<T: 'static>() -> Option<Interpolator<T>> {
    let id = TypeId::of::<T>();
    let erased: Box<dyn Any> = if id == TypeId::of::<f64>() {
        let interp: Interpolator<f64> = Arc::new(lerp_f64);
        Box::new(interp)
    } else if id == TypeId::of::<f32>() {
        let interp: Interpolator<f32> = Arc::new(lerp_f32);
        Box::new(interp)
    } else {
        return None;
    };
    erased.downcast::<Interpolator<T>>().ok().map(|interp| *interp)
}

impl<T> Timeline<T> {
    /// Evaluate the timeline at `time`.
    ///
    /// Clamps to the outer keyframes; never extrapolates. NaN (from a NaN query
    /// or a degenerate segment) flows through to the interpolator untouched.
    #[inline]
    pub fn evaluate(&self, time: f64) -> T {
        let (before, after, ratio) = locate_frames(&self.frames, time);
        let eased = (self.ease)(ratio);
        (self.lerp)(&before.value, &after.value, eased, lerp)
    }

    /// Borrow the timeline as a plain `time -> value` function.
    pub fn as_fn(&self) -> impl Fn(f64) -> T + '_ {
        move |time| self.evaluate(time)
    }

    /// Consume the timeline into an owned `time -> value` function.
    pub fn into_fn(self) -> impl Fn(f64) -> T {
        move |time| self.evaluate(time)
    }

    /// Keyframes in evaluation order (ascending by time).
    #[inline]
    pub fn frames(&self) -> &[Keyframe<T>] {
        &self.frames
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn start_time(&self) -> f64 {
        self.frames[0].time
    }

    #[inline]
    pub fn end_time(&self) -> f64 {
        self.frames[self.frames.len() - 1].time
    }

    /// Evaluate `steps` evenly spaced times from `start` to `end` inclusive.
    /// A single step samples `start` only.
    pub fn sample_range(&self, start: f64, end: f64, steps: usize) -> Vec<T> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.evaluate(start)],
            _ => {
                let last = (steps - 1) as f64;
                (0..steps)
                    .map(|i| self.evaluate(lerp(start, end, i as f64 / last)))
                    .collect()
            }
        }
    }
}

impl<T: Clone> Clone for Timeline<T> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
            ease: Arc::clone(&self.ease),
            lerp: Arc::clone(&self.lerp),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Timeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}
