//! Construction-time configuration for timelines.

use std::fmt;
use std::sync::Arc;

/// The scalar lerp primitive handed to every value interpolator.
pub type ScalarLerp = fn(f64, f64, f64) -> f64;

/// Value interpolator: `(a, b, eased_ratio, scalar_lerp) -> value`.
///
/// Composite values should delegate their numeric fields to `scalar_lerp`
/// rather than reimplementing it.
pub type Interpolator<T> = Arc<dyn Fn(&T, &T, f64, ScalarLerp) -> T + Send + Sync>;

/// Easing curve applied to the raw segment ratio.
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Optional knobs for [`create_timeline`](crate::create_timeline).
///
/// `lerp` is required unless the value type is numeric (`f64`/`f32`);
/// `ease` defaults to linear.
pub struct TimelineOptions<T> {
    pub lerp: Option<Interpolator<T>>,
    pub ease: Option<EasingFn>,
}

impl<T> TimelineOptions<T> {
    pub fn new() -> Self {
        Self {
            lerp: None,
            ease: None,
        }
    }

    pub fn with_lerp<F>(mut self, lerp: F) -> Self
    where
        F: Fn(&T, &T, f64, ScalarLerp) -> T + Send + Sync + 'static,
    {
        self.lerp = Some(Arc::new(lerp));
        self
    }

    pub fn with_ease<F>(mut self, ease: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.ease = Some(Arc::new(ease));
        self
    }
}

impl<T> Default for TimelineOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TimelineOptions<T> {
    fn clone(&self) -> Self {
        Self {
            lerp: self.lerp.clone(),
            ease: self.ease.clone(),
        }
    }
}

impl<T> fmt::Debug for TimelineOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineOptions")
            .field("lerp", &self.lerp.as_ref().map(|_| "<fn>"))
            .field("ease", &self.ease.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
