//! Vizij Timeline Core
//!
//! Evaluates a value at any point on a one-dimensional timeline described by a
//! sparse set of keyframes. Each query locates the two keyframes bracketing the
//! requested time, computes the local ratio between them, reshapes it with an
//! easing curve and hands it to a value interpolator.
//!
//! ```
//! use vizij_timeline_core::{create_number_timeline, Keyframe, TimelineOptions, EASE_IN_OUT};
//!
//! let fade = create_number_timeline(
//!     vec![Keyframe::new(0.0, 0.0), Keyframe::new(10.0, 100.0)],
//!     None,
//! )
//! .unwrap();
//! assert_eq!(fade.evaluate(2.5), 25.0);
//! assert_eq!(fade.evaluate(-5.0), 0.0);
//!
//! let eased = create_number_timeline(
//!     vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 10.0)],
//!     Some(TimelineOptions::new().with_ease(EASE_IN_OUT)),
//! )
//! .unwrap();
//! assert!(eased.evaluate(0.1) < 1.0);
//! ```

pub mod easing;
pub mod error;
pub mod keyframe;
pub mod lerp;
pub mod locator;
pub mod options;
pub mod stored_timeline;
pub mod timeline;

// Re-exports for consumers
pub use easing::{
    ease_in, ease_in_out, ease_linear, ease_out, Easing, EASE_IN, EASE_IN_OUT, EASE_LINEAR,
    EASE_OUT,
};
pub use error::{MissingInterpolatorReason, TimelineError};
pub use keyframe::Keyframe;
pub use lerp::{inverse_lerp, lerp};
pub use locator::locate_frames;
pub use options::{EasingFn, Interpolator, ScalarLerp, TimelineOptions};
pub use stored_timeline::{parse_stored_timeline_json, StoredTimeline};
pub use timeline::{create_number_timeline, create_timeline, Timeline};

/// Timeline result type
pub type Result<T> = core::result::Result<T, TimelineError>;
