//! Easing curves that remap a segment ratio before value interpolation.
//!
//! Inputs are not clamped; out-of-range ratios run through the same formula.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

pub fn ease_linear(x: f64) -> f64 {
    x
}

pub fn ease_in(x: f64) -> f64 {
    1.0 - ((PI * x).cos() + 1.0) / 2.0
}

pub fn ease_out(x: f64) -> f64 {
    (x * PI / 2.0).sin()
}

pub fn ease_in_out(x: f64) -> f64 {
    -((PI * x).cos() - 1.0) / 2.0
}

pub const EASE_LINEAR: fn(f64) -> f64 = ease_linear;
pub const EASE_IN: fn(f64) -> f64 = ease_in;
pub const EASE_OUT: fn(f64) -> f64 = ease_out;
pub const EASE_IN_OUT: fn(f64) -> f64 = ease_in_out;

/// Named easing curve, as stored in timeline JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    In,
    Out,
    InOut,
}

impl Easing {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }

    #[inline]
    pub fn as_fn(&self) -> fn(f64) -> f64 {
        match self {
            Self::Linear => EASE_LINEAR,
            Self::In => EASE_IN,
            Self::Out => EASE_OUT,
            Self::InOut => EASE_IN_OUT,
        }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (self.as_fn())(x)
    }

    /// Strict lookup by name; `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "in" | "easein" | "ease-in" => Some(Self::In),
            "out" | "easeout" | "ease-out" => Some(Self::Out),
            "inout" | "easeinout" | "ease-in-out" => Some(Self::InOut),
            _ => None,
        }
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        Self::from_name(s).unwrap_or(Self::Linear) // Default to linear for unknown names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-12, "left={a} right={b}");
    }

    #[test]
    fn endpoints_are_fixed() {
        for ease in [Easing::Linear, Easing::In, Easing::Out, Easing::InOut] {
            approx(ease.apply(0.0), 0.0);
            approx(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn midpoints() {
        approx(ease_in(0.5), 0.5);
        approx(ease_in_out(0.5), 0.5);
        approx(ease_out(0.5), (PI / 4.0).sin());
        assert!(ease_in(0.25) < 0.25);
        assert!(ease_out(0.25) > 0.25);
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        assert_eq!(ease_linear(1.5), 1.5);
        approx(ease_out(2.0), 0.0);
        approx(ease_in_out(2.0), 0.0);
    }

    #[test]
    fn names_round_trip_through_serde() {
        let json = serde_json::to_string(&Easing::InOut).unwrap();
        assert_eq!(json, "\"inOut\"");
        let back: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Easing::InOut);
        assert_eq!(Easing::from(Easing::Out.name()), Easing::Out);
    }

    #[test]
    fn unknown_name_falls_back_to_linear() {
        assert_eq!(Easing::from("bounce"), Easing::Linear);
        assert_eq!(Easing::from_name("bounce"), None);
        assert_eq!(Easing::from("Ease-In-Out"), Easing::InOut);
    }
}
