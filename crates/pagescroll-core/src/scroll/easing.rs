//! Easing curves mapping progress [0, 1] to eased progress

use crate::config::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing curve to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Smoothstep => smoothstep(t),
        }
    }
}

/// Easing used by a scroll run: a named curve or an embedder-supplied function.
///
/// Custom functions receive the raw progress and may overshoot; their output
/// is not validated.
#[derive(Debug, Clone, Copy)]
pub enum Easing {
    Preset(EasingType),
    Custom(fn(f64) -> f64),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Preset(EasingType::Linear)
    }
}

impl From<EasingType> for Easing {
    fn from(easing: EasingType) -> Self {
        Easing::Preset(easing)
    }
}

impl Easing {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Preset(easing) => easing.apply(t),
            Easing::Custom(f) => f(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Smoothstep: f(t) = t²(3 - 2t)
#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
