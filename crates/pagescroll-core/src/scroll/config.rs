//! Settings consumed by the scroll animator

use std::time::Duration;

use super::easing::Easing;
use crate::config::CommonArea;

/// Scroll behaviour resolved from [`crate::WidgetConfig`]
#[derive(Debug, Clone, Copy)]
pub struct ScrollSettings {
    /// Overlap kept between the old and the new view
    pub common: CommonArea,
    /// Animation length; zero jumps immediately
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            common: CommonArea::default(),
            duration: Duration::from_millis(500),
            easing: Easing::default(),
        }
    }
}

impl ScrollSettings {
    /// Check if the transition is animated at all
    #[inline]
    pub fn is_animated(&self) -> bool {
        !self.duration.is_zero()
    }
}
