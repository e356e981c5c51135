//! "Seen region" overlay

use crate::config::CommonArea;
use crate::platform::OverlayElement;

/// Drives the overlay element's height.
///
/// Revealing to an extent covers everything above it plus the common area;
/// hiding collapses it to zero.
#[derive(Debug)]
pub struct Overlay<O> {
    element: O,
    common: CommonArea,
    extent: Option<f64>,
}

impl<O: OverlayElement> Overlay<O> {
    pub fn new(element: O, common: CommonArea) -> Self {
        Self {
            element,
            common,
            extent: None,
        }
    }

    /// Reveal up to `extent` pixels plus the common area.
    ///
    /// Negative totals clamp to zero (an upward destination has nothing "seen").
    pub fn reveal(&mut self, extent: f64, button_height: f64) {
        let height = (extent + self.common.resolve(button_height)).max(0.0);
        tracing::debug!(height, "Revealing overlay");
        self.element.set_height(&format!("{}px", height));
        self.extent = Some(height);
    }

    pub fn hide(&mut self) {
        if self.extent.take().is_some() {
            tracing::debug!("Hiding overlay");
        }
        self.element.set_height("0px");
    }

    /// Current revealed height, `None` while hidden
    pub fn extent(&self) -> Option<f64> {
        self.extent
    }

    pub fn is_visible(&self) -> bool {
        self.extent.is_some()
    }

    pub fn element(&self) -> &O {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut O {
        &mut self.element
    }
}
