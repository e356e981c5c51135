//! In-memory page, button and overlay for headless runs

use pagescroll_core::platform::{Axis, ButtonElement, Document, OverlayElement, Viewport};

/// A document of fixed height whose scroll offset clamps like a browser's
#[derive(Debug)]
pub struct SimulatedPage {
    viewport: Viewport,
    height: f64,
    x: f64,
    y: f64,
    frame_pending: bool,
    scrolled: bool,
}

impl SimulatedPage {
    pub fn new(viewport: Viewport, height: f64) -> Self {
        Self {
            viewport,
            height,
            x: 0.0,
            y: 0.0,
            frame_pending: false,
            scrolled: false,
        }
    }

    pub fn max_offset(&self) -> f64 {
        (self.height - self.viewport.height).max(0.0)
    }

    pub fn offset(&self) -> f64 {
        self.y
    }

    /// Move the page as a user would, outside the widget's control
    pub fn user_scroll_by(&mut self, delta: f64) {
        let x = self.x;
        self.scroll_to(x, self.y + delta);
    }

    /// Consume a pending animation frame request
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }

    /// Consume a pending scroll notification
    pub fn take_scrolled(&mut self) -> bool {
        std::mem::take(&mut self.scrolled)
    }
}

impl Document for SimulatedPage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn page_offset(&self, axis: Axis) -> Option<f64> {
        Some(match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        })
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        let y = y.clamp(0.0, self.max_offset());
        if x != self.x || y != self.y {
            self.scrolled = true;
        }
        self.x = x.max(0.0);
        self.y = y;
    }

    fn request_animation_frame(&mut self) {
        self.frame_pending = true;
    }
}

#[derive(Debug)]
pub struct SimulatedButton {
    pub width: f64,
    pub height: f64,
    pub left: Option<f64>,
    pub classes: Vec<String>,
}

impl Default for SimulatedButton {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 48.0,
            left: None,
            classes: Vec::new(),
        }
    }
}

impl ButtonElement for SimulatedButton {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_left(&mut self, px: Option<f64>) {
        tracing::debug!(?px, "button left");
        self.left = px;
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

#[derive(Debug, Default)]
pub struct SimulatedOverlay {
    pub height: String,
}

impl OverlayElement for SimulatedOverlay {
    fn set_height(&mut self, height: &str) {
        tracing::debug!(height, "overlay height");
        self.height = height.to_string();
    }
}
