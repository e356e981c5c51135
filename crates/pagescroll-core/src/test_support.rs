//! Recording fakes for the platform traits

use crate::platform::{Axis, ButtonElement, Document, OverlayElement, Viewport};

/// A page that records every scroll and frame request
#[derive(Debug, Clone)]
pub struct FakeDocument {
    pub viewport: Viewport,
    pub scroll_x: f64,
    pub scroll_y: f64,
    /// Bottom of the document; vertical scrolls clamp to it
    pub max_scroll_y: f64,
    /// When false, `page_offset` reports nothing (old engines)
    pub page_offsets_supported: bool,
    pub root_y: Option<f64>,
    pub body_y: Option<f64>,
    pub scroll_calls: Vec<(f64, f64)>,
    pub frame_requests: usize,
}

impl FakeDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport { width, height },
            scroll_x: 0.0,
            scroll_y: 0.0,
            max_scroll_y: f64::INFINITY,
            page_offsets_supported: true,
            root_y: None,
            body_y: None,
            scroll_calls: Vec::new(),
            frame_requests: 0,
        }
    }
}

impl Document for FakeDocument {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn page_offset(&self, axis: Axis) -> Option<f64> {
        if !self.page_offsets_supported {
            return None;
        }
        Some(match axis {
            Axis::Horizontal => self.scroll_x,
            Axis::Vertical => self.scroll_y,
        })
    }

    fn root_offset(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => None,
            Axis::Vertical => self.root_y,
        }
    }

    fn body_offset(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => None,
            Axis::Vertical => self.body_y,
        }
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        let y = y.min(self.max_scroll_y);
        self.scroll_x = x;
        self.scroll_y = y;
        self.scroll_calls.push((x, y));
    }

    fn request_animation_frame(&mut self) {
        self.frame_requests += 1;
    }
}

/// An 80x48 button tracking its classes and inline position
#[derive(Debug, Clone)]
pub struct FakeButton {
    pub width: f64,
    pub height: f64,
    pub left: Option<f64>,
    pub classes: Vec<String>,
}

impl Default for FakeButton {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 48.0,
            left: None,
            classes: vec!["mobile-scroll".to_string(), "button".to_string()],
        }
    }
}

impl FakeButton {
    pub fn with_class(class: &str) -> Self {
        let mut button = Self::default();
        button.add_class(class);
        button
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl ButtonElement for FakeButton {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_left(&mut self, px: Option<f64>) {
        self.left = px;
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeOverlay {
    pub height: String,
    pub history: Vec<String>,
}

impl OverlayElement for FakeOverlay {
    fn set_height(&mut self, height: &str) {
        self.height = height.to_string();
        self.history.push(height.to_string());
    }
}
