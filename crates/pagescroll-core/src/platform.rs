//! Host seams: the page, the button and the overlay as the widget sees them
//!
//! The widget never touches a real DOM. A host (a wasm binding, the
//! headless simulator, or a test fake) implements these traits and forwards
//! its events to [`crate::Widget`].

use tokio::sync::oneshot;

/// Vendor-prefixed names under which browsers report a finished CSS transition
pub const TRANSITION_END_EVENTS: [&str; 4] = [
    "transitionend",
    "webkitTransitionEnd",
    "MSTransitionEnd",
    "oTransitionEnd",
];

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Inner size of the browser viewport in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Origin element of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Button,
    Overlay,
    Menu,
    Page,
}

/// The scrolled document and its window
pub trait Document {
    fn viewport(&self) -> Viewport;

    /// Window page offset (`pageXOffset`/`pageYOffset`)
    fn page_offset(&self, axis: Axis) -> Option<f64>;

    /// Root element scroll offset (`documentElement.scrollLeft/Top`)
    fn root_offset(&self, _axis: Axis) -> Option<f64> {
        None
    }

    /// Body scroll offset (`body.scrollLeft/Top`)
    fn body_offset(&self, _axis: Axis) -> Option<f64> {
        None
    }

    fn scroll_to(&mut self, x: f64, y: f64);

    /// Ask for one call to `Widget::on_animation_frame` on the next frame
    fn request_animation_frame(&mut self);
}

/// The floating scroll button
pub trait ButtonElement {
    /// Rendered width in pixels
    fn width(&self) -> f64;

    /// Rendered height in pixels
    fn height(&self) -> f64;

    /// Set the inline `left` position, or clear it with `None`
    fn set_left(&mut self, px: Option<f64>);

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);
}

/// The "seen region" overlay
pub trait OverlayElement {
    /// Set the CSS height, e.g. `"800px"`
    fn set_height(&mut self, height: &str);
}

/// Sender half of a transition-end notification.
///
/// The host registers it for every name in [`TRANSITION_END_EVENTS`]; the
/// first matching event resolves the paired future and later ones are
/// ignored.
#[derive(Debug)]
pub struct TransitionEndSignal {
    tx: Option<oneshot::Sender<()>>,
}

impl TransitionEndSignal {
    /// Create a signal and the future that resolves when it fires
    pub fn channel() -> (Self, TransitionEnd) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, TransitionEnd { rx })
    }

    /// Forward a DOM event; returns true if this event completed the transition
    pub fn fire(&mut self, event_name: &str) -> bool {
        if !TRANSITION_END_EVENTS.contains(&event_name) {
            return false;
        }
        match self.tx.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    pub fn is_fired(&self) -> bool {
        self.tx.is_none()
    }
}

/// Future half of a [`TransitionEndSignal`].
///
/// If the signal is dropped without firing, the future never resolves, so
/// the snap fallback timer decides.
#[derive(Debug)]
pub struct TransitionEnd {
    rx: oneshot::Receiver<()>,
}

impl TransitionEnd {
    pub async fn wait(self) {
        if self.rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
