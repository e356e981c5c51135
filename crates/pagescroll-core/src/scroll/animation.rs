//! Scroll animation controller
//!
//! Moves the page down by one viewport minus the common area, either at once
//! or over time. Every frame compares the page offset with the offset the
//! previous frame produced; a difference beyond [`INTERRUPT_TOLERANCE_PX`]
//! means the user scrolled manually and the run is abandoned.

use std::time::Duration;

use super::config::ScrollSettings;
use super::timing::{lerp, progress};
use crate::drag::DragState;
use crate::overlay::Overlay;
use crate::platform::{Document, OverlayElement};
use crate::probe;

/// Largest gap between the expected and the observed offset still treated
/// as this animator's own step
pub const INTERRUPT_TOLERANCE_PX: f64 = 5.0;

/// Active scroll animation state
#[derive(Debug, Clone)]
struct AnimationRun {
    /// Offset when the run was triggered
    from: f64,
    /// Destination offset
    to: f64,
    /// Trigger timestamp
    start: Duration,
    /// Offset the previous frame scrolled to
    expected: Option<f64>,
}

/// Result of an activation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerOutcome {
    /// The button is being dragged or snapped; nothing happened
    Ignored,
    /// Duration is zero; the page was moved at once
    Jumped { to: f64 },
    /// A run started and the first frame was requested
    Started { from: f64, to: f64 },
    /// A run was already in flight and now heads for a new destination
    Retargeted { from: f64, to: f64 },
}

/// Result of one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No run in flight
    Idle,
    /// Scrolled one step; the next frame was requested
    Stepped { offset: f64 },
    /// Time is up; the page was placed exactly at the destination
    Finished { offset: f64 },
    /// Something else moved the page; the run stopped and the overlay hid
    Interrupted { expected: f64, actual: f64 },
}

/// Scroll animation controller
///
/// Call `trigger()` on activation, then `on_frame()` each time the document
/// delivers a requested animation frame.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    settings: ScrollSettings,
    run: Option<AnimationRun>,
}

impl ScrollAnimator {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            run: None,
        }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ScrollSettings) {
        self.settings = settings;
    }

    /// Check if a run is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Destination of the run in flight
    pub fn target(&self) -> Option<f64> {
        self.run.as_ref().map(|run| run.to)
    }

    /// Offset one screen below `from`, keeping the common area in view
    pub fn destination(&self, from: f64, viewport_height: f64, button_height: f64) -> f64 {
        from + viewport_height - self.settings.common.resolve(button_height)
    }

    /// Start the transition from the current offset.
    ///
    /// Ignored unless `drag` is idle, so a drag gesture that ends over the
    /// button cannot also scroll the page.
    pub fn trigger<D, O>(
        &mut self,
        drag: DragState,
        now: Duration,
        document: &mut D,
        overlay: &mut Overlay<O>,
        button_height: f64,
    ) -> TriggerOutcome
    where
        D: Document + ?Sized,
        O: OverlayElement,
    {
        if drag != DragState::Idle {
            tracing::debug!(?drag, "Ignoring scroll trigger while the button is dragged");
            return TriggerOutcome::Ignored;
        }

        let from = probe::y(document);
        let to = self.destination(from, document.viewport().height, button_height);

        if !self.settings.is_animated() {
            let x = probe::x(document);
            document.scroll_to(x, to);
            overlay.reveal(to, button_height);
            tracing::debug!(from, to, "Jumped one screen");
            return TriggerOutcome::Jumped { to };
        }

        overlay.reveal(to, button_height);

        // A frame chain is already running for the previous run; reuse it
        let retarget = self.run.is_some();
        self.run = Some(AnimationRun {
            from,
            to,
            start: now,
            expected: None,
        });

        if retarget {
            tracing::debug!(from, to, "Retargeted scroll animation");
            TriggerOutcome::Retargeted { from, to }
        } else {
            document.request_animation_frame();
            tracing::debug!(from, to, duration_ms = self.settings.duration.as_millis(), "Started scroll animation");
            TriggerOutcome::Started { from, to }
        }
    }

    /// Advance the run by one frame
    pub fn on_frame<D, O>(
        &mut self,
        now: Duration,
        document: &mut D,
        overlay: &mut Overlay<O>,
    ) -> FrameOutcome
    where
        D: Document + ?Sized,
        O: OverlayElement,
    {
        let Some(run) = self.run.as_mut() else {
            return FrameOutcome::Idle;
        };

        let current = probe::y(document);
        if let Some(expected) = run.expected {
            if (expected - current).abs() > INTERRUPT_TOLERANCE_PX {
                self.run = None;
                overlay.hide();
                tracing::debug!(expected, actual = current, "Manual scroll interrupted the animation");
                return FrameOutcome::Interrupted {
                    expected,
                    actual: current,
                };
            }
        }

        let t = progress(run.start, now, self.settings.duration);
        if t >= 1.0 {
            let to = run.to;
            self.run = None;
            let x = probe::x(document);
            document.scroll_to(x, to);
            tracing::debug!(offset = to, "Scroll animation finished");
            return FrameOutcome::Finished { offset: to };
        }

        let offset = lerp(run.from, run.to, self.settings.easing.apply(t));
        run.expected = Some(offset);
        let x = probe::x(document);
        document.scroll_to(x, offset);
        document.request_animation_frame();

        FrameOutcome::Stepped { offset }
    }

    /// Drop any run in flight without touching the page
    pub fn cancel(&mut self) {
        self.run = None;
    }
}
