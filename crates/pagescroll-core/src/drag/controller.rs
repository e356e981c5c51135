//! Button drag lifecycle and snapping to the nearest corner

use crate::config::Side;
use crate::platform::{ButtonElement, Target};
use crate::preferences::{PreferenceStore, POSITION_KEY};

/// Class that enables the CSS transition on the button's `left` property
pub const ANIMATED_CLASS: &str = "animated";

/// Drag lifecycle of the button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// Not dragged; scroll activation is allowed
    #[default]
    Idle,
    /// Following the pointer
    Dragging,
    /// Heading for its corner
    Snapping,
}

/// Identifies one snap so its completion can be matched and applied once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapTicket {
    pub side: Side,
    generation: u64,
}

/// Corner for a drag that ended at `pointer_x`; the exact middle goes left
pub fn resolve_side(pointer_x: f64, viewport_width: f64) -> Side {
    if pointer_x <= viewport_width / 2.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Drag state machine for the button
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
    last_pointer_x: Option<f64>,
    /// Side the button held when the drag began
    origin: Side,
    pending: Option<SnapTicket>,
    generation: u64,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn last_pointer_x(&self) -> Option<f64> {
        self.last_pointer_x
    }

    /// Snap awaiting completion, if any
    pub fn pending_snap(&self) -> Option<SnapTicket> {
        self.pending
    }

    /// Begin dragging if the gesture started on the button itself.
    ///
    /// Frees the button from its corner class so it can follow the pointer.
    pub fn drag_start<B>(&mut self, target: Target, current: Side, button: &mut B) -> bool
    where
        B: ButtonElement + ?Sized,
    {
        if self.state != DragState::Idle || target != Target::Button {
            return false;
        }

        self.state = DragState::Dragging;
        self.origin = current;
        button.remove_class(Side::Left.class());
        button.remove_class(Side::Right.class());
        tracing::debug!("Button drag started");
        true
    }

    /// Follow the pointer horizontally, centring the button under it
    pub fn drag_move<B>(&mut self, pointer_x: f64, button: &mut B) -> bool
    where
        B: ButtonElement + ?Sized,
    {
        if self.state != DragState::Dragging {
            return false;
        }

        self.last_pointer_x = Some(pointer_x);
        button.set_left(Some(pointer_x - button.width() / 2.0));
        true
    }

    /// Release the button and send it towards the nearer corner.
    ///
    /// The returned ticket must be passed to [`DragController::complete_snap`]
    /// once the transition ends or the fallback timer fires.
    pub fn drag_end<B>(&mut self, viewport_width: f64, button: &mut B) -> Option<SnapTicket>
    where
        B: ButtonElement + ?Sized,
    {
        if self.state != DragState::Dragging {
            return None;
        }

        self.state = DragState::Snapping;

        // A drag without any movement goes back where it came from
        let side = match self.last_pointer_x {
            Some(x) => resolve_side(x, viewport_width),
            None => self.origin,
        };

        button.add_class(ANIMATED_CLASS);
        let left = match side {
            Side::Left => 0.0,
            Side::Right => viewport_width - button.width(),
        };
        button.set_left(Some(left));

        self.generation += 1;
        let ticket = SnapTicket {
            side,
            generation: self.generation,
        };
        self.pending = Some(ticket);

        tracing::debug!(%side, left, pointer_x = ?self.last_pointer_x, "Button snapping");
        Some(ticket)
    }

    /// Finish a snap: pin the button with its side class and remember the side.
    ///
    /// Returns `None` when `ticket` is not the snap in progress, which makes a
    /// second completion (transition end after the fallback, or the reverse)
    /// a no-op.
    pub fn complete_snap<B, P>(
        &mut self,
        ticket: SnapTicket,
        button: &mut B,
        preferences: &mut P,
    ) -> Option<Side>
    where
        B: ButtonElement + ?Sized,
        P: PreferenceStore + ?Sized,
    {
        if self.state != DragState::Snapping || self.pending != Some(ticket) {
            return None;
        }

        let side = ticket.side;
        button.set_left(None);
        button.remove_class(ANIMATED_CLASS);
        button.add_class(side.class());

        self.state = DragState::Idle;
        self.last_pointer_x = None;
        self.pending = None;

        if let Err(e) = preferences.set(POSITION_KEY, side.as_str()) {
            tracing::warn!(error = %e, "Failed to persist button side");
        }

        tracing::info!(%side, "Button snapped");
        Some(side)
    }
}
