//! Dragging the button and snapping it to a bottom corner

mod controller;
mod settle;

pub use controller::{resolve_side, DragController, DragState, SnapTicket, ANIMATED_CLASS};
pub use settle::{wait_for_snap, SnapSignal, SNAP_FALLBACK};
