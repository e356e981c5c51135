//! Scroll-by-one-screen transition
//!
//! ## Atoms
//! - `easing` - Pure easing curves and custom easing functions
//! - `timing` - Progress and interpolation helpers
//! - `config` - Settings consumed by the animator
//!
//! ## Controller
//! - `animation` - The frame-driven animator with manual-scroll interruption
//!
//! # Usage
//!
//! ```ignore
//! let mut animator = ScrollAnimator::new(config.scroll_settings());
//!
//! // On activation (only while the button is not being dragged)
//! animator.trigger(drag_state, now, &mut document, &mut overlay, button_height);
//!
//! // On every animation frame the document asked for
//! animator.on_frame(now, &mut document, &mut overlay);
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::{FrameOutcome, ScrollAnimator, TriggerOutcome, INTERRUPT_TOLERANCE_PX};
pub use config::ScrollSettings;
pub use easing::{Easing, EasingTypeExt};
