pub mod config;
pub mod drag;
pub mod error;
pub mod menu;
pub mod overlay;
pub mod platform;
pub mod preferences;
pub mod probe;
pub mod scroll;
pub mod shortcuts;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{CommonArea, EasingType, Side, WidgetConfig};
pub use error::{Error, Result};
pub use widget::Widget;
