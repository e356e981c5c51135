pub mod config;
pub mod drag;
pub mod shortcuts;
pub mod simulate;
