//! UI module for handling user interactions and UI updates.
//!
//! Everything runs on the Slint event loop thread: a click decodes and scales
//! the next image synchronously inside the callback.

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
