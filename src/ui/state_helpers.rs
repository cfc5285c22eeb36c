//! Helper functions to set multiple ViewState properties in a grouped manner.

use log::error;
use slint::ComponentHandle;

/// Sets the position labels for the entry just taken from the cycle.
///
/// Groups: current-filename, current-index, total-count
pub fn set_position_info(ui: &crate::AppWindow, filename: &str, index: usize, total: usize) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_filename(filename.into());
    view_state.set_current_index(index as i32);
    view_state.set_total_count(total as i32);
}

/// Puts a new image on the display and clears any previous error.
///
/// Groups: dynamic-image, error-message
pub fn set_displayed_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_dynamic_image(image);
    view_state.set_error_message("".into());
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}
