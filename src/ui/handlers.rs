//! Event handlers for UI callbacks.

use crate::state::AppState;
use crate::ui::image_display::display_next;
use slint::ComponentHandle;

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and the shared state, then registers the
/// `display-next` callback fired by the button.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    ui.global::<crate::Logic>().on_display_next({
        let ui_handle = ui.as_weak();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            if let Err(e) = display_next(&ui, &state) {
                crate::ui::set_error_with_prefix(&ui, "Failed to load next image", e.to_string());
            }
        }
    });
}
