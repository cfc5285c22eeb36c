use log::info;
use slint::ComponentHandle;
use std::path::Path;

use crate::config::{IMAGE_DIRECTORY, IMAGE_EXTENSION, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::Result;
use crate::state::AppState;

/// Scans the image directory, builds the state and shows the first image.
///
/// Any failure here is fatal: there is nothing to cycle through.
pub fn prepare(app: &crate::AppWindow) -> Result<AppState> {
    app.window()
        .set_size(slint::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    let dir = Path::new(IMAGE_DIRECTORY);
    let images = crate::file_utils::list_images(dir, IMAGE_EXTENSION)?;
    info!(
        "Found {} {} files in {}",
        images.len(),
        IMAGE_EXTENSION,
        dir.display()
    );

    let state = AppState::new(dir, images)?;
    crate::ui::image_display::display_next(app, &state)?;

    Ok(state)
}
