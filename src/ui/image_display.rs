//! Loading the next image of the cycle into the display widget.

use crate::config::MAX_IMAGE_SIZE;
use crate::error::Result;
use crate::image_cache::ImageCache;
use crate::image_loader::{self, ScaledImage};
use crate::state::AppState;
use log::debug;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Returns the scaled image for `path`, decoding it on a cache miss.
fn scaled_image(path: &Path, cache: &RefCell<ImageCache>) -> Result<ScaledImage> {
    if let Some(cached) = cache.borrow_mut().get(path) {
        return Ok(cached);
    }

    let scaled = image_loader::load_scaled_blocking(path, MAX_IMAGE_SIZE)?;
    cache.borrow_mut().put(path.to_path_buf(), scaled.clone());
    Ok(scaled)
}

/// The entry taken from the cycle and the outcome of loading it.
struct NextImage {
    path: PathBuf,
    /// One-based position of `path` in the cycle.
    index: usize,
    total: usize,
    scaled: Result<ScaledImage>,
}

impl NextImage {
    fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Takes the entry under the cursor, moves the cursor on, then loads it.
///
/// The cursor advances even when loading fails, so the next click
/// tries the following file.
fn load_next(state: &AppState) -> NextImage {
    let (path, position, total) = {
        let mut cycler = state.cycler.borrow_mut();
        let position = cycler.position();
        (cycler.take_next(), position, cycler.len())
    };

    let scaled = scaled_image(&path, &state.image_cache);
    NextImage {
        path,
        index: position + 1,
        total,
        scaled,
    }
}

/// Shows the image under the cursor and moves the cursor on.
///
/// The position labels follow the cursor on failure too; the previous
/// image stays on screen and the error is returned.
pub fn display_next(ui: &crate::AppWindow, state: &AppState) -> Result<()> {
    let next = load_next(state);
    crate::ui::set_position_info(ui, &next.filename(), next.index, next.total);

    let scaled = next.scaled?;
    debug!(
        "Displaying {} ({}/{}) at {}x{}",
        next.path.display(),
        next.index,
        next.total,
        scaled.width,
        scaled.height
    );

    crate::ui::set_displayed_image(ui, image_loader::create_slint_image(&scaled));
    Ok(())
}
