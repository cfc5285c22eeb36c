//! State management for the image cycler.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::error::{AppError, Result};
use crate::image_cache::ImageCache;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub mod cycler;

pub use cycler::ImageCycler;

/// Application-wide state container.
///
/// Only ever touched from the UI thread, so the handles are `Rc<RefCell<_>>`.
#[derive(Clone)]
pub struct AppState {
    pub cycler: Rc<RefCell<ImageCycler>>,
    /// LRU cache for scaled images.
    pub image_cache: Rc<RefCell<ImageCache>>,
}

impl AppState {
    /// Builds the state for the images found in `dir`.
    pub fn new(dir: &Path, images: Vec<PathBuf>) -> Result<Self> {
        let cycler =
            ImageCycler::new(images).ok_or_else(|| AppError::NoImages(dir.to_path_buf()))?;
        Ok(Self {
            cycler: Rc::new(RefCell::new(cycler)),
            image_cache: Rc::new(RefCell::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_list_names_the_directory() {
        let err = AppState::new(Path::new("./Images"), Vec::new()).err().unwrap();
        match err {
            AppError::NoImages(dir) => assert_eq!(dir, PathBuf::from("./Images")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clones_share_the_cursor() {
        let state = AppState::new(
            Path::new("."),
            vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")],
        )
        .unwrap();
        let other = state.clone();

        state.cycler.borrow_mut().advance();
        assert_eq!(other.cycler.borrow().position(), 1);
    }
}
