//! Fixed image list with a rotating cursor.

use std::path::{Path, PathBuf};

/// Owns the image list and the index of the image shown on the next advance.
#[derive(Debug)]
pub struct ImageCycler {
    images: Vec<PathBuf>,
    current: usize,
}

impl ImageCycler {
    /// Creates a cycler positioned on the first image.
    ///
    /// Returns `None` for an empty list, so the cursor is always a valid index.
    pub fn new(images: Vec<PathBuf>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self { images, current: 0 })
    }

    /// Returns the path under the cursor.
    pub fn current_path(&self) -> &Path {
        &self.images[self.current]
    }

    /// Moves the cursor forward, wrapping to the first image past the end.
    pub fn advance(&mut self) {
        debug_assert!(!self.is_empty());
        self.current = (self.current + 1) % self.images.len();
    }

    /// Returns the path under the cursor and then advances.
    pub fn take_next(&mut self) -> PathBuf {
        let path = self.current_path().to_path_buf();
        self.advance();
        path
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of images in the cycle.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`: an empty list never makes a cycler.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(names: &[&str]) -> ImageCycler {
        ImageCycler::new(names.iter().map(PathBuf::from).collect()).unwrap()
    }

    #[test]
    fn starts_on_first_image() {
        let cycler = cycler(&["a.jpg", "b.jpg"]);
        assert!(!cycler.is_empty());
        assert_eq!(cycler.position(), 0);
        assert_eq!(cycler.current_path(), Path::new("a.jpg"));
    }

    #[test]
    fn take_next_returns_current_then_advances() {
        let mut cycler = cycler(&["a.jpg", "b.jpg", "c.jpg"]);

        assert_eq!(cycler.take_next(), PathBuf::from("a.jpg"));
        assert_eq!(cycler.take_next(), PathBuf::from("b.jpg"));
        assert_eq!(cycler.take_next(), PathBuf::from("c.jpg"));
        assert_eq!(cycler.take_next(), PathBuf::from("a.jpg"));
    }

    #[test]
    fn advancing_len_times_wraps_to_start() {
        for len in 1..6 {
            let names: Vec<String> = (0..len).map(|i| format!("{i}.jpg")).collect();
            let mut cycler = ImageCycler::new(names.iter().map(PathBuf::from).collect()).unwrap();
            cycler.advance();
            let start = cycler.position();

            for _ in 0..cycler.len() {
                cycler.advance();
                assert!(cycler.position() < cycler.len());
            }

            assert_eq!(cycler.position(), start);
        }
    }

    #[test]
    fn single_image_always_repeats() {
        let mut cycler = cycler(&["only.jpg"]);
        for _ in 0..3 {
            assert_eq!(cycler.take_next(), PathBuf::from("only.jpg"));
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(ImageCycler::new(Vec::new()).is_none());
    }
}
