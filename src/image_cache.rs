//! Cache of scaled images for cycling back without decoding again.
//!
//! Holds scaled RGB8 data keyed by path, evicting with an LRU policy.

use crate::image_loader::ScaledImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// LRU cache for storing scaled images.
pub struct ImageCache {
    cache: LruCache<PathBuf, ScaledImage>,
}

impl ImageCache {
    /// Creates a new image cache holding at most `capacity` images (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<ScaledImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, scaled: ScaledImage) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            scaled.width,
            scaled.height
        );
        self.cache.put(path, scaled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled(width: u32, height: u32) -> ScaledImage {
        ScaledImage {
            data: vec![0; (width * height * 3) as usize],
            width,
            height,
        }
    }

    #[test]
    fn returns_stored_image() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("a.jpg"), scaled(200, 100));

        let hit = cache.get(Path::new("a.jpg")).unwrap();
        assert_eq!((hit.width, hit.height), (200, 100));
        assert!(cache.get(Path::new("b.jpg")).is_none());
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("a.jpg"), scaled(1, 1));
        cache.put(PathBuf::from("b.jpg"), scaled(1, 1));
        assert!(cache.get(Path::new("a.jpg")).is_some());
        cache.put(PathBuf::from("c.jpg"), scaled(1, 1));

        assert!(cache.get(Path::new("a.jpg")).is_some());
        assert!(cache.get(Path::new("b.jpg")).is_none());
        assert!(cache.get(Path::new("c.jpg")).is_some());
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut cache = ImageCache::new(0);
        cache.put(PathBuf::from("a.jpg"), scaled(1, 1));

        assert!(cache.get(Path::new("a.jpg")).is_some());
    }
}
