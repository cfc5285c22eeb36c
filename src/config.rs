//! Application configuration constants.

/// Directory scanned once at startup, relative to the working directory.
pub const IMAGE_DIRECTORY: &str = "./Images";

/// File name suffix an entry must end with to be picked up. Case-sensitive.
pub const IMAGE_EXTENSION: &str = ".jpg";

/// Longest side, in pixels, of every displayed image.
pub const MAX_IMAGE_SIZE: u32 = 200;

/// Initial window size in logical pixels.
pub const WINDOW_WIDTH: f32 = 550.0;
pub const WINDOW_HEIGHT: f32 = 200.0;

/// Number of scaled images kept around for cycling back.
pub const IMAGE_CACHE_CAPACITY: usize = 10;
