//! Aspect-ratio-preserving size computation.

/// Computes the size that fits `width` x `height` into a `max` x `max` box.
///
/// The longer side becomes `max`; on a tie the height does. The other side is
/// scaled linearly with integer truncation. Returns `None` for a zero-sized input.
pub fn scaled_size(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }

    let (w, h, m) = (u64::from(width), u64::from(height), u64::from(max));
    let size = if width > height {
        (max, (m * h / w) as u32)
    } else {
        ((m * w / h) as u32, max)
    };
    Some(size)
}
