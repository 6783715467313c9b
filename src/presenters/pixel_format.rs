//! Pixel format conversion helpers for presentation surfaces.

use crate::core::data::pixel_buffer::PixelEntry;

/// Packs a row-major entry buffer into RGB bytes (3 per pixel), the layout
/// the PPM writer wants.
#[must_use]
pub fn entries_to_rgb(entries: &[PixelEntry]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(entries.len() * 3);

    for entry in entries {
        bytes.push(entry.colour.r);
        bytes.push(entry.colour.g);
        bytes.push(entry.colour.b);
    }

    bytes
}

/// Copies a row-major entry buffer into an RGBA framebuffer (4 bytes per
/// pixel), setting alpha to 255.
///
/// # Panics
/// Panics if `dst` is not exactly `entries.len() * 4` bytes.
pub fn copy_entries_to_rgba(entries: &[PixelEntry], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        entries.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        entries.len() * 4
    );

    for (entry, dst_pixel) in entries.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = entry.colour.r;
        dst_pixel[1] = entry.colour.g;
        dst_pixel[2] = entry.colour.b;
        dst_pixel[3] = 255;
    }
}
