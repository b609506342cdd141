//! Immutable pixel buffer with ink classification

use image::{DynamicImage, RgbaImage};

/// Sum of the RGB channels of a pure white pixel
const WHITE: u32 = 3 * 255;

/// Decoded QR image
#[derive(Debug, Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Wrap an already decoded image
    pub fn new(image: DynamicImage) -> Self {
        Self {
            pixels: image.to_rgba8(),
        }
    }

    /// Decode image bytes (PNG, GIF, ...)
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        Ok(Self::new(image::load_from_memory(bytes)?))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Whether the pixel at (x, y) differs from pure white.
    ///
    /// Fully transparent pixels count as white. Out-of-bounds coordinates
    /// are background.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        if a == 0 {
            return false;
        }
        u32::from(r) + u32::from(g) + u32::from(b) != WHITE
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_ink_classification() {
        let mut img = RgbaImage::from_pixel(3, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([250, 255, 255, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 0]));
        let bitmap = Bitmap::from(img);

        assert!(!bitmap.is_ink(0, 0));
        assert!(bitmap.is_ink(1, 0));
        assert!(!bitmap.is_ink(2, 0), "transparent pixels are background");
        assert!(!bitmap.is_ink(5, 5));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            Bitmap::from_bytes(b"not an image"),
            Err(crate::Error::Decode(_))
        ));
    }
}
