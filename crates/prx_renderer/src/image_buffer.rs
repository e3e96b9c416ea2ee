//! Render output buffer.

use image::{Rgb, RgbImage};
use prx_math::Interval;

use crate::Color;

/// Linear RGB pixels, row-major with row 0 at the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn x_res(&self) -> u32 {
        self.width
    }

    pub fn y_res(&self) -> u32 {
        self.height
    }

    /// Change the dimensions. Contents are reset to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Change the width. Contents are reset to black.
    pub fn set_x_res(&mut self, width: u32) {
        self.resize(width, self.height);
    }

    /// Change the height. Contents are reset to black.
    pub fn set_y_res(&mut self, height: u32) {
        self.resize(self.width, height);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Convert to an 8-bit image for saving. Channels are clamped to [0, 1].
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.get(x, y);
            Rgb([to_byte(c.x), to_byte(c.y), to_byte(c.z)])
        })
    }
}

fn to_byte(channel: f32) -> u8 {
    (255.0 * Interval::UNIT.clamp(channel)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let image = ImageBuffer::new(4, 3);
        assert_eq!(image.x_res(), 4);
        assert_eq!(image.y_res(), 3);
        assert_eq!(image.pixels().len(), 12);
        assert!(image.pixels().iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_set_and_get() {
        let mut image = ImageBuffer::new(4, 3);
        image.set_pixel_color(3, 2, Color::new(0.1, 0.2, 0.3));

        assert_eq!(image.get(3, 2), Color::new(0.1, 0.2, 0.3));
        assert_eq!(image.pixels()[11], Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let image = ImageBuffer::new(2, 2);
        image.get(2, 0);
    }

    #[test]
    fn test_resize_resets() {
        let mut image = ImageBuffer::new(2, 2);
        image.set_pixel_color(0, 0, Color::ONE);
        image.set_x_res(5);
        assert_eq!((image.x_res(), image.y_res()), (5, 2));
        assert_eq!(image.get(0, 0), Color::ZERO);

        image.set_y_res(7);
        assert_eq!(image.pixels().len(), 35);
    }

    #[test]
    fn test_to_rgb_image_clamps() {
        let mut image = ImageBuffer::new(2, 1);
        image.set_pixel_color(0, 0, Color::new(2.0, -1.0, 0.5));
        image.set_pixel_color(1, 0, Color::ONE);

        let rgb = image.to_rgb_image();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 0, 127]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }
}
