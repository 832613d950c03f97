use crate::{Color, Config};

/// RGBA framebuffer, row-major, 4 bytes per pixel (R, G, B, unused)
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes, as expected by texture uploads
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Write the colour channels of one pixel.
    ///
    /// Only the linear index is bounds-checked: writes with
    /// `index < 0 || index >= len - 4` are dropped, and an `x` outside the row
    /// wraps into the neighbouring row. The alpha byte is never touched.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        let index = y
            .checked_mul(self.width as i64)
            .and_then(|row| row.checked_add(x))
            .and_then(|linear| linear.checked_mul(4));
        let limit = self.pixels.len() as i64 - 4;

        if let Some(index) = index.filter(|&index| index >= 0 && index < limit) {
            let index = index as usize;
            self.pixels[index] = color.r;
            self.pixels[index + 1] = color.g;
            self.pixels[index + 2] = color.b;
        }
    }

    /// Read back the colour channels at (x, y), if inside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        Some(Color::new(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        ))
    }

    /// Reset every byte to zero (black)
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Bootstrap test pattern: red ramps along x, green along y
    pub fn fill_gradient(&mut self) {
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                let color = Color::new((x % 255) as u8, (y % 255) as u8, 0);
                self.set_pixel(x, y, color);
            }
        }
    }
}
