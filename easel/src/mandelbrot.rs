use crate::utils::color::Vec4Color;
use crate::utils::math::F64MathUtils;
use anyhow::Result;
use glam::Vec4;
use log::info;
use png::BitDepth;
use png::ColorType;
use png::Encoder;

pub const PALETTE: [[u8; 3]; 16] = [
    [66, 30, 15],
    [25, 7, 26],
    [9, 1, 47],
    [4, 4, 73],
    [0, 7, 73],
    [12, 44, 138],
    [24, 82, 177],
    [57, 125, 209],
    [134, 181, 229],
    [211, 236, 248],
    [241, 233, 191],
    [248, 201, 95],
    [255, 170, 0],
    [204, 128, 0],
    [153, 87, 0],
    [106, 52, 3],
];

/// Escape-time rendering of `z = z^2 + c` over the square `[min, max]^2` of the complex plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MandelbrotSet {
    pub width: u32,
    pub height: u32,
    pub min: f64,
    pub max: f64,
    pub max_iterations: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MandelbrotImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl MandelbrotSet {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, min: -2.0, max: 2.0, max_iterations: 1000 }
    }

    /// Number of iterations before `|z|` reached 2, capped at `max_iterations`.
    pub fn escape_time(&self, re: f64, im: f64) -> u32 {
        let (mut zr, mut zi) = (0.0f64, 0.0f64);
        let mut n = 0;

        while zr * zr + zi * zi < 4.0 && n < self.max_iterations {
            let next = zr * zr - zi * zi + re;
            zi = 2.0 * zr * zi + im;
            zr = next;

            n += 1;
        }

        n
    }

    pub fn palette_rgb(&self, iterations: u32) -> [u8; 3] {
        let index = if iterations > 0 && iterations < self.max_iterations { iterations % 16 } else { iterations };
        PALETTE.get(index as usize).copied().unwrap_or([0, 0, 0])
    }

    pub fn color(&self, iterations: u32) -> Vec4 {
        let [r, g, b] = self.palette_rgb(iterations);
        Vec4::new_rgb(r, g, b, 255)
    }

    pub fn point(&self, x: u32, y: u32) -> (f64, f64) {
        let re = (x as f64).map_range((0.0, self.width as f64), (self.min, self.max));
        let im = (y as f64).map_range((0.0, self.height as f64), (self.min, self.max));

        (re, im)
    }

    /// Size of the RGBA buffer, computed in `usize` so large images don't wrap around.
    pub fn pixels_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    pub fn render(&self) -> MandelbrotImage {
        let mut pixels = Vec::with_capacity(self.pixels_len());

        for y in 0..self.height {
            for x in 0..self.width {
                let (re, im) = self.point(x, y);
                let [r, g, b] = self.palette_rgb(self.escape_time(re, im));

                pixels.extend_from_slice(&[r, g, b, 255]);
            }
        }

        info!("Mandelbrot set rendered ({}x{}, {} iterations max)", self.width, self.height, self.max_iterations);
        MandelbrotImage { width: self.width, height: self.height, pixels }
    }
}

impl MandelbrotImage {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        [self.pixels[offset], self.pixels[offset + 1], self.pixels[offset + 2], self.pixels[offset + 3]]
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();

        {
            let mut encoder = Encoder::new(&mut data, self.width, self.height);
            encoder.set_color(ColorType::Rgba);
            encoder.set_depth(BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }

        Ok(data)
    }
}
