use std::io::{self, Write};

use crate::vector::Vec3;

/// Maps a color channel to a byte: scale by 255, clamp to `[0, 255]`, then
/// truncate. `0.5` becomes 127. NaN becomes 0.
pub fn color_u8_from_f64(c: f64) -> u8 {
    (255.0 * c).clamp(0.0, 255.0) as u8
}

pub trait Rgb24 {
    fn to_rgb24(&self) -> [u8; 3];
    fn from_rgb24(rgb: [u8; 3]) -> Self;
}

impl Rgb24 for [u8; 3] {
    fn to_rgb24(&self) -> [u8; 3] {
        *self
    }

    fn from_rgb24(rgb: [u8; 3]) -> Self {
        rgb
    }
}

impl Rgb24 for Vec3 {
    fn to_rgb24(&self) -> [u8; 3] {
        [
            color_u8_from_f64(self.x),
            color_u8_from_f64(self.y),
            color_u8_from_f64(self.z),
        ]
    }

    fn from_rgb24([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

impl FrameBuffer {
    pub const CHANNELS: usize = 3;

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * Self::CHANNELS].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub(crate) fn pixel_data_mut(&mut self) -> &mut [u8] {
        &mut self.pixel_data
    }

    pub fn set_pixel<T: Rgb24>(&mut self, x: usize, y: usize, color: T) {
        let start = (x + y * self.width) * Self::CHANNELS;
        self.pixel_data[start..start + Self::CHANNELS].copy_from_slice(&color.to_rgb24());
    }

    pub fn get_pixel<T: Rgb24>(&self, x: usize, y: usize) -> T {
        let start = (x + y * self.width) * Self::CHANNELS;
        let p = &self.pixel_data[start..start + Self::CHANNELS];
        T::from_rgb24([p[0], p[1], p[2]])
    }

    /// Plain-text PPM (`P3`), one `"r g b "` triple per pixel in row-major
    /// order.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P3\n{}\n{}\n{}\n", self.width, self.height, 255)?;
        for pixel in self.pixel_data.chunks_exact(Self::CHANNELS) {
            write!(out, "{} {} {} ", pixel[0], pixel[1], pixel[2])?;
        }
        out.flush()
    }
}
