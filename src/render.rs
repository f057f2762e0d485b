use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    camera::Camera,
    frame::{FrameBuffer, Rgb24},
    hit::find_intersection,
    scene::Scene,
    shade::shade,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },
    #[error("image height {height} gives a zero focal length")]
    ZeroFocalLength { height: usize },
}

fn check_size(width: usize, height: usize) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }
    // focal length is height / 2 rounded down
    if height < 2 {
        return Err(RenderError::ZeroFocalLength { height });
    }
    Ok(())
}

/// Quantized color of one pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: usize, y: usize) -> [u8; 3] {
    let ray = camera.cast(x, y);
    let intersection = find_intersection(&ray, &scene.spheres);
    shade(&intersection, scene).to_rgb24()
}

/// Renders every pixel in row-major order on the calling thread.
pub fn render(scene: &Scene, width: usize, height: usize) -> Result<FrameBuffer, RenderError> {
    check_size(width, height)?;
    let start = Instant::now();
    let camera = Camera::new(width, height);
    let mut frame_buffer = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            frame_buffer.set_pixel(x, y, render_pixel(&camera, scene, x, y));
        }
    }
    info!(width, height, elapsed = ?start.elapsed(), "rendered frame");
    Ok(frame_buffer)
}

/// Same output as [`render`], with rows handed out to the rayon pool. Each
/// worker writes only the row slice it was given.
pub fn render_parallel(
    scene: &Scene,
    width: usize,
    height: usize,
) -> Result<FrameBuffer, RenderError> {
    check_size(width, height)?;
    let start = Instant::now();
    let camera = Camera::new(width, height);
    let mut frame_buffer = FrameBuffer::new(width, height);
    frame_buffer
        .pixel_data_mut()
        .par_chunks_mut(width * FrameBuffer::CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(FrameBuffer::CHANNELS).enumerate() {
                pixel.copy_from_slice(&render_pixel(&camera, scene, x, y));
            }
        });
    debug!(
        threads = rayon::current_num_threads(),
        "parallel render finished"
    );
    info!(width, height, elapsed = ?start.elapsed(), "rendered frame");
    Ok(frame_buffer)
}
