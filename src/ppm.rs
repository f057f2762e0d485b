use std::{
    fs::File,
    io::{self, BufWriter},
    path::Path,
};

use tracing::info;

use crate::frame::FrameBuffer;

/// Writes `frame` as a plain-text PPM file, replacing anything at `path`.
pub fn save(frame: &FrameBuffer, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    frame.write_ppm(BufWriter::new(file))?;
    info!(path = %path.display(), "saved image");
    Ok(())
}
