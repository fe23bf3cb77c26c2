use std::path::Path;

use crate::imaging::domain::image_reader::{ImageReader, ReadError};
use crate::shared::constants::READER_CHANNEL_ORDER;
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate.
///
/// Any format the crate recognizes is accepted; alpha and extra bit depth
/// are dropped so every frame comes out as 8-bit RGB.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, ReadError> {
        let img = image::open(path)
            .map_err(|source| ReadError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgb8();
        let (width, height) = img.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Ok(Frame::new(img.into_raw(), width, height, READER_CHANNEL_ORDER))
    }
}
