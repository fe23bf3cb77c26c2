use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("could not load image at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Loads a single image file into a [`Frame`].
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, ReadError>;
}
