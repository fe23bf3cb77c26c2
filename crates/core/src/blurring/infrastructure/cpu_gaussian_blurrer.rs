use crate::blurring::domain::blur_params::{BlurError, BlurParams};
use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::shared::frame::Frame;

use super::gaussian::{gaussian_kernel_1d, separable_gaussian_blur};

/// CPU Gaussian blur over the whole frame.
///
/// The same sigma drives both axes; each axis derives its own value from
/// its kernel length when sigma is not positive.
pub struct CpuGaussianBlurrer;

impl CpuGaussianBlurrer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpuGaussianBlurrer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBlurrer for CpuGaussianBlurrer {
    fn blur(&self, frame: &Frame, params: &BlurParams) -> Frame {
        let kernel_x = gaussian_kernel_1d(params.kernel.width() as usize, params.sigma);
        let kernel_y = gaussian_kernel_1d(params.kernel.height() as usize, params.sigma);
        log::debug!(
            "Blurring {}x{} frame with {}x{} kernel, sigma={}",
            frame.width(),
            frame.height(),
            kernel_x.len(),
            kernel_y.len(),
            params.sigma
        );

        let data = separable_gaussian_blur(
            frame.data(),
            frame.width() as usize,
            frame.height() as usize,
            frame.channels() as usize,
            &kernel_x,
            &kernel_y,
        );
        Frame::new(data, frame.width(), frame.height(), frame.order())
    }
}

/// Validates `kernel_size` and blurs `frame` with [`CpuGaussianBlurrer`].
///
/// Nothing is computed when the kernel size is rejected.
pub fn apply_gaussian_blur(
    frame: &Frame,
    kernel_size: (i32, i32),
    sigma: f64,
) -> Result<Frame, BlurError> {
    let params = BlurParams::new(kernel_size.0, kernel_size.1, sigma)?;
    Ok(CpuGaussianBlurrer::new().blur(frame, &params))
}
