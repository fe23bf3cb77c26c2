use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    #[error("kernel_size must be a pair of odd integers >= 1, e.g. (5,5); got ({width},{height})")]
    InvalidKernelSize { width: i32, height: i32 },
}

/// Width and height of a Gaussian window. Both are odd and at least 1.
///
/// A size of 1 along an axis leaves that axis untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelSize {
    width: u32,
    height: u32,
}

impl KernelSize {
    pub fn new(width: i32, height: i32) -> Result<Self, BlurError> {
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(BlurError::InvalidKernelSize { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn is_valid_dimension(value: i32) -> bool {
    value >= 1 && value % 2 == 1
}

/// Validated kernel size plus the requested standard deviation.
///
/// Sigma is passed through unchecked; values `<= 0` make the blurrer derive
/// it from the kernel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurParams {
    pub kernel: KernelSize,
    pub sigma: f64,
}

impl BlurParams {
    pub fn new(kernel_width: i32, kernel_height: i32, sigma: f64) -> Result<Self, BlurError> {
        Ok(Self {
            kernel: KernelSize::new(kernel_width, kernel_height)?,
            sigma,
        })
    }

    /// Caption shown above the blurred panel, e.g. `Gaussian Blur 5×5, σ=0.0`.
    pub fn caption(&self) -> String {
        format!(
            "Gaussian Blur {}\u{d7}{}, \u{3c3}={:?}",
            self.kernel.width, self.kernel.height, self.sigma
        )
    }
}
