use crate::blurring::domain::blur_params::BlurParams;
use crate::shared::frame::Frame;

/// Domain interface for blurring a whole frame.
///
/// Implementations return a new frame with the input's dimensions and
/// channel order; the input is left untouched.
pub trait FrameBlurrer: Send {
    fn blur(&self, frame: &Frame, params: &BlurParams) -> Frame;
}
