use crate::shared::frame::Frame;

/// One captioned image in a comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub title: String,
    pub frame: Frame,
}

impl Panel {
    pub fn new(title: impl Into<String>, frame: Frame) -> Self {
        Self {
            title: title.into(),
            frame,
        }
    }
}

/// Renders two labeled images side by side and blocks until dismissed.
///
/// Frames arrive in [`DISPLAY_CHANNEL_ORDER`](crate::shared::constants::DISPLAY_CHANNEL_ORDER).
pub trait ComparisonDisplay {
    fn show(&mut self, left: Panel, right: Panel) -> Result<(), Box<dyn std::error::Error>>;
}
