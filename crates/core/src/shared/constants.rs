use crate::shared::channel_order::ChannelOrder;

pub const DEFAULT_KERNEL_WIDTH: i32 = 5;
pub const DEFAULT_KERNEL_HEIGHT: i32 = 5;

/// Zero asks the blur to derive sigma from the kernel size.
pub const DEFAULT_SIGMA: f64 = 0.0;

pub const ORIGINAL_PANEL_TITLE: &str = "Original Image";
pub const WINDOW_TITLE: &str = "Gaussian Blur Comparison";

/// Order produced by [`ImageFileReader`](crate::imaging::infrastructure::image_file_reader::ImageFileReader).
pub const READER_CHANNEL_ORDER: ChannelOrder = ChannelOrder::Rgb;

/// Order expected by every [`ComparisonDisplay`](crate::display::domain::comparison_display::ComparisonDisplay).
pub const DISPLAY_CHANNEL_ORDER: ChannelOrder = ChannelOrder::Rgba;
