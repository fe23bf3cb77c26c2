use ndarray::ArrayView3;

use crate::shared::channel_order::{self, ChannelOrder};

/// A single raster image: contiguous interleaved bytes in row-major order.
///
/// The channel order is carried with the pixels so conversions happen
/// explicitly at the display boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    order: ChannelOrder,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, order: ChannelOrder) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (order.channels() as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            order,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.order.channels()
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Returns a new frame with the same pixels stored in `order`.
    pub fn to_order(&self, order: ChannelOrder) -> Frame {
        let data = channel_order::reorder(&self.data, self.order, order);
        Frame::new(data, self.width, self.height, order)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels() as usize,
        )
    }
}
