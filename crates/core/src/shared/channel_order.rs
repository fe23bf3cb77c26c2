/// Order in which color components are stored for each pixel.
///
/// Converting between orders only moves components around; no color-space
/// math is involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
    Rgba,
}

impl ChannelOrder {
    pub fn channels(self) -> u8 {
        match self {
            ChannelOrder::Rgb | ChannelOrder::Bgr => 3,
            ChannelOrder::Rgba => 4,
        }
    }

    /// Positions of red, green and blue within one pixel.
    fn rgb_positions(self) -> [usize; 3] {
        match self {
            ChannelOrder::Rgb | ChannelOrder::Rgba => [0, 1, 2],
            ChannelOrder::Bgr => [2, 1, 0],
        }
    }
}

const OPAQUE: u8 = 255;

/// Reorders interleaved pixel data from one channel order to another.
///
/// Alpha is filled with 255 when the target has an alpha channel and the
/// source does not, and dropped in the opposite direction.
pub fn reorder(data: &[u8], from: ChannelOrder, to: ChannelOrder) -> Vec<u8> {
    if from == to {
        return data.to_vec();
    }

    let src_channels = from.channels() as usize;
    let dst_channels = to.channels() as usize;
    let src_rgb = from.rgb_positions();
    let dst_rgb = to.rgb_positions();
    let pixels = data.len() / src_channels;

    let mut out = vec![OPAQUE; pixels * dst_channels];
    for (src, dst) in data
        .chunks_exact(src_channels)
        .zip(out.chunks_exact_mut(dst_channels))
    {
        for component in 0..3 {
            dst[dst_rgb[component]] = src[src_rgb[component]];
        }
    }
    out
}
