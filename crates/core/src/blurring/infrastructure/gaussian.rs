/// Fixed kernels used when sigma is not given and the window is small.
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
    ],
];

/// Sigma used when the caller passes `sigma <= 0`.
pub fn auto_sigma(kernel_size: usize) -> f64 {
    0.3 * ((kernel_size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build a normalized 1D Gaussian kernel of the given odd size.
///
/// `sigma <= 0` selects the automatic value from [`auto_sigma`], or one of
/// the fixed tables for sizes up to 7.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    if sigma <= 0.0 && kernel_size <= 7 {
        return SMALL_KERNELS[kernel_size / 2].to_vec();
    }

    let sigma = if sigma > 0.0 {
        sigma
    } else {
        auto_sigma(kernel_size)
    };
    let half = (kernel_size / 2) as f64;
    let mut kernel_f64: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Map an out-of-range index back into `0..len` by mirroring around the
/// edge samples without repeating them (`cba|abcd|dcb`).
fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let i = index.rem_euclid(period);
    if i >= len as isize {
        (period - i) as usize
    } else {
        i as usize
    }
}

/// Apply a separable Gaussian blur with independent horizontal and vertical
/// kernels, writing the result to a new buffer.
pub fn separable_gaussian_blur(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel_x: &[f32],
    kernel_y: &[f32],
) -> Vec<u8> {
    if width == 0 || height == 0 {
        return data.to_vec();
    }
    let half_x = (kernel_x.len() / 2) as isize;
    let half_y = (kernel_y.len() / 2) as isize;

    let mut temp = vec![0.0f32; width * height * channels];
    let mut out = vec![0u8; width * height * channels];

    // Horizontal pass: data → temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel_x.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - half_x, width);
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → out
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel_y.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - half_y, height);
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                out[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}
