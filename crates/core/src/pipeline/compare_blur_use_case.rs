use std::path::Path;

use thiserror::Error;

use crate::blurring::domain::blur_params::{BlurError, BlurParams};
use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::display::domain::comparison_display::{ComparisonDisplay, Panel};
use crate::imaging::domain::image_reader::{ImageReader, ReadError};
use crate::shared::constants::{DISPLAY_CHANNEL_ORDER, ORIGINAL_PANEL_TITLE};

#[derive(Error, Debug)]
pub enum CompareError {
    #[error(transparent)]
    Load(#[from] ReadError),
    #[error(transparent)]
    Blur(#[from] BlurError),
    #[error("display failed: {0}")]
    Display(Box<dyn std::error::Error>),
}

/// Single-image comparison pipeline: read → blur → convert → display.
pub struct CompareBlurUseCase {
    reader: Box<dyn ImageReader>,
    blurrer: Box<dyn FrameBlurrer>,
    display: Box<dyn ComparisonDisplay>,
}

impl CompareBlurUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        blurrer: Box<dyn FrameBlurrer>,
        display: Box<dyn ComparisonDisplay>,
    ) -> Self {
        Self {
            reader,
            blurrer,
            display,
        }
    }

    /// Loads `input_path`, blurs it with the given kernel and sigma, and
    /// shows both images until the display is dismissed.
    ///
    /// The kernel size is validated after loading; a rejected size stops the
    /// pipeline before any blurring or display happens.
    pub fn execute(
        &mut self,
        input_path: &Path,
        kernel_size: (i32, i32),
        sigma: f64,
    ) -> Result<(), CompareError> {
        let original = self.reader.read(input_path)?;
        log::info!(
            "Loaded {} ({}x{})",
            input_path.display(),
            original.width(),
            original.height()
        );

        let params = BlurParams::new(kernel_size.0, kernel_size.1, sigma)?;
        let blurred = self.blurrer.blur(&original, &params);
        log::info!("Applied {}", params.caption());

        let left = Panel::new(ORIGINAL_PANEL_TITLE, original.to_order(DISPLAY_CHANNEL_ORDER));
        let right = Panel::new(params.caption(), blurred.to_order(DISPLAY_CHANNEL_ORDER));

        self.display.show(left, right).map_err(CompareError::Display)?;
        log::debug!("Comparison window closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blurring::infrastructure::cpu_gaussian_blurrer::CpuGaussianBlurrer;
    use crate::shared::channel_order::ChannelOrder;
    use crate::shared::frame::Frame;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubImageReader {
        frame: Option<Frame>,
    }

    impl ImageReader for StubImageReader {
        fn read(&self, path: &Path) -> Result<Frame, ReadError> {
            self.frame.clone().ok_or_else(|| ReadError::Open {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file",
                )),
            })
        }
    }

    struct CountingBlurrer {
        calls: Arc<Mutex<usize>>,
    }

    impl FrameBlurrer for CountingBlurrer {
        fn blur(&self, frame: &Frame, params: &BlurParams) -> Frame {
            *self.calls.lock().unwrap() += 1;
            CpuGaussianBlurrer::new().blur(frame, params)
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Arc<Mutex<Vec<(Panel, Panel)>>>,
    }

    impl ComparisonDisplay for RecordingDisplay {
        fn show(&mut self, left: Panel, right: Panel) -> Result<(), Box<dyn std::error::Error>> {
            self.shown.lock().unwrap().push((left, right));
            Ok(())
        }
    }

    struct FailingDisplay;

    impl ComparisonDisplay for FailingDisplay {
        fn show(&mut self, _left: Panel, _right: Panel) -> Result<(), Box<dyn std::error::Error>> {
            Err("no window system".into())
        }
    }

    // --- Helpers ---

    fn make_frame(w: u32, h: u32) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for i in 0..(w * h) {
            data.extend_from_slice(&[(i % 256) as u8, 64, 200]);
        }
        Frame::new(data, w, h, ChannelOrder::Rgb)
    }

    struct Harness {
        use_case: CompareBlurUseCase,
        blur_calls: Arc<Mutex<usize>>,
        shown: Arc<Mutex<Vec<(Panel, Panel)>>>,
    }

    fn harness(frame: Option<Frame>) -> Harness {
        let blur_calls = Arc::new(Mutex::new(0));
        let display = RecordingDisplay::default();
        let shown = display.shown.clone();
        let use_case = CompareBlurUseCase::new(
            Box::new(StubImageReader { frame }),
            Box::new(CountingBlurrer {
                calls: blur_calls.clone(),
            }),
            Box::new(display),
        );
        Harness {
            use_case,
            blur_calls,
            shown,
        }
    }

    // --- Tests ---

    #[test]
    fn test_default_arguments_produce_expected_titles() {
        let mut h = harness(Some(make_frame(20, 10)));
        h.use_case
            .execute(Path::new("in.png"), (5, 5), 0.0)
            .unwrap();

        let shown = h.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0.title, "Original Image");
        assert_eq!(shown[0].1.title, "Gaussian Blur 5×5, σ=0.0");
    }

    #[test]
    fn test_panels_are_converted_to_display_order() {
        let mut h = harness(Some(make_frame(20, 10)));
        h.use_case
            .execute(Path::new("in.png"), (3, 3), 1.0)
            .unwrap();

        let shown = h.shown.lock().unwrap();
        let (left, right) = &shown[0];
        assert_eq!(left.frame.order(), DISPLAY_CHANNEL_ORDER);
        assert_eq!(right.frame.order(), DISPLAY_CHANNEL_ORDER);
        assert_eq!(left.frame.shape(), (10, 20, 4));
        assert_eq!(right.frame.shape(), (10, 20, 4));
        assert_eq!(&left.frame.data()[..4], &[0, 64, 200, 255]);
    }

    #[test]
    fn test_missing_image_skips_blur_and_display() {
        let mut h = harness(None);
        let err = h
            .use_case
            .execute(Path::new("missing/photo.jpg"), (5, 5), 0.0)
            .unwrap_err();

        assert!(matches!(err, CompareError::Load(_)));
        assert!(err.to_string().contains("missing/photo.jpg"));
        assert_eq!(*h.blur_calls.lock().unwrap(), 0);
        assert!(h.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn test_even_kernel_skips_blur_and_display() {
        let mut h = harness(Some(make_frame(8, 8)));
        let err = h
            .use_case
            .execute(Path::new("in.png"), (4, 5), 0.0)
            .unwrap_err();

        assert!(matches!(
            err,
            CompareError::Blur(BlurError::InvalidKernelSize {
                width: 4,
                height: 5
            })
        ));
        assert_eq!(*h.blur_calls.lock().unwrap(), 0);
        assert!(h.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unit_kernel_shows_identical_panels() {
        let mut h = harness(Some(make_frame(8, 8)));
        h.use_case
            .execute(Path::new("in.png"), (1, 1), 0.0)
            .unwrap();

        let shown = h.shown.lock().unwrap();
        assert_eq!(shown[0].0.frame, shown[0].1.frame);
        assert_eq!(*h.blur_calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_display_failure_is_reported() {
        let mut use_case = CompareBlurUseCase::new(
            Box::new(StubImageReader {
                frame: Some(make_frame(4, 4)),
            }),
            Box::new(CpuGaussianBlurrer::new()),
            Box::new(FailingDisplay),
        );
        let err = use_case
            .execute(&PathBuf::from("in.png"), (5, 5), 0.0)
            .unwrap_err();
        assert_eq!(err.to_string(), "display failed: no window system");
    }
}
