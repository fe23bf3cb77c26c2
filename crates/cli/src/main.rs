mod viewer;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use blur_compare_core::blurring::infrastructure::cpu_gaussian_blurrer::CpuGaussianBlurrer;
use blur_compare_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use blur_compare_core::pipeline::compare_blur_use_case::CompareBlurUseCase;
use blur_compare_core::shared::constants::{
    DEFAULT_KERNEL_HEIGHT, DEFAULT_KERNEL_WIDTH, DEFAULT_SIGMA,
};

use viewer::IcedComparisonDisplay;

/// Apply Gaussian blur to an image and display results.
#[derive(Parser, Debug)]
#[command(name = "blur-compare", version)]
struct Cli {
    /// Path to the input image (e.g. 'test.jpg').
    image_path: PathBuf,

    /// Gaussian kernel size (odd integers), e.g. --kernel 5 5.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["KX", "KY"],
        default_values_t = [DEFAULT_KERNEL_WIDTH, DEFAULT_KERNEL_HEIGHT],
        allow_negative_numbers = true
    )]
    kernel: Vec<i32>,

    /// Sigma (standard deviation). Zero means auto-calc from kernel size.
    #[arg(short, long, default_value_t = DEFAULT_SIGMA, allow_negative_numbers = true)]
    sigma: f64,
}

impl Cli {
    fn kernel_size(&self) -> (i32, i32) {
        (self.kernel[0], self.kernel[1])
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut use_case = CompareBlurUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(CpuGaussianBlurrer::new()),
        Box::new(IcedComparisonDisplay::new()),
    );
    use_case.execute(&cli.image_path, cli.kernel_size(), cli.sigma)?;
    log::info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blur-compare", "photo.jpg"]).unwrap();
        assert_eq!(cli.image_path, PathBuf::from("photo.jpg"));
        assert_eq!(cli.kernel_size(), (5, 5));
        assert_eq!(cli.sigma, 0.0);
    }

    #[rstest]
    #[case(&["blur-compare", "a.png", "--kernel", "7", "3"], (7, 3), 0.0)]
    #[case(&["blur-compare", "a.png", "-k", "9", "9", "-s", "2.5"], (9, 9), 2.5)]
    #[case(&["blur-compare", "-s", "1", "a.png"], (5, 5), 1.0)]
    #[case(&["blur-compare", "a.png", "-k", "-3", "4", "--sigma", "-1.5"], (-3, 4), -1.5)]
    fn test_kernel_and_sigma_parsing(
        #[case] args: &[&str],
        #[case] kernel: (i32, i32),
        #[case] sigma: f64,
    ) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.kernel_size(), kernel);
        assert_eq!(cli.sigma, sigma);
    }

    #[rstest]
    #[case(&["blur-compare"])]
    #[case(&["blur-compare", "a.png", "--kernel", "5"])]
    #[case(&["blur-compare", "a.png", "--kernel", "five", "5"])]
    #[case(&["blur-compare", "a.png", "--sigma", "wide"])]
    fn test_malformed_arguments_rejected(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_missing_image_reports_path() {
        let cli = Cli::try_parse_from(["blur-compare", "/nonexistent/dir/photo.jpg"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/photo.jpg"));
    }
}
