pub mod blurring;
pub mod display;
pub mod imaging;
pub mod pipeline;
pub mod shared;
