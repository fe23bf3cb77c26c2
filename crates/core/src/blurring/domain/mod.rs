pub mod blur_params;
pub mod frame_blurrer;
