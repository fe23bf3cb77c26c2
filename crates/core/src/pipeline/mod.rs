pub mod compare_blur_use_case;
