pub mod comparison_display;
