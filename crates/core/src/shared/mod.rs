pub mod channel_order;
pub mod constants;
pub mod frame;
