pub mod display;
pub mod projection;
