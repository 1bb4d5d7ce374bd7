//! UI module - styled terminal output for the line-based front end

pub mod display;
pub mod styles;

pub use display::render_frame;
pub use styles::Styles;
