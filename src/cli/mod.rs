//! CLI command implementations

pub mod flow;
pub mod heatmap;
pub mod init;
pub mod overall;

mod input;
mod window;

pub use window::WindowArgs;
