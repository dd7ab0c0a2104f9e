mod analyzer;
mod image;
mod task;
mod view;

pub use analyzer::*;
pub use image::*;
pub use task::*;
pub use view::*;
