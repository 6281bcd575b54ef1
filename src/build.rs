mod builder;
mod markdown;
mod paths;
mod pdf;
pub mod pipeline;
mod render;
mod stylesheet;
mod title;

pub use builder::{BuildOptions, Builder};
