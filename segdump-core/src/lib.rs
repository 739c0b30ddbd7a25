pub mod binary;
pub mod header;
mod render;

pub use binary::*;
