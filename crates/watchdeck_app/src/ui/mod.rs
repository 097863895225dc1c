pub mod keys;
pub mod render;

pub use render::render;
