mod component;
pub mod geometry;
pub mod graph;
pub mod interaction;
mod render;
pub mod state;
mod types;

pub use component::PromptCanvas;
