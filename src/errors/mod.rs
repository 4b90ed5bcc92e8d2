mod render;
mod search;

pub use render::*;
pub use search::*;
