mod elements;
mod paginator;
mod query;
mod render;
mod url;
mod window;

pub use elements::*;
pub use paginator::*;
pub use query::*;
pub use render::*;
pub use url::*;
pub use window::*;
