mod pattern;
mod predicate;
mod select;
mod table;

pub use pattern::*;
pub use predicate::*;
pub use select::*;
pub use table::*;
