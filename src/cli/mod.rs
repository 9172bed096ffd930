pub mod screen;
pub use screen::*;

pub mod table;
pub use table::*;
