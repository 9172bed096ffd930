pub mod catalog;
pub use catalog::*;

pub mod location;
pub use location::*;

pub mod role;
pub use role::*;
