pub mod action;
pub use action::*;

pub mod assignment;
pub use assignment::*;

pub mod briefing;
pub use briefing::*;

pub mod phase;
pub use phase::*;

pub mod round;
pub use round::*;

pub mod setup;
pub use setup::*;
