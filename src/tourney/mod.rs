pub mod classifier;
pub use classifier::*;

pub mod phase;
pub use phase::*;

pub mod tournament;
pub use tournament::*;
