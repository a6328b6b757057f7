pub mod combo;
pub use combo::*;

pub mod rank;
pub use rank::*;
