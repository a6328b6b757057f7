pub mod buckets;
pub use buckets::*;

pub mod distributor;
pub use distributor::*;

pub mod occurrence;
pub use occurrence::*;
