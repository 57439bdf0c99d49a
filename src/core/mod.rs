pub mod dataset;
pub mod operations;

pub use dataset::*;
pub use operations::*;
