pub mod names;
pub mod paths;

pub use names::*;
pub use paths::*;
