pub mod immediate;

pub use immediate::*;
