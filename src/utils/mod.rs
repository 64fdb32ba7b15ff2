pub mod relative_time;

pub use relative_time::*;
