pub mod datetime;
pub mod system;

pub use datetime::*;
pub use system::*;
