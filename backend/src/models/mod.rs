pub mod datetime;
pub mod system;
