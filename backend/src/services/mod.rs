pub mod calendar;
pub mod datetime;
pub mod moment;
pub mod natural_date;
pub mod relative;

pub use datetime::{DateTimeService, RelativeTimeError};
