pub mod clock;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use time::{to_24_hour, to_label};
