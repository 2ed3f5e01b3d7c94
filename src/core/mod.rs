pub mod clock;
pub mod error;
pub mod money;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppError, Result};
