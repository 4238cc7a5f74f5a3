pub mod calculator;
pub mod clock;
mod controller;
mod error;

pub use calculator::compute;
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{CountdownController, TICK_PERIOD};
pub use error::CountdownError;
