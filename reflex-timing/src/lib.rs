pub mod clock;
pub mod timer;

pub use clock::TickClock;
pub use timer::{HighPrecisionTimer, TickStats, Timer};
