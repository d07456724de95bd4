pub mod display;
pub mod event;
pub mod random;
pub mod ticks;

pub use display::{Display, MemoryDisplay};
pub use event::{EventScript, GameEvent, ScriptError, ScriptStep};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use ticks::{format_ticks, Ticks, TICKS_PER_SECOND, TICK_PERIOD};
