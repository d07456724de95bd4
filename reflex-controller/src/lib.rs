pub mod config;
pub mod controller;
pub mod scores;
pub mod state;

pub use config::{MachineConfig, Variant};
pub use controller::GameController;
pub use scores::{GameSummary, Scoreboard};
pub use state::{GameState, Input, Outcome, StateKind};
