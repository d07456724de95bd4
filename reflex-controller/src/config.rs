use reflex_core::Ticks;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Rounds per paid game.
pub const ROUNDS: usize = 3;
/// Idle time in WaitGo before the coin is forfeited (10s).
pub const WAIT_GO_TIMEOUT: Ticks = 1000;
/// Random pause before the measurement starts (1s to 2.5s).
pub const DELAY_RANGE: RangeInclusive<Ticks> = 100..=250;
/// A round stops on its own at 2s.
pub const REACTION_CAP: Ticks = 200;
/// How long a round result stays up (3s).
pub const RESULT_HOLD: Ticks = 300;
/// How long the average stays up (5s).
pub const AVERAGE_HOLD: Ticks = 500;

/// Which cabinet program to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Three rounds, averaged, with a timeout while waiting for GO.
    #[default]
    Enhanced,
    /// One round per coin and no GO timeout.
    Simple,
}

impl Variant {
    pub fn has_go_timeout(self) -> bool {
        matches!(self, Variant::Enhanced)
    }

    /// Whether a result leads on to further rounds and an average.
    pub fn averages_rounds(self) -> bool {
        matches!(self, Variant::Enhanced)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub variant: Variant,
}

impl MachineConfig {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }
}
