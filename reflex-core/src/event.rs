use crate::ticks::Ticks;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Everything the outside world can tell the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    Init,
    CoinInserted,
    GoStopPressed,
    Tick,
}

/// One line of a replay script. `{"ticks": n}` expands to `n` tick events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Init,
    Coin,
    Go,
    Ticks(Ticks),
}

impl ScriptStep {
    fn expand(self) -> impl Iterator<Item = GameEvent> {
        let (event, count) = match self {
            ScriptStep::Init => (GameEvent::Init, 1),
            ScriptStep::Coin => (GameEvent::CoinInserted, 1),
            ScriptStep::Go => (GameEvent::GoStopPressed, 1),
            ScriptStep::Ticks(n) => (GameEvent::Tick, n as usize),
        };
        std::iter::repeat_n(event, count)
    }
}

/// Recorded session: the random delays to hand out and the inputs to replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub delays: Vec<Ticks>,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Script has no steps")]
    Empty,

    #[error("Delay #{index} is {value} ticks, outside {low}..={high}")]
    DelayOutOfRange {
        index: usize,
        value: Ticks,
        low: Ticks,
        high: Ticks,
    },
}

impl EventScript {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let script: EventScript = serde_json::from_str(json)?;
        if script.steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects delays a real random source could never have produced.
    pub fn validate_delays(&self, range: RangeInclusive<Ticks>) -> Result<(), ScriptError> {
        match self
            .delays
            .iter()
            .enumerate()
            .find(|(_, d)| !range.contains(*d))
        {
            Some((index, &value)) => Err(ScriptError::DelayOutOfRange {
                index,
                value,
                low: *range.start(),
                high: *range.end(),
            }),
            None => Ok(()),
        }
    }

    /// Flattened event stream, ticks expanded.
    pub fn events(&self) -> impl Iterator<Item = GameEvent> + '_ {
        self.steps.iter().flat_map(|s| s.expand())
    }
}
