use crate::config::ROUNDS;
use reflex_core::{format_ticks, Ticks};
use serde::{Deserialize, Serialize};

/// Per-game scoring data, owned by the controller and shared by all states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    games_played: usize,
    reaction_times: [Ticks; ROUNDS],
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub reaction_times: [Ticks; ROUNDS],
    pub average: Ticks,
    pub average_text: String,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of a paid game. Old times stay until overwritten.
    pub fn reset(&mut self) {
        self.games_played = 0;
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn reaction_times(&self) -> &[Ticks; ROUNDS] {
        &self.reaction_times
    }

    /// Stores the time for the round in progress.
    pub fn record(&mut self, ticks: Ticks) {
        debug_assert!(self.games_played < ROUNDS);
        self.reaction_times[self.games_played] = ticks;
    }

    /// Time recorded for the round in progress.
    pub fn current(&self) -> Ticks {
        self.reaction_times[self.games_played]
    }

    /// Moves past the finished round; `true` while more rounds remain.
    pub fn advance(&mut self) -> bool {
        self.games_played += 1;
        self.games_played < ROUNDS
    }

    /// Mean of the three rounds, truncated to whole ticks.
    pub fn average(&self) -> Ticks {
        self.reaction_times.iter().sum::<Ticks>() / ROUNDS as Ticks
    }

    pub fn summary(&self) -> GameSummary {
        let average = self.average();
        GameSummary {
            reaction_times: self.reaction_times,
            average,
            average_text: format_ticks(average),
        }
    }
}
