use crate::config::{
    Variant, AVERAGE_HOLD, DELAY_RANGE, REACTION_CAP, RESULT_HOLD, WAIT_GO_TIMEOUT,
};
use crate::scores::Scoreboard;
use reflex_core::{format_ticks, RandomSource, Ticks};

/// Inputs a state reacts to. Initialisation is handled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    CoinInserted,
    GoStopPressed,
    Tick,
}

/// State names without their transient data; used to request transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    WaitCoin,
    WaitGo,
    RandomDelay,
    MeasuringReaction,
    ShowResult,
    ShowAverage,
}

/// Active state plus the counters that live only as long as it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    WaitCoin,
    WaitGo { waited: Ticks },
    RandomDelay { delay: Ticks, elapsed: Ticks },
    MeasuringReaction { reaction: Ticks },
    ShowResult { shown: Ticks },
    ShowAverage { average: Ticks, shown: Ticks },
}

/// Side effects of one step: an optional display update, then an optional transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub text: Option<String>,
    pub next: Option<StateKind>,
}

impl Outcome {
    pub fn stay() -> Self {
        Self::default()
    }

    pub fn goto(next: StateKind) -> Self {
        Self {
            text: None,
            next: Some(next),
        }
    }

    pub fn show(text: String) -> Self {
        Self {
            text: Some(text),
            next: None,
        }
    }

    pub fn then(mut self, next: StateKind) -> Self {
        self.next = Some(next);
        self
    }

    pub fn is_stay(&self) -> bool {
        self.text.is_none() && self.next.is_none()
    }
}

impl StateKind {
    /// Builds a fresh state and returns it with the text its entry displays.
    ///
    /// RandomDelay draws its delay here, exactly once per entry; ShowAverage
    /// computes its average here.
    pub fn enter<R: RandomSource + ?Sized>(
        self,
        scores: &Scoreboard,
        rng: &mut R,
    ) -> (GameState, String) {
        match self {
            StateKind::WaitCoin => (GameState::WaitCoin, "Insert coin".to_owned()),
            StateKind::WaitGo => (GameState::WaitGo { waited: 0 }, "Press GO!".to_owned()),
            StateKind::RandomDelay => {
                let delay = rng.random_int(*DELAY_RANGE.start(), *DELAY_RANGE.end());
                (
                    GameState::RandomDelay { delay, elapsed: 0 },
                    "Wait...".to_owned(),
                )
            }
            StateKind::MeasuringReaction => (
                GameState::MeasuringReaction { reaction: 0 },
                format_ticks(0),
            ),
            StateKind::ShowResult => (
                GameState::ShowResult { shown: 0 },
                format_ticks(scores.current()),
            ),
            StateKind::ShowAverage => {
                let average = scores.average();
                (
                    GameState::ShowAverage { average, shown: 0 },
                    format!("Average = {}", format_ticks(average)),
                )
            }
        }
    }
}

impl GameState {
    pub fn kind(&self) -> StateKind {
        match self {
            GameState::WaitCoin => StateKind::WaitCoin,
            GameState::WaitGo { .. } => StateKind::WaitGo,
            GameState::RandomDelay { .. } => StateKind::RandomDelay,
            GameState::MeasuringReaction { .. } => StateKind::MeasuringReaction,
            GameState::ShowResult { .. } => StateKind::ShowResult,
            GameState::ShowAverage { .. } => StateKind::ShowAverage,
        }
    }

    /// Reacts to one input. Pairs not listed are no-ops.
    pub fn step(&mut self, input: Input, scores: &mut Scoreboard, variant: Variant) -> Outcome {
        match (self, input) {
            (GameState::WaitCoin, Input::CoinInserted) => {
                scores.reset();
                Outcome::goto(StateKind::WaitGo)
            }

            (GameState::WaitGo { .. }, Input::GoStopPressed) => {
                Outcome::goto(StateKind::RandomDelay)
            }
            (GameState::WaitGo { waited }, Input::Tick) if variant.has_go_timeout() => {
                *waited += 1;
                if *waited >= WAIT_GO_TIMEOUT {
                    Outcome::goto(StateKind::WaitCoin)
                } else {
                    Outcome::stay()
                }
            }

            // Early press
            (GameState::RandomDelay { .. }, Input::GoStopPressed) => {
                Outcome::goto(StateKind::WaitCoin)
            }
            (GameState::RandomDelay { delay, elapsed }, Input::Tick) => {
                *elapsed += 1;
                if *elapsed >= *delay {
                    Outcome::goto(StateKind::MeasuringReaction)
                } else {
                    Outcome::stay()
                }
            }

            (GameState::MeasuringReaction { reaction }, Input::GoStopPressed) => {
                scores.record(*reaction);
                Outcome::goto(StateKind::ShowResult)
            }
            (GameState::MeasuringReaction { reaction }, Input::Tick) => {
                *reaction += 1;
                let outcome = Outcome::show(format_ticks(*reaction));
                if *reaction >= REACTION_CAP {
                    scores.record(*reaction);
                    outcome.then(StateKind::ShowResult)
                } else {
                    outcome
                }
            }

            (GameState::ShowResult { .. }, Input::GoStopPressed) => {
                Outcome::goto(finish_round(scores, variant))
            }
            (GameState::ShowResult { shown }, Input::Tick) => {
                *shown += 1;
                if *shown >= RESULT_HOLD {
                    Outcome::goto(finish_round(scores, variant))
                } else {
                    Outcome::stay()
                }
            }

            (GameState::ShowAverage { .. }, Input::GoStopPressed) => {
                Outcome::goto(StateKind::WaitCoin)
            }
            (GameState::ShowAverage { shown, .. }, Input::Tick) => {
                *shown += 1;
                if *shown >= AVERAGE_HOLD {
                    Outcome::goto(StateKind::WaitCoin)
                } else {
                    Outcome::stay()
                }
            }

            _ => Outcome::stay(),
        }
    }
}

fn finish_round(scores: &mut Scoreboard, variant: Variant) -> StateKind {
    if !variant.averages_rounds() {
        StateKind::WaitCoin
    } else if scores.advance() {
        StateKind::RandomDelay
    } else {
        StateKind::ShowAverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflex_core::SequenceSource;

    const ALL: [StateKind; 6] = [
        StateKind::WaitCoin,
        StateKind::WaitGo,
        StateKind::RandomDelay,
        StateKind::MeasuringReaction,
        StateKind::ShowResult,
        StateKind::ShowAverage,
    ];

    #[test]
    fn coin_only_matters_in_wait_coin() {
        for kind in ALL {
            let mut scores = Scoreboard::new();
            let (mut state, _) = kind.enter(&scores, &mut SequenceSource::new(vec![150]));
            let outcome = state.step(Input::CoinInserted, &mut scores, Variant::Enhanced);
            if kind == StateKind::WaitCoin {
                assert_eq!(outcome, Outcome::goto(StateKind::WaitGo));
            } else {
                assert!(outcome.is_stay(), "{kind:?} reacted to a coin");
            }
        }
    }

    #[test]
    fn go_ignored_while_waiting_for_coin() {
        let mut scores = Scoreboard::new();
        let mut state = GameState::WaitCoin;
        for input in [Input::GoStopPressed, Input::Tick] {
            assert!(state.step(input, &mut scores, Variant::Enhanced).is_stay());
        }
    }

    #[test]
    fn entry_texts() {
        let mut scores = Scoreboard::new();
        scores.record(157);
        let mut rng = SequenceSource::new(vec![150]);
        let texts: Vec<String> = ALL.iter().map(|k| k.enter(&scores, &mut rng).1).collect();
        assert_eq!(
            texts,
            ["Insert coin", "Press GO!", "Wait...", "0.00", "1.57", "Average = 0.52"]
        );
    }

    #[test]
    fn entry_builds_matching_kind() {
        let scores = Scoreboard::new();
        let mut rng = SequenceSource::new(vec![150]);
        for kind in ALL {
            assert_eq!(kind.enter(&scores, &mut rng).0.kind(), kind);
        }
    }

    #[test]
    fn random_delay_draws_from_policy_range() {
        let scores = Scoreboard::new();
        let mut rng = SequenceSource::new(vec![10, 400, 175]);
        let delays: Vec<GameState> = (0..3)
            .map(|_| StateKind::RandomDelay.enter(&scores, &mut rng).0)
            .collect();
        assert_eq!(
            delays,
            [
                GameState::RandomDelay { delay: 100, elapsed: 0 },
                GameState::RandomDelay { delay: 250, elapsed: 0 },
                GameState::RandomDelay { delay: 175, elapsed: 0 },
            ]
        );
        assert_eq!(rng.calls(), 3);
    }

    #[test]
    fn measuring_tick_updates_display_then_stops_at_cap() {
        let mut scores = Scoreboard::new();
        let mut state = GameState::MeasuringReaction { reaction: 198 };
        let outcome = state.step(Input::Tick, &mut scores, Variant::Enhanced);
        assert_eq!(outcome, Outcome::show("1.99".to_owned()));
        assert_eq!(scores.current(), 0);

        let outcome = state.step(Input::Tick, &mut scores, Variant::Enhanced);
        assert_eq!(
            outcome,
            Outcome::show("2.00".to_owned()).then(StateKind::ShowResult)
        );
        assert_eq!(scores.current(), 200);
    }

    #[test]
    fn simple_variant_has_no_go_timeout() {
        let mut scores = Scoreboard::new();
        let mut state = GameState::WaitGo { waited: 0 };
        for _ in 0..WAIT_GO_TIMEOUT * 2 {
            assert!(state.step(Input::Tick, &mut scores, Variant::Simple).is_stay());
        }
        assert_eq!(state, GameState::WaitGo { waited: 0 });
    }

    #[test]
    fn last_result_leads_to_average() {
        let mut scores = Scoreboard::new();
        scores.advance();
        scores.advance();
        let mut state = GameState::ShowResult { shown: 0 };
        assert_eq!(
            state.step(Input::GoStopPressed, &mut scores, Variant::Enhanced),
            Outcome::goto(StateKind::ShowAverage)
        );
        assert_eq!(scores.games_played(), 3);
    }

    #[test]
    fn simple_result_returns_to_coin() {
        let mut scores = Scoreboard::new();
        let mut state = GameState::ShowResult { shown: RESULT_HOLD - 1 };
        assert_eq!(
            state.step(Input::Tick, &mut scores, Variant::Simple),
            Outcome::goto(StateKind::WaitCoin)
        );
        assert_eq!(scores.games_played(), 0);
    }
}
