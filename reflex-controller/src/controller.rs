use crate::config::MachineConfig;
use crate::scores::Scoreboard;
use crate::state::{GameState, Input, StateKind};
use reflex_core::{Display, GameEvent, RandomSource};

/// The cabinet: owns the active state and the scores, and routes every
/// external event to the state.
///
/// Calls run to completion one at a time; a state's entry text is on the
/// display before the next event is looked at.
pub struct GameController<D: Display, R: RandomSource> {
    display: D,
    rng: R,
    config: MachineConfig,
    state: Option<GameState>,
    scores: Scoreboard,
}

impl<D: Display, R: RandomSource> GameController<D, R> {
    pub fn new(display: D, rng: R) -> Self {
        Self::with_config(display, rng, MachineConfig::default())
    }

    pub fn with_config(display: D, rng: R, config: MachineConfig) -> Self {
        Self {
            display,
            rng,
            config,
            state: None,
            scores: Scoreboard::new(),
        }
    }

    /// Rebinds the collaborators. State and scores are left alone.
    pub fn connect(&mut self, display: D, rng: R) {
        self.display = display;
        self.rng = rng;
    }

    /// Sets up the display on first use, then (re-)enters WaitCoin.
    /// Calling it mid-game is a hard reset.
    pub fn init(&mut self) {
        if self.state.is_none() {
            log::debug!("initialising display");
            self.display.init();
        }
        self.transition(StateKind::WaitCoin);
    }

    pub fn coin_inserted(&mut self) {
        self.ensure_init();
        self.dispatch(Input::CoinInserted);
    }

    pub fn go_stop_pressed(&mut self) {
        self.ensure_init();
        self.dispatch(Input::GoStopPressed);
    }

    /// One 10ms step. Ignored until the machine has been initialised.
    pub fn tick(&mut self) {
        self.dispatch(Input::Tick);
    }

    pub fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::Init => self.init(),
            GameEvent::CoinInserted => self.coin_inserted(),
            GameEvent::GoStopPressed => self.go_stop_pressed(),
            GameEvent::Tick => self.tick(),
        }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn kind(&self) -> Option<StateKind> {
        self.state.as_ref().map(GameState::kind)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn into_parts(self) -> (D, R) {
        (self.display, self.rng)
    }

    fn ensure_init(&mut self) {
        if self.state.is_none() {
            self.init();
        }
    }

    fn dispatch(&mut self, input: Input) {
        let Some(state) = self.state.as_mut() else {
            log::warn!("{:?} before init ignored", input);
            return;
        };
        let outcome = state.step(input, &mut self.scores, self.config.variant);
        if let Some(text) = outcome.text {
            self.display.set_text(&text);
        }
        if let Some(next) = outcome.next {
            self.transition(next);
        }
    }

    fn transition(&mut self, next: StateKind) {
        let (state, text) = next.enter(&self.scores, &mut self.rng);
        log::debug!("{:?} -> {:?}", self.kind(), state);
        self.state = Some(state);
        if next == StateKind::ShowAverage {
            match serde_json::to_string(&self.scores.summary()) {
                Ok(json) => log::info!("game complete: {}", json),
                Err(e) => log::warn!("could not encode game summary: {}", e),
            }
        }
        self.display.set_text(&text);
    }
}
