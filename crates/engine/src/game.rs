//! Game session - a running state with a cumulative score
//!
//! Each step applies one action, rates the resulting grid and adds the rating
//! to the session score. Grids are never compacted, so a completed row adds its
//! bonus again on every following step.

use tromino_core::{evaluate_detailed, ActionError, RandomSource, ScoreResult, State};

use crate::types::{Action, ScoreConfig, Shape};

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub action: Action,
    /// Shape that was placed by this step.
    pub placed: Shape,
    /// Evaluation of the grid after the placement.
    pub result: ScoreResult,
    /// Session score after adding `result.total`.
    pub score: i64,
}

impl StepOutcome {
    pub fn gain(&self) -> i32 {
        self.result.total
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    state: State,
    config: ScoreConfig,
    score: i64,
    moves: u32,
}

impl Game {
    /// Start on an empty grid with a random first shape
    pub fn new(
        config: ScoreConfig,
        width: usize,
        height: usize,
        rng: &mut impl RandomSource,
    ) -> Self {
        Self::from_state(config, State::initial(width, height, rng))
    }

    pub fn from_state(config: ScoreConfig, state: State) -> Self {
        Self {
            state,
            config,
            score: 0,
            moves: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// No placement of the next shape remains
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Apply one action and bank the rating of the new grid
    ///
    /// On error the session is unchanged.
    pub fn step(
        &mut self,
        action: &Action,
        rng: &mut impl RandomSource,
    ) -> Result<StepOutcome, ActionError> {
        let placed = self.state.next_shape();
        let next = self.state.apply_action(action, rng)?;
        let result = evaluate_detailed(next.grid(), &self.config);

        self.state = next;
        self.score += i64::from(result.total);
        self.moves += 1;

        Ok(StepOutcome {
            action: *action,
            placed,
            result,
            score: self.score,
        })
    }

    /// Play uniformly random actions until none remain or `max_moves` is hit
    ///
    /// Returns the number of moves made by this call.
    pub fn play_random(
        &mut self,
        rng: &mut impl RandomSource,
        max_moves: u32,
    ) -> Result<u32, ActionError> {
        self.play_random_with(rng, max_moves, |_, _, _| {})
    }

    /// Like [`Game::play_random`], calling `observe(before, after, outcome)`
    /// after every move
    pub fn play_random_with<F>(
        &mut self,
        rng: &mut impl RandomSource,
        max_moves: u32,
        mut observe: F,
    ) -> Result<u32, ActionError>
    where
        F: FnMut(&State, &State, &StepOutcome),
    {
        let mut made = 0;
        while made < max_moves {
            let actions = self.state.available_actions();
            if actions.is_empty() {
                break;
            }
            let action = actions[rng.next_range(actions.len() as u32) as usize];

            let before = self.state.clone();
            let outcome = self.step(&action, rng)?;
            observe(&before, &self.state, &outcome);
            made += 1;
        }
        Ok(made)
    }
}
