//! State module - one grid plus the shape that will be placed next
//!
//! States are values. Every transition clones the grid, commits the placement
//! into the clone and returns a fresh `State`; the source state is never
//! touched. That makes it safe to expand several futures from one state, on
//! one thread or many.

use std::fmt;

use crate::actions;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Action, Shape};

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The action is not among the state's available actions.
    InvalidAction,
}

impl ActionError {
    pub fn code(self) -> &'static str {
        match self {
            ActionError::InvalidAction => "invalid_action",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ActionError::InvalidAction => "action is not available in this state",
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ActionError {}

/// Grid plus next shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    grid: Grid,
    next_shape: Shape,
}

impl State {
    pub fn new(grid: Grid, next_shape: Shape) -> Self {
        Self { grid, next_shape }
    }

    /// Empty grid with a uniformly drawn first shape
    pub fn initial(width: usize, height: usize, rng: &mut impl RandomSource) -> Self {
        Self::new(Grid::new(width, height), rng.next_shape())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn next_shape(&self) -> Shape {
        self.next_shape
    }

    /// Legal placements of the next shape, in enumeration order
    pub fn available_actions(&self) -> Vec<Action> {
        actions::available_actions(&self.grid, self.next_shape)
    }

    /// Whether `action` is one of [`State::available_actions`]
    pub fn is_available(&self, action: &Action) -> bool {
        actions::is_available(&self.grid, self.next_shape, action)
    }

    /// No placement of the next shape is possible
    pub fn is_terminal(&self) -> bool {
        self.available_actions().is_empty()
    }

    /// Grid after committing `action`, leaving `self` untouched
    fn placed_grid(&self, action: &Action) -> Result<Grid, ActionError> {
        if !self.is_available(action) {
            return Err(ActionError::InvalidAction);
        }
        let mut grid = self.grid.clone();
        grid.place(self.next_shape, action.position(), action.rotation())
            .map_err(|_| ActionError::InvalidAction)?;
        Ok(grid)
    }

    /// Apply an action and draw the following shape from `rng`
    ///
    /// Nothing is drawn when the action is rejected.
    pub fn apply_action(
        &self,
        action: &Action,
        rng: &mut impl RandomSource,
    ) -> Result<State, ActionError> {
        let grid = self.placed_grid(action)?;
        Ok(State::new(grid, rng.next_shape()))
    }

    /// Apply an action with a caller-chosen following shape
    pub fn apply_action_with(&self, action: &Action, next: Shape) -> Result<State, ActionError> {
        let grid = self.placed_grid(action)?;
        Ok(State::new(grid, next))
    }

    /// Both possible successors of `action`, one per next shape
    ///
    /// Ordered as [`Shape::ALL`]; the two states share the same grid.
    pub fn successors(&self, action: &Action) -> Result<[State; 2], ActionError> {
        let grid = self.placed_grid(action)?;
        Ok(Shape::ALL.map(|shape| State::new(grid.clone(), shape)))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Next Piece: {}", self.next_shape)?;
        writeln!(f, "Current Grid:")?;
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::types::Position;

    #[test]
    fn test_initial_state_is_empty() {
        let mut rng = ScriptedRng::shapes(&[Shape::LPiece]);
        let state = State::initial(3, 4, &mut rng);
        assert_eq!(state.next_shape(), Shape::LPiece);
        assert_eq!(state.grid().filled_count(), 0);
    }

    #[test]
    fn test_apply_action_leaves_source_untouched() {
        let state = State::new(Grid::new(3, 4), Shape::IPiece);
        let snapshot = state.clone();
        let mut rng = ScriptedRng::shapes(&[Shape::LPiece]);

        let next = state
            .apply_action(&Action::new(Position::new(3, 0), 0), &mut rng)
            .unwrap();

        assert_eq!(state, snapshot);
        assert_eq!(next.next_shape(), Shape::LPiece);
        assert_eq!(next.grid().to_string(), "...\n...\n...\n***\n");
    }

    #[test]
    fn test_rejected_action_does_not_draw() {
        let state = State::new(Grid::new(3, 4), Shape::IPiece);
        let mut rng = ScriptedRng::shapes(&[Shape::LPiece, Shape::IPiece]);

        // Fits, but floats above the floor.
        let floating = Action::new(Position::new(0, 0), 0);
        assert_eq!(
            state.apply_action(&floating, &mut rng),
            Err(ActionError::InvalidAction)
        );
        assert_eq!(rng.next_shape(), Shape::LPiece);
    }

    #[test]
    fn test_successors_cover_both_shapes() {
        let state = State::new(Grid::new(3, 4), Shape::LPiece);
        let action = state.available_actions()[0];
        let [a, b] = state.successors(&action).unwrap();
        assert_eq!(a.next_shape(), Shape::IPiece);
        assert_eq!(b.next_shape(), Shape::LPiece);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.grid().filled_count(), 3);
    }

    #[test]
    fn test_display_shows_piece_and_grid() {
        let state = State::new(Grid::new(2, 1), Shape::IPiece);
        assert_eq!(state.to_string(), "Next Piece: IPiece\nCurrent Grid:\n..\n");
    }
}
