//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the puzzle rules: the grid, the two tromino shapes,
//! the enumeration of legal placements, state transitions and the heuristic
//! scorer. It has **zero dependencies** on rendering, configuration files, or
//! I/O.
//!
//! - **Deterministic**: every operation is a pure function of its inputs; the
//!   only randomness (the next-shape draw) comes from a caller-supplied
//!   [`RandomSource`]
//! - **Value semantics**: transitions return new states and never mutate the
//!   state they were called on
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size boolean playfield with bounds-checked, atomic placement
//! - [`pieces`]: tromino footprints and rotation normalisation
//! - [`actions`]: landing surface and legal action enumeration
//! - [`state`]: grid + next shape, transitions
//! - [`scoring`]: completed-line and gap heuristic
//! - [`rng`]: random sources for shape draws
//!
//! # Example
//!
//! ```
//! use tromino_core::{evaluate, ScriptedRng, State, Grid};
//! use tromino_types::{Action, Position, ScoreConfig, Shape};
//!
//! let state = State::new(Grid::new(3, 4), Shape::IPiece);
//! let actions = state.available_actions();
//! assert!(actions.contains(&Action::new(Position::new(3, 0), 0)));
//!
//! let mut rng = ScriptedRng::shapes(&[Shape::LPiece]);
//! let next = state.apply_action(&Action::new(Position::new(3, 0), 0), &mut rng).unwrap();
//!
//! let config = ScoreConfig::from([10, 20, 30, 1, 2]);
//! assert_eq!(evaluate(next.grid(), &config), 10);
//! ```

pub mod actions;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod state;

pub use tromino_types as types;

// Re-export commonly used types for convenience
pub use actions::{available_actions, landing_surface};
pub use grid::{Grid, PlaceError};
pub use pieces::{get_shape, rotation_count};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{evaluate, evaluate_detailed, ScoreResult};
pub use state::{ActionError, State};
