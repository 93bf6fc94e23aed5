//! Tromino Tetris (workspace facade crate).
//!
//! This package exposes the `tromino_tetris::{core,engine,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tromino_core as core;
pub use tromino_engine as engine;
pub use tromino_term as term;
pub use tromino_types as types;
