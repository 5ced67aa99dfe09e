//! Core game logic module for Snake
//!
//! Nothing here touches the terminal or the renderer; the only I/O is
//! [`GameConfig::load`] reading an optional config file.
//! The control loop owns a [`GameContext`] and feeds it to a [`GameEngine`] one
//! intent or tick at a time.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use collision::CollisionType;
pub use config::{Difficulty, GameConfig};
pub use engine::{GameEngine, Snapshot};
pub use food::{Food, PlacementError};
pub use grid::{Grid, Position};
pub use snake::{MovementResult, Snake};
pub use state::{GameContext, GameState};
