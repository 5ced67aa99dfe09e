//! Grid Snake - a terminal Snake game with difficulty levels
//!
//! This library provides:
//! - Core game logic: snake, food, collisions and the screen state machine (game module)
//! - Key-to-intent mapping (input module)
//! - TUI rendering of game snapshots (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive control loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
