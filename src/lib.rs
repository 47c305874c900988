//! Torus Snake - a terminal snake game on a wraparound grid
//!
//! This library provides:
//! - Core game logic (game module), free of any I/O
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
