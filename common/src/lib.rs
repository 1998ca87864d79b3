//! # Roshambo Common
//!
//! The domain of the game. Pure Rust, no IO.
//!
//! * **[`game`]**: moves, outcomes, the running tally and round records.
//! * **[`config`]**: runtime options shared between the binary and the core.

pub mod config;
pub mod game;
