//! Game of Life field engine
//!
//! This library provides a resizable Game of Life field that advances
//! generations under Conway's rule and reports every change as a batch of
//! cell updates, so a renderer can redraw only what changed.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::FieldError;
pub use game_of_life::{CellUpdate, Field, Pattern};
pub use simulation::{GenerationReport, Simulation};
