//! Classic Snake on a fixed grid.
//!
//! The game rules live in [`grid`], [`food`], [`snake`], [`collision`] and
//! [`game`] and have no knowledge of the terminal. [`input`], [`renderer`],
//! [`audio`] and [`terminal_runtime`] adapt them to a crossterm/ratatui front end.

pub mod audio;
pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
