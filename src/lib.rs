//! # grid-robot
//!
//! A single directional robot on a bounded grid (5×5 by default). The robot can move one
//! cell forward or rotate in 90° steps, and it never leaves the grid: moves that would cross
//! a boundary are clamped.
//!
//! The core is a plain `Copy` state value ([`RobotState`]) plus a pure reducer over
//! [`RobotAction`]s. Presentation ([`GridView`], [`Frame`]) only reads that state, and the
//! [`RobotInterpreter`] drives it from [Symbios](https://crates.io/crates/symbios) symbol
//! strings.

pub mod config;
pub mod error;
pub mod heading;
pub mod interpreter;
pub mod render;
pub mod state;

pub use config::*;
pub use error::*;
pub use heading::*;
pub use interpreter::*;
pub use render::*;
pub use state::*;
