//! Text presentation of a [`RobotState`].
//!
//! Nothing here mutates state; hosts read a [`Frame`] or print a [`GridView`].

use crate::heading::Heading;
use crate::state::RobotState;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker for a cell the robot does not occupy.
pub const EMPTY_CELL: char = '.';

/// Renders the grid one row per line, row 0 at the top, with the robot's heading letter in
/// its cell.
///
/// ```text
/// N . . . .
/// . . . . .
/// . . . . .
/// . . . . .
/// . . . . .
/// ```
pub struct GridView<'a> {
    pub state: &'a RobotState,
}

impl<'a> GridView<'a> {
    pub fn new(state: &'a RobotState) -> Self {
        Self { state }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.state.grid();
        for y in 0..grid.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..grid.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                let cell = if IVec2::new(x, y) == self.state.position() {
                    self.state.heading().code()
                } else {
                    EMPTY_CELL
                };
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Status text shown under the grid, e.g. `Position: (1, 0) | Facing: E`.
pub fn status_line(state: &RobotState) -> String {
    let p = state.position();
    format!("Position: ({}, {}) | Facing: {}", p.x, p.y, state.heading())
}

/// Snapshot handed to a presentation layer after each action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub position: IVec2,
    pub heading: Heading,
    /// `false` when the move control should be disabled.
    pub can_move_forward: bool,
}

impl From<&RobotState> for Frame {
    fn from(state: &RobotState) -> Self {
        Self {
            position: state.position(),
            heading: state.heading(),
            can_move_forward: state.can_move_forward(),
        }
    }
}
