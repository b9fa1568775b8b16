//! Robot state and the actions that mutate it.

use crate::config::GridConfig;
use crate::error::{Error, Result};
use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A single user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotAction {
    /// Advance one cell along the current heading, clamped to the grid.
    MoveForward,
    /// Quarter turn to the left.
    RotateCounterClockwise,
    /// Quarter turn to the right.
    RotateClockwise,
}

/// The robot's position and heading on its grid.
///
/// Every constructor and operation keeps `position` inside the grid, so the fields are
/// read-only from outside the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RobotState {
    position: IVec2,
    heading: Heading,
    grid: GridConfig,
}

impl Default for RobotState {
    fn default() -> Self {
        Self {
            position: IVec2::ZERO,
            heading: Heading::North,
            grid: GridConfig::default(),
        }
    }
}

impl RobotState {
    /// Creates a robot in the top-left corner facing North on the given grid.
    pub fn new(grid: GridConfig) -> Result<Self> {
        grid.validate()?;
        Ok(Self {
            grid,
            ..Default::default()
        })
    }

    /// Creates a robot at an explicit cell, rejecting positions outside the grid.
    pub fn at(grid: GridConfig, position: IVec2, heading: Heading) -> Result<Self> {
        grid.validate()?;
        if !grid.contains(position) {
            return Err(Error::OutOfBounds {
                position,
                width: grid.width,
                height: grid.height,
            });
        }
        Ok(Self {
            position,
            heading,
            grid,
        })
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Returns to the top-left corner facing North, keeping the grid.
    pub fn reset(&mut self) {
        self.position = IVec2::ZERO;
        self.heading = Heading::North;
    }

    /// Whether a forward move would change the position.
    ///
    /// Hosts use this to disable their move control; calling
    /// [`move_forward`](Self::move_forward) regardless is still safe.
    pub fn can_move_forward(&self) -> bool {
        self.grid.clamp(self.position + self.heading.step()) != self.position
    }

    /// Moves one cell along the heading. Each axis is clamped to the grid, so a move into a
    /// wall leaves the robot where it is.
    ///
    /// Returns `true` if the position changed.
    pub fn move_forward(&mut self) -> bool {
        let target = self.grid.clamp(self.position + self.heading.step());
        if target == self.position {
            tracing::debug!(
                x = self.position.x,
                y = self.position.y,
                heading = %self.heading,
                "forward move blocked by grid boundary"
            );
            return false;
        }
        self.position = target;
        true
    }

    /// Turns a quarter turn clockwise or counter-clockwise.
    pub fn rotate(&mut self, clockwise: bool) {
        self.heading = self.heading.rotated(clockwise);
    }

    /// Dispatches a single action.
    pub fn apply(&mut self, action: RobotAction) {
        match action {
            RobotAction::MoveForward => {
                self.move_forward();
            }
            RobotAction::RotateCounterClockwise => self.rotate(false),
            RobotAction::RotateClockwise => self.rotate(true),
        }
        tracing::trace!(
            ?action,
            x = self.position.x,
            y = self.position.y,
            heading = %self.heading,
            "applied action"
        );
    }

    /// Pure form of [`apply`](Self::apply): returns the state after `action`.
    #[must_use]
    pub fn reduce(mut self, action: RobotAction) -> Self {
        self.apply(action);
        self
    }
}
