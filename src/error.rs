use glam::IVec2;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the crate.
///
/// Robot operations themselves ([`move_forward`](crate::RobotState::move_forward),
/// [`rotate`](crate::RobotState::rotate), [`apply`](crate::RobotState::apply)) are total and
/// never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("position ({}, {}) is outside the {width}x{height} grid", .position.x, .position.y)]
    OutOfBounds {
        position: IVec2,
        width: i32,
        height: i32,
    },

    #[error("heading index {0} is not in 0..=3")]
    InvalidHeading(u8),

    #[error("unknown heading code {0:?}")]
    InvalidHeadingCode(char),

    #[error("heading {0:?} is not one of N, E, S, W")]
    InvalidHeadingText(String),

    #[error("unknown command {0:?}")]
    UnknownCommand(char),

    #[error("grid dimensions {width}x{height} must both be positive")]
    InvalidGrid { width: i32, height: i32 },
}
