//! Grid and interpreter configuration.

use crate::error::{Error, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Dimensions of the grid the robot lives on.
///
/// Deserialization fills missing fields from the 5×5 default and rejects non-positive
/// dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    /// Number of columns. Valid x coordinates are `0..width`.
    pub width: i32,
    /// Number of rows. Valid y coordinates are `0..height`.
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawGridConfig {
    width: i32,
    height: i32,
}

impl Default for RawGridConfig {
    fn default() -> Self {
        let GridConfig { width, height } = GridConfig::default();
        Self { width, height }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = Error;

    fn try_from(raw: RawGridConfig) -> Result<Self> {
        GridConfig::new(raw.width, raw.height)
    }
}

impl GridConfig {
    /// Creates a grid config, rejecting empty or negative dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let config = Self { width, height };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidGrid {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The largest valid coordinate on each axis.
    pub fn max(&self) -> IVec2 {
        IVec2::new(self.width - 1, self.height - 1)
    }

    pub fn contains(&self, position: IVec2) -> bool {
        position.cmpge(IVec2::ZERO).all() && position.cmple(self.max()).all()
    }

    /// Holds each axis of `position` at the nearest boundary.
    pub fn clamp(&self, position: IVec2) -> IVec2 {
        position.clamp(IVec2::ZERO, self.max())
    }
}

/// Configuration for symbol interpretation.
#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Upper bound for the repeat count read from a symbol's first parameter.
    pub max_repeat: u32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_repeat: 64 }
    }
}
