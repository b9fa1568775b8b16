//! Interpreter that drives a [`RobotState`] from a Symbios symbol string.
//!
//! The entry point is [`RobotInterpreter`]. Configure it with an [`InterpreterConfig`],
//! register symbol-to-operation mappings via [`RobotInterpreter::set_op`] or
//! [`RobotInterpreter::populate_standard_symbols`], then call [`RobotInterpreter::run`]
//! with a [`symbios::SymbiosState`].

use crate::config::InterpreterConfig;
use crate::error::{Error, Result};
use crate::state::{RobotAction, RobotState};
use symbios::{SymbiosState, SymbolTable};

/// Operations a symbol can be mapped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotOp {
    /// Apply a single [`RobotAction`] (repeated by the first parameter, if present).
    Act(RobotAction),
    /// Two clockwise quarter turns (`|`).
    TurnAround,
    /// No-op: symbol has no registered meaning.
    Ignore,
}

/// Interprets symbol strings as robot actions.
pub struct RobotInterpreter {
    op_map: Vec<RobotOp>,
    config: InterpreterConfig,
}

impl RobotInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map (builder pattern).
    ///
    /// `map` is indexed by symbol ID as returned by [`symbios::SymbolTable`].
    /// Any ID outside the slice is treated as [`RobotOp::Ignore`].
    pub fn with_map(mut self, map: Vec<RobotOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`RobotOp`] to a symbol ID, growing the map with
    /// [`RobotOp::Ignore`] as needed.
    pub fn set_op(&mut self, sym_id: u16, op: RobotOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, RobotOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Returns the operation registered for `sym_id`.
    pub fn op(&self, sym_id: u16) -> RobotOp {
        self.op_map
            .get(sym_id as usize)
            .copied()
            .unwrap_or(RobotOp::Ignore)
    }

    /// Registers the conventional mappings for every standard symbol present in `interner`.
    /// Symbols the interner doesn't know are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", RobotOp::Act(RobotAction::MoveForward)),
            ("f", RobotOp::Act(RobotAction::MoveForward)),
            ("+", RobotOp::Act(RobotAction::RotateClockwise)),
            ("R", RobotOp::Act(RobotAction::RotateClockwise)),
            ("-", RobotOp::Act(RobotAction::RotateCounterClockwise)),
            ("L", RobotOp::Act(RobotAction::RotateCounterClockwise)),
            ("|", RobotOp::TurnAround),
        ];

        for (sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    /// Runs `program` from the default starting state: top-left corner, facing North.
    pub fn run(&self, program: &SymbiosState) -> RobotState {
        self.run_from(RobotState::default(), program)
    }

    /// Runs `program` starting from `robot` and returns the final state.
    ///
    /// Each symbol's first parameter, when present, is a repeat count: `F(3)` moves up to
    /// three cells and `+(2)` turns around. Counts are truncated toward zero and capped at
    /// [`InterpreterConfig::max_repeat`]; zero or negative counts do nothing.
    pub fn run_from(&self, mut robot: RobotState, program: &SymbiosState) -> RobotState {
        for i in 0..program.len() {
            let view = match program.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let op = self.op(view.sym);
            let repeat = view
                .params
                .first()
                .map(|&x| (x as f64).clamp(0.0, self.config.max_repeat as f64) as u32)
                .unwrap_or(1);

            match op {
                RobotOp::Act(action) => {
                    for _ in 0..repeat {
                        robot.apply(action);
                    }
                }
                RobotOp::TurnAround => {
                    for _ in 0..repeat {
                        robot.apply(RobotAction::RotateClockwise);
                        robot.apply(RobotAction::RotateClockwise);
                    }
                }
                RobotOp::Ignore => {
                    tracing::debug!(sym = view.sym, index = i, "ignoring unmapped symbol");
                }
            }
        }

        robot
    }
}

/// Parses a keystroke string into actions: `F` moves, `L` and `R` rotate.
///
/// Letters are case-insensitive and whitespace is skipped.
pub fn parse_actions(input: &str) -> Result<Vec<RobotAction>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'F' => Ok(RobotAction::MoveForward),
            'L' => Ok(RobotAction::RotateCounterClockwise),
            'R' => Ok(RobotAction::RotateClockwise),
            _ => Err(Error::UnknownCommand(c)),
        })
        .collect()
}
