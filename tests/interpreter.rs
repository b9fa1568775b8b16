// tests/interpreter.rs
use glam::IVec2;
use grid_robot::{
    Error, Heading, InterpreterConfig, RobotAction, RobotInterpreter, RobotOp, RobotState,
    parse_actions,
};
use symbios::{SymbiosState, SymbolTable};

fn setup() -> (RobotInterpreter, SymbolTable) {
    let mut interner = SymbolTable::new();
    let mut interpreter = RobotInterpreter::new(InterpreterConfig::default());

    interner.intern("F").unwrap(); // Forward
    interner.intern("+").unwrap(); // Clockwise
    interner.intern("-").unwrap(); // Counter-clockwise
    interner.intern("|").unwrap(); // Turn around
    interner.intern("X").unwrap(); // Unmapped

    interpreter.populate_standard_symbols(&interner);

    (interpreter, interner)
}

#[test]
fn test_standard_symbols_registered() {
    let (interpreter, interner) = setup();
    assert_eq!(
        interpreter.op(interner.resolve_id("F").unwrap()),
        RobotOp::Act(RobotAction::MoveForward)
    );
    assert_eq!(
        interpreter.op(interner.resolve_id("-").unwrap()),
        RobotOp::Act(RobotAction::RotateCounterClockwise)
    );
    assert_eq!(interpreter.op(interner.resolve_id("X").unwrap()), RobotOp::Ignore);
    assert_eq!(interpreter.op(999), RobotOp::Ignore);
}

#[test]
fn test_scenario_program() {
    let (interpreter, interner) = setup();
    let f = interner.resolve_id("F").unwrap();
    let cw = interner.resolve_id("+").unwrap();
    let x = interner.resolve_id("X").unwrap();

    // + F X + F
    let mut program = SymbiosState::new();
    program.push(cw, 0.0, &[]).unwrap();
    program.push(f, 0.0, &[]).unwrap();
    program.push(x, 0.0, &[]).unwrap();
    program.push(cw, 0.0, &[]).unwrap();
    program.push(f, 0.0, &[]).unwrap();

    let robot = interpreter.run(&program);
    assert_eq!(robot.position(), IVec2::new(1, 1));
    assert_eq!(robot.heading(), Heading::South);
}

#[test]
fn test_repeat_parameter_is_clamped_by_grid() {
    let (interpreter, interner) = setup();
    let f = interner.resolve_id("F").unwrap();
    let cw = interner.resolve_id("+").unwrap();

    // +(1) F(10): East, then walk into the right wall.
    let mut program = SymbiosState::new();
    program.push(cw, 0.0, &[1.0]).unwrap();
    program.push(f, 0.0, &[10.0]).unwrap();

    let robot = interpreter.run(&program);
    assert_eq!(robot.position(), IVec2::new(4, 0));
    assert_eq!(robot.heading(), Heading::East);
}

#[test]
fn test_non_positive_repeat_is_noop() {
    let (interpreter, interner) = setup();
    let cw = interner.resolve_id("+").unwrap();

    let mut program = SymbiosState::new();
    program.push(cw, 0.0, &[0.0]).unwrap();
    program.push(cw, 0.0, &[-3.0]).unwrap();

    assert_eq!(interpreter.run(&program).heading(), Heading::North);
}

#[test]
fn test_turn_around_from_explicit_start() {
    let (interpreter, interner) = setup();
    let turn = interner.resolve_id("|").unwrap();
    let f = interner.resolve_id("F").unwrap();

    let start = RobotState::at(Default::default(), IVec2::new(2, 4), Heading::South).unwrap();
    let mut program = SymbiosState::new();
    program.push(turn, 0.0, &[]).unwrap();
    program.push(f, 0.0, &[2.0]).unwrap();

    let robot = interpreter.run_from(start, &program);
    assert_eq!(robot.heading(), Heading::North);
    assert_eq!(robot.position(), IVec2::new(2, 2));
}

#[test]
fn test_with_map_replaces_mappings() {
    let (_, interner) = setup();
    let f = interner.resolve_id("F").unwrap();
    let interpreter =
        RobotInterpreter::new(InterpreterConfig::default()).with_map(vec![RobotOp::Ignore; 8]);

    let mut program = SymbiosState::new();
    program.push(f, 0.0, &[]).unwrap();
    assert_eq!(interpreter.run(&program), RobotState::default());
}

#[test]
fn test_parse_actions() {
    let actions = parse_actions("r F r f").unwrap();
    assert_eq!(
        actions,
        vec![
            RobotAction::RotateClockwise,
            RobotAction::MoveForward,
            RobotAction::RotateClockwise,
            RobotAction::MoveForward,
        ]
    );
    assert_eq!(parse_actions("FLQ").unwrap_err(), Error::UnknownCommand('Q'));
    assert!(parse_actions("").unwrap().is_empty());
}
