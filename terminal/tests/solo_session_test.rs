use common::{Direction, EdgePolicy, GameConfig, GameEngine, GameEvent, Position};

const TICK_MS: u64 = 100;

#[test]
fn wrap_runner_loops_the_board() {
    // 20x20 cells, heading right from the center cell (200, 200). Thirty
    // ticks carry the head off the right edge and back around to x = 0.
    let mut engine = GameEngine::new(&GameConfig::new(400, 400, EdgePolicy::Wrap), 1);
    for i in 0..30 {
        engine.run_frame(i * TICK_MS);
    }

    assert_eq!(engine.current_tick(), 30);
    assert!(!engine.is_terminated());
    assert_eq!(*engine.state().snake.head(), Position::new(0, 200));
    // Length only ever grows by what was eaten; a growth armed on the
    // final tick has not been applied yet.
    let snake = &engine.state().snake;
    assert_eq!(
        snake.len() + snake.pending_growth as usize,
        snake.food as usize + 1
    );
}

#[test]
fn lethal_runner_dies_at_the_wall() {
    // 10x10 cells, heading right from the center cell (100, 100). The
    // fifth tick steps onto x = 200, outside the board.
    let mut engine = GameEngine::new(&GameConfig::new(200, 200, EdgePolicy::Lethal), 1);
    let mut died_on_tick = None;
    for i in 0..10 {
        let events = engine.run_frame(i * TICK_MS);
        if events.contains(&GameEvent::SnakeDied) {
            died_on_tick = Some(engine.current_tick());
        }
    }

    assert_eq!(died_on_tick, Some(5));
    assert!(engine.is_terminated());
    assert_eq!(engine.current_tick(), 5);

    // A terminated session ignores any further frames.
    assert!(engine.run_frame(100_000).is_empty());
    assert_eq!(engine.current_tick(), 5);
}

#[test]
fn reversal_is_ignored_through_the_engine() {
    let mut engine = GameEngine::new(&GameConfig::new(400, 400, EdgePolicy::Wrap), 1);

    engine.enqueue_direction(Direction::Left);
    engine.run_frame(0);
    assert_eq!(engine.state().snake.direction, Direction::Right);
    assert_eq!(*engine.state().snake.head(), Position::new(220, 200));

    engine.enqueue_direction(Direction::Up);
    engine.run_frame(TICK_MS);
    assert_eq!(engine.state().snake.direction, Direction::Up);
    assert_eq!(*engine.state().snake.head(), Position::new(220, 180));
}

#[test]
fn frames_between_ticks_carry_no_logic() {
    let mut engine = GameEngine::new(&GameConfig::new(400, 400, EdgePolicy::Wrap), 1);
    engine.run_frame(0);
    let head = *engine.state().snake.head();

    // A 60fps renderer delivers several frames inside one tick window.
    for now in (16..TICK_MS).step_by(16) {
        assert!(engine.run_frame(now).is_empty());
    }
    assert_eq!(engine.current_tick(), 1);
    assert_eq!(*engine.state().snake.head(), head);
}
