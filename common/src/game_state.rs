use serde::{Deserialize, Serialize};

use crate::util::PseudoRandom;
use crate::{
    Board, DEFAULT_CELL_SIZE, DEFAULT_TICK_INTERVAL_MS, Direction, EdgePolicy, Food, Position,
    Snake,
};

/// Per-session configuration, resolved once by the front-end and immutable
/// afterwards. A viewport resize mid-session is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub edge_policy: EdgePolicy,
    pub tick_interval_ms: u64,
}

impl GameConfig {
    pub fn new(width: i32, height: i32, edge_policy: EdgePolicy) -> Self {
        GameConfig {
            width,
            height,
            cell_size: DEFAULT_CELL_SIZE,
            edge_policy,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.width, self.height, self.cell_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Alive,
    /// Absorbing: a terminated session never ticks again.
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { position: Position },
    FoodSpawned { position: Position },
    SnakeDied,
}

// Serializable state for snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub tick: u32,
    pub board: Board,
    pub edge_policy: EdgePolicy,
    pub snake: Snake,
    pub food: Food,
    pub status: SessionStatus,
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let board = config.board();
        let snake = Snake::new(board.center_cell(), Direction::Right);
        let mut rng = PseudoRandom::new(seed);
        let food = Food::spawn(&board, &mut rng, &snake);
        GameState {
            tick: 0,
            board,
            edge_policy: config.edge_policy,
            snake,
            food,
            status: SessionStatus::Alive,
            rng,
        }
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    pub fn is_terminated(&self) -> bool {
        self.status == SessionStatus::Terminated
    }

    /// Record a direction request for the next ticks. Input handlers only
    /// ever touch this queue, never the snake geometry.
    pub fn enqueue_direction(&mut self, direction: Direction) {
        if self.status == SessionStatus::Alive {
            self.snake.enqueue_direction(direction);
        }
    }

    /// Advance the session by one logical tick: move the snake, resolve
    /// food consumption, then check collisions. A no-op once terminated.
    pub fn exec_tick(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if self.status == SessionStatus::Terminated {
            return out;
        }

        self.snake.step(&self.board, self.edge_policy);

        if *self.snake.head() == self.food.position {
            let eaten = self.food.position;
            self.snake.mark_growth();
            self.snake.food += 1;
            self.food.replace(&self.board, &mut self.rng, &self.snake);
            log::debug!(
                "food eaten at ({}, {}), respawned at ({}, {})",
                eaten.x,
                eaten.y,
                self.food.position.x,
                self.food.position.y
            );
            out.push(GameEvent::FoodEaten { position: eaten });
            out.push(GameEvent::FoodSpawned {
                position: self.food.position,
            });
        }

        let hit_wall =
            self.edge_policy == EdgePolicy::Lethal && self.snake.has_wall_collision(&self.board);
        if hit_wall || self.snake.has_self_collision() {
            self.status = SessionStatus::Terminated;
            log::debug!("snake died on tick {}", self.tick);
            out.push(GameEvent::SnakeDied);
        }

        self.tick += 1;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::new(200, 200, EdgePolicy::Wrap)
    }

    #[test]
    fn new_session_spawns_food_off_the_snake() {
        for seed in 0..32 {
            let state = GameState::new(&config(), seed);
            assert!(!state.snake.contains(&state.food.position));
            assert_eq!(state.status, SessionStatus::Alive);
        }
    }

    #[test]
    fn eating_food_emits_events_and_respawns() {
        let mut state = GameState::new(&config(), 5);
        // Plant the food directly in the head's path.
        state.food.position = state.snake.head().stepped(Direction::Right, 20);
        let events = state.exec_tick();
        assert!(matches!(events[0], GameEvent::FoodEaten { .. }));
        assert!(matches!(events[1], GameEvent::FoodSpawned { .. }));
        assert!(state.snake.pending_growth);
        assert_eq!(state.snake.food, 1);
        assert!(!state.snake.contains(&state.food.position));
    }

    #[test]
    fn growth_lands_one_tick_after_consumption() {
        let mut state = GameState::new(&config(), 5);
        state.food.position = state.snake.head().stepped(Direction::Right, 20);
        state.exec_tick();
        assert_eq!(state.snake.len(), 1);
        // Keep the replacement food out of the way for the follow-up tick.
        state.food.position = Position::new(0, 0);
        state.exec_tick();
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn self_collision_terminates_the_session() {
        let mut state = GameState::new(&config(), 5);
        // A head boxed in by its own body: stepping right lands on a
        // non-head segment.
        state.snake.body = [
            Position::new(100, 100),
            Position::new(100, 120),
            Position::new(120, 120),
            Position::new(120, 100),
            Position::new(140, 100),
        ]
        .into_iter()
        .collect();
        state.snake.direction = Direction::Right;
        state.snake.mark_growth();
        let events = state.exec_tick();
        assert!(events.contains(&GameEvent::SnakeDied));
        assert!(state.is_terminated());
    }

    #[test]
    fn lethal_wall_terminates_the_session() {
        let mut state = GameState::new(&GameConfig::new(200, 200, EdgePolicy::Lethal), 5);
        state.snake.body = [Position::new(180, 100)].into_iter().collect();
        state.snake.direction = Direction::Right;
        let events = state.exec_tick();
        assert_eq!(events, vec![GameEvent::SnakeDied]);
        assert!(state.is_terminated());
    }

    #[test]
    fn wrap_policy_survives_the_edge() {
        let mut state = GameState::new(&config(), 5);
        state.snake.body = [Position::new(180, 100)].into_iter().collect();
        state.snake.direction = Direction::Right;
        state.food.position = Position::new(0, 0);
        state.exec_tick();
        assert!(!state.is_terminated());
        assert_eq!(*state.snake.head(), Position::new(0, 100));
    }

    #[test]
    fn terminated_session_never_ticks_again() {
        let mut state = GameState::new(&config(), 5);
        state.status = SessionStatus::Terminated;
        let snapshot = state.clone();
        assert!(state.exec_tick().is_empty());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn input_after_termination_is_dropped() {
        let mut state = GameState::new(&config(), 5);
        state.status = SessionStatus::Terminated;
        state.enqueue_direction(Direction::Up);
        assert!(state.snake.pending_directions.is_empty());
    }
}
