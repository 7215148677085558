use anyhow::Result;

use crate::{Direction, GameConfig, GameEvent, GameState};

/// Fixed-rate tick gate over a [`GameState`].
///
/// The front-end calls [`run_frame`](GameEngine::run_frame) on every render
/// frame with a monotonic millisecond timestamp; the engine decides whether
/// that frame carries a logical tick. Frames arriving inside the tick
/// window are dropped, which keeps the game speed independent of the render
/// frame rate.
pub struct GameEngine {
    state: GameState,
    tick_interval_ms: u64,
    last_tick_ms: Option<u64>,
}

impl GameEngine {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        GameEngine {
            state: GameState::new(config, seed),
            tick_interval_ms: config.tick_interval_ms,
            last_tick_ms: None,
        }
    }

    /// Run at most one logical tick for a frame arriving at `now_ms`.
    ///
    /// The first frame of a session ticks immediately; afterwards a tick
    /// fires only when at least the configured interval has elapsed since
    /// the previous one. Returns the tick's events, empty when the frame
    /// was dropped or the session has terminated.
    pub fn run_frame(&mut self, now_ms: u64) -> Vec<GameEvent> {
        if self.state.is_terminated() {
            return Vec::new();
        }

        match self.last_tick_ms {
            Some(last) if now_ms.saturating_sub(last) < self.tick_interval_ms => Vec::new(),
            _ => {
                self.last_tick_ms = Some(now_ms);
                self.state.exec_tick()
            }
        }
    }

    /// Forward a direction request to the snake's pending queue.
    pub fn enqueue_direction(&mut self, direction: Direction) {
        self.state.enqueue_direction(direction);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_tick(&self) -> u32 {
        self.state.current_tick()
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    pub fn state_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state)?)
    }
}
