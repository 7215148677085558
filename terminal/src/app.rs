use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use common::util::PseudoRandom;
use common::{input, Direction, GameConfig, GameEngine, GameEvent};

use crate::render::board::BoardRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::{CharDimensions, RenderConfig};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    Restart,
}

pub enum AppState {
    Playing,
    GameOver { score: u32, length: usize },
}

pub struct App {
    config: GameConfig,
    engine: GameEngine,
    state: AppState,
    elapsed: Duration,
    seeds: PseudoRandom,
    render_config: RenderConfig,
    board_renderer: BoardRenderer<StandardRenderer>,
    /// Screen rect the board was last drawn into, for mouse mapping.
    board_area: Option<Rect>,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let char_dims = CharDimensions::new(2, 1);
        let mut seeds = PseudoRandom::new(seed);
        App {
            engine: GameEngine::new(&config, seeds.next_u64()),
            config,
            state: AppState::Playing,
            elapsed: Duration::ZERO,
            seeds,
            render_config: RenderConfig {
                chars_per_cell: char_dims,
            },
            board_renderer: BoardRenderer::new(StandardRenderer::new(char_dims)),
            board_area: None,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Char('r') if matches!(self.state, AppState::GameOver { .. }) => {
                Some(AppCommand::Restart)
            }
            KeyCode::Up => {
                self.engine.enqueue_direction(Direction::Up);
                None
            }
            KeyCode::Down => {
                self.engine.enqueue_direction(Direction::Down);
                None
            }
            KeyCode::Left => {
                self.engine.enqueue_direction(Direction::Left);
                None
            }
            KeyCode::Right => {
                self.engine.enqueue_direction(Direction::Right);
                None
            }
            _ => None,
        }
    }

    /// Mouse presses stand in for touch contacts: the press position is
    /// mapped into board units and run through the quadrant heuristic
    /// against the board center.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(self.state, AppState::Playing) {
            return;
        }
        if !matches!(
            mouse.kind,
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
        ) {
            return;
        }
        let Some(area) = self.board_area else {
            return;
        };

        let board = self.engine.state().board;
        let dims = self.render_config.chars_per_cell;
        // Character position inside the bordered widget, then board units.
        let column = (i32::from(mouse.column) - (i32::from(area.x) + 1)) / dims.horizontal as i32;
        let row = (i32::from(mouse.row) - (i32::from(area.y) + 1)) / dims.vertical as i32;
        let x = column * board.cell_size;
        let y = row * board.cell_size;
        for direction in input::touch_directions(x, y, board.width / 2, board.height / 2) {
            self.engine.enqueue_direction(direction);
        }
    }

    pub fn update(&mut self, dt: Duration) {
        if let AppState::Playing = self.state {
            self.elapsed += dt;
            let events = self.engine.run_frame(self.elapsed.as_millis() as u64);
            if events.contains(&GameEvent::SnakeDied) {
                let state = self.engine.state();
                tracing::info!(
                    score = state.snake.food,
                    length = state.snake.len(),
                    tick = state.current_tick(),
                    "game over"
                );
                if let Ok(snapshot) = self.engine.state_json() {
                    tracing::debug!(%snapshot, "final session state");
                }
                self.state = AppState::GameOver {
                    score: state.snake.food,
                    length: state.snake.len(),
                };
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let grid = self
            .board_renderer
            .render(self.engine.state(), &self.render_config);
        let width = grid.physical_width() as u16 + 2;
        let height = grid.physical_height() as u16 + 2;
        let area = centered_rect(width, height, frame.area());
        self.board_area = Some(area);

        let lines: Vec<Line> = grid
            .into_lines()
            .into_iter()
            .map(|row| Line::from(row.into_iter().collect::<String>()))
            .collect();
        let title = format!(" score: {} ", self.engine.state().snake.food);
        frame.render_widget(Paragraph::new(lines).block(Block::bordered().title(title)), area);

        if let AppState::GameOver { score, length } = self.state {
            let message = format!("  GAME OVER  score {score} length {length}  (r)estart (q)uit  ");
            let banner = centered_rect(message.len() as u16, 1, area);
            frame.render_widget(
                Paragraph::new(message).style(Style::new().red().bold()),
                banner,
            );
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::Restart => {
                self.engine = GameEngine::new(&self.config, self.seeds.next_u64());
                self.elapsed = Duration::ZERO;
                self.state = AppState::Playing;
                tracing::info!("session restarted");
            }
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
