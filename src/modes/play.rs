use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Game ticks at 20 Hz (50ms per tick)
const TICK_INTERVAL: Duration = Duration::from_millis(50);
/// Render at 30 FPS (33ms per frame)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// The interactive game: couples the fixed-tick clock, keyboard input,
/// the engine and the renderer
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            paused: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(TICK_INTERVAL);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.engine.tick(&mut self.state);
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, self.paused);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested, leaving game loop");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.state.snake.steer(direction);
                }
                KeyAction::TogglePause => {
                    self.paused = !self.paused;
                    debug!(
                        "{}",
                        if self.paused { "game paused" } else { "game resumed" }
                    );
                }
                KeyAction::Restart => {
                    self.restart();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::Ignored => {}
            }
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.paused = false;
        debug!("game restarted");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_game_initialization() {
        let mode = PlayMode::new(GameConfig::default());
        assert_eq!(mode.state.snake.body.len(), 1);
        assert!(!mode.paused);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_steer_key_queues_direction() {
        let mut mode = PlayMode::new(GameConfig::default());

        mode.handle_event(Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)));

        assert_eq!(mode.state.snake.pending, Some(Direction::Up));
    }

    #[test]
    fn test_pause_toggle() {
        let mut mode = PlayMode::new(GameConfig::default());
        let p = Event::Key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));

        mode.handle_event(p.clone());
        assert!(mode.paused);

        mode.handle_event(p);
        assert!(!mode.paused);
    }

    #[test]
    fn test_restart_returns_to_start() {
        let mut mode = PlayMode::new(GameConfig::default());
        mode.state.snake.grow();
        mode.paused = true;

        mode.restart();

        assert_eq!(mode.state.snake.target_len, 1);
        assert_eq!(mode.state.snake.body.len(), 1);
        assert!(!mode.paused);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut mode = PlayMode::new(GameConfig::default());

        mode.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));

        assert!(mode.should_quit);
    }
}
