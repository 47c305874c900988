use rand::rngs::ThreadRng;
use tracing::debug;

use super::{
    config::GameConfig,
    state::{Food, GameState, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// The snake ran into itself and was reset in place
    pub reset: bool,
}

/// Drives the per-tick state transition
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// The canonical start state: a length-1 snake at the grid center
    /// heading right, food on a random free cell
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::spawn(self.config.grid_width, self.config.grid_height);
        let food = Food::spawn(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            &snake.body,
        );

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the game by one tick
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        let reset = state
            .snake
            .advance(state.grid_width, state.grid_height, &mut self.rng);

        if reset {
            debug!("self-collision, snake reset to center");
        }

        // The consumption check runs even on a reset tick: a freshly
        // centered head can land on the food
        let ate_food = state.snake.head() == state.food.position;
        if ate_food {
            state.snake.grow();
            state.food.relocate(
                &mut self.rng,
                state.grid_width,
                state.grid_height,
                &state.snake.body,
            );
            debug!("food eaten, target length now {}", state.snake.target_len);
        }

        TickOutcome { ate_food, reset }
    }
}
