use rand::Rng;

use super::direction::Direction;

/// A position on the game grid, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in a direction, wrapped toroidally: leaving
    /// one edge re-enters from the opposite edge
    pub fn stepped(&self, direction: Direction, grid_width: usize, grid_height: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(grid_width as i32),
            y: (self.y + dy).rem_euclid(grid_height as i32),
        }
    }

    /// The center cell of a grid, where the snake spawns
    pub fn center_of(grid_width: usize, grid_height: usize) -> Self {
        Self::new((grid_width / 2) as i32, (grid_height / 2) as i32)
    }

    /// A uniformly random cell on the grid
    pub fn random(rng: &mut impl Rng, grid_width: usize, grid_height: usize) -> Self {
        Self::new(
            rng.gen_range(0..grid_width as i32),
            rng.gen_range(0..grid_height as i32),
        )
    }
}

/// The food pellet
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Create food on a random cell not covered by `excluded`
    pub fn spawn(
        rng: &mut impl Rng,
        grid_width: usize,
        grid_height: usize,
        excluded: &[Position],
    ) -> Self {
        let mut food = Self {
            position: Position::new(0, 0),
        };
        food.relocate(rng, grid_width, grid_height, excluded);
        food
    }

    /// Move the food to a random cell not covered by `excluded`
    ///
    /// Rejection-samples with no retry bound; callers keep the board far
    /// from saturated.
    pub fn relocate(
        &mut self,
        rng: &mut impl Rng,
        grid_width: usize,
        grid_height: usize,
        excluded: &[Position],
    ) {
        loop {
            let position = Position::random(rng, grid_width, grid_height);
            if !excluded.contains(&position) {
                self.position = position;
                break;
            }
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Steering input waiting to be applied on the next advance, if any
    pub pending: Option<Direction>,
    /// Length the body should reach; growth raises this without
    /// immediately lengthening the body
    pub target_len: usize,
    /// Tail cell vacated by the most recent advance, `None` when the
    /// snake grew instead
    pub last_vacated: Option<Position>,
}

impl Snake {
    /// A length-1 snake at the grid center, heading right
    pub fn spawn(grid_width: usize, grid_height: usize) -> Self {
        Self {
            body: vec![Position::center_of(grid_width, grid_height)],
            direction: Direction::Right,
            pending: None,
            target_len: 1,
            last_vacated: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Queue a direction change; steering straight back into the body
    /// is silently ignored
    pub fn steer(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending = Some(direction);
        }
    }

    /// Raise the target length by one; the body catches up on the next
    /// advance
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// One movement step: apply pending steering, move the head one cell
    /// with wraparound, trim the tail back to the target length, and reset
    /// in place on self-collision. Returns true if a collision reset
    /// occurred.
    pub fn advance(&mut self, grid_width: usize, grid_height: usize, rng: &mut impl Rng) -> bool {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let new_head = self.head().stepped(self.direction, grid_width, grid_height);
        self.body.insert(0, new_head);

        if self.body.len() > self.target_len {
            self.last_vacated = self.body.pop();
        } else {
            self.last_vacated = None;
        }

        // The tail is trimmed before the check, so stepping onto the cell
        // vacated this very tick is not a collision
        if self.body[1..].contains(&new_head) {
            self.reset(grid_width, grid_height, rng);
            return true;
        }

        false
    }

    /// Back to the start state: length 1, centered, random heading
    fn reset(&mut self, grid_width: usize, grid_height: usize, rng: &mut impl Rng) {
        self.body = vec![Position::center_of(grid_width, grid_height)];
        self.direction = Direction::random(rng);
        self.pending = None;
        self.target_len = 1;
        self.last_vacated = None;
    }
}

/// Complete game state, owned by the loop and passed explicitly into
/// every update
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
        }
    }
}
