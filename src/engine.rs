use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple;
use crate::config::{self, GridSize};
use crate::input::Direction;
use crate::score::ScoreStore;
use crate::snake::{Position, Snake};

/// Immutable view of the game state handed to the renderer after every step
/// or reset. The renderer never mutates the engine.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub apple: Position,
    pub score: u32,
    pub game_over: bool,
}

/// Complete mutable game state for one session.
pub struct GameEngine {
    pub snake: Snake,
    pub apple: Position,
    pub score: u32,
    pub game_over: bool,
    direction: Direction,
    bounds: GridSize,
    rng: StdRng,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    /// Creates an engine in the standard starting layout.
    #[must_use]
    pub fn new(bounds: GridSize, store: Box<dyn ScoreStore>) -> Self {
        Self::with_rng(bounds, store, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, store: Box<dyn ScoreStore>, seed: u64) -> Self {
        Self::with_rng(bounds, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, store: Box<dyn ScoreStore>, rng: StdRng) -> Self {
        Self {
            snake: Snake::from_segments(config::initial_snake()),
            apple: config::INITIAL_APPLE,
            score: 0,
            game_over: false,
            direction: config::INITIAL_DIRECTION,
            bounds,
            rng,
            store,
        }
    }

    /// Reinitializes all state for a fresh session.
    pub fn reset(&mut self, snake: Vec<Position>, apple: Position, direction: Direction) {
        self.snake = Snake::from_segments(snake);
        self.apple = apple;
        self.direction = direction;
        self.score = 0;
        self.game_over = false;
    }

    /// Replaces the travel direction unless the change is an exact reversal,
    /// which would drive the head into its own neck on the next tick.
    /// Re-setting the unchanged direction is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }

        self.direction = direction;
    }

    /// Advances the game by one tick.
    ///
    /// Collision is checked against the pre-step body, so moving onto the
    /// cell the tail is about to vacate still ends the game. The attempted
    /// move is committed either way; the game-over frame shows where the
    /// snake tried to go. Once `game_over` is set, further calls do nothing
    /// until [`reset`](Self::reset).
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        let new_head = self.snake.head().offset(self.direction);
        let collided = !new_head.is_within_bounds(self.bounds) || self.snake.occupies(new_head);

        self.snake.push_head(new_head);

        if collided {
            self.game_over = true;
            if let Err(error) = self.store.set_if_higher(self.score) {
                eprintln!("Failed to save high score: {error}");
            }
        }

        if new_head == self.apple {
            self.score += 1;
            self.apple = apple::spawn_position(&mut self.rng, self.bounds, &self.snake);
        } else {
            self.snake.drop_tail();
        }
    }

    /// Returns the render-contract view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            apple: self.apple,
            score: self.score,
            game_over: self.game_over,
        }
    }

    /// Current travel direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Grid bounds the engine was created with.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// High score as reported by the injected store.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.store.get()
    }
}
