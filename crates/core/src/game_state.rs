//! Game state module - the tick engine and status state machine
//!
//! This module ties together grid arithmetic, the direction gate and food placement.
//! It owns the snake body, heading, food, score and lifecycle, and advances the game
//! one cell per [`GameState::tick`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::food::FoodStrategy;
use crate::gate::gate;
use crate::grid;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Head at the front, tail at the back.
    snake: VecDeque<Point>,
    /// Heading used by the last tick.
    direction: Direction,
    /// Latest accepted request, applied at the start of the next tick.
    pending: Direction,
    food: Point,
    score: u32,
    status: Status,
    rng: StdRng,
    seed: u64,
    strategy: FoodStrategy,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Ticks processed while running in the current episode.
    tick_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_strategy(seed, FoodStrategy::default())
    }

    /// Create a new game with an explicit food placement strategy.
    pub fn with_strategy(seed: u64, strategy: FoodStrategy) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake: VecDeque<Point> = INITIAL_SNAKE.iter().copied().collect();
        let food = Self::first_food(&mut rng, strategy, &INITIAL_SNAKE);

        Self {
            snake,
            direction: INITIAL_DIRECTION,
            pending: INITIAL_DIRECTION,
            food,
            score: 0,
            status: Status::Idle,
            rng,
            seed,
            strategy,
            episode_id: 0,
            tick_id: 0,
        }
    }

    /// Create an idle game from an explicit layout.
    ///
    /// Used to set up specific board situations. Food placement uses the default
    /// strategy; chain [`GameState::with_food_strategy`] to change it.
    ///
    /// # Panics
    ///
    /// Panics if `snake` is empty or any cell lies outside the grid.
    pub fn with_layout(seed: u64, snake: Vec<Point>, direction: Direction, food: Point) -> Self {
        assert!(!snake.is_empty(), "snake body must have at least one segment");
        assert!(
            snake.iter().chain([&food]).all(|&p| grid::in_bounds(p, GRID_SIZE)),
            "layout cells must lie on the grid"
        );
        Self {
            snake: snake.into(),
            direction,
            pending: direction,
            food,
            ..Self::new(seed)
        }
    }

    /// Replace the food placement strategy used from the next meal on.
    pub fn with_food_strategy(mut self, strategy: FoodStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    // The initial body leaves hundreds of cells free, so every strategy finds one.
    fn first_food(rng: &mut StdRng, strategy: FoodStrategy, body: &[Point]) -> Point {
        strategy
            .place(rng, GRID_SIZE, body)
            .unwrap_or_else(|| crate::food::place_food(rng, GRID_SIZE, body))
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn head(&self) -> Point {
        // Non-empty by construction.
        self.snake[0]
    }

    pub fn snake(&self) -> &VecDeque<Point> {
        &self.snake
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn strategy(&self) -> FoodStrategy {
        self.strategy
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_id(&self) -> u32 {
        self.tick_id
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    /// `Idle | Paused -> Running`
    pub fn start(&mut self) -> bool {
        match self.status {
            Status::Idle | Status::Paused => {
                self.status = Status::Running;
                true
            }
            Status::Running | Status::GameOver => false,
        }
    }

    /// `Running -> Paused`
    pub fn pause(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        self.status = Status::Paused;
        true
    }

    /// Start when stopped, pause when running.
    pub fn toggle_pause(&mut self) -> bool {
        if self.status.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// `GameOver -> Idle`, rebuilding the initial layout with new food.
    ///
    /// The RNG stream continues, so the new food differs from the first episode's.
    pub fn reset(&mut self) -> bool {
        if self.status != Status::GameOver {
            return false;
        }

        self.snake.clear();
        self.snake.extend(INITIAL_SNAKE);
        self.direction = INITIAL_DIRECTION;
        self.pending = INITIAL_DIRECTION;
        self.score = 0;
        self.status = Status::Idle;
        self.tick_id = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.food = Self::first_food(&mut self.rng, self.strategy, &INITIAL_SNAKE);
        true
    }

    /// Record a direction request for the next tick.
    ///
    /// The request is checked against the heading the snake is actually moving in,
    /// so two quick turns between ticks cannot fold the head back into the neck.
    /// A rejected reversal leaves the pending direction untouched.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.status == Status::GameOver {
            return false;
        }
        if gate(self.direction, requested) != requested {
            return false;
        }
        let changed = self.pending != requested;
        self.pending = requested;
        changed
    }

    /// Advance the snake one cell.
    ///
    /// Collision is checked against the whole pre-tick body, including the tail cell
    /// that a non-growing move would vacate. On collision the body is left as it was.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Idle;
        }

        self.direction = self.pending;
        self.tick_id = self.tick_id.wrapping_add(1);

        let next = grid::step(self.head(), self.direction, GRID_SIZE);

        if self.snake.contains(&next) {
            self.status = Status::GameOver;
            debug!(x = next.x, y = next.y, score = self.score, "snake hit itself");
            return TickOutcome::Collided { at: next };
        }

        self.snake.push_front(next);

        if next != self.food {
            self.snake.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        let body = self.snake.make_contiguous();
        match self.strategy.place(&mut self.rng, GRID_SIZE, body) {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => {
                // Nowhere left to put food: the snake covers the grid.
                debug!(len = self.snake.len(), "grid is full");
                self.status = Status::GameOver;
                TickOutcome::GridFull
            }
        }
    }

    /// Apply a game command
    ///
    /// Returns whether the command changed the state. `Quit` is a driver concern
    /// and never changes the game.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Pause => self.pause(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Reset => self.reset(),
            GameCommand::SetDirection(dir) => self.set_direction(dir),
            GameCommand::Quit => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.score = self.score;
        out.status = self.status;
        out.direction = self.direction;
        out.episode_id = self.episode_id;
        out.tick_id = self.tick_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
