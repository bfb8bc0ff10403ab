use log::{debug, info, warn};

use crate::collision::{Collision, first_collision};
use crate::config::GRID_CELLS;
use crate::food::{FoodSpawner, SpawnError};
use crate::grid::{Grid, Position};
use crate::input::{Direction, GameEvent};
use crate::snake::Snake;

/// Whether the snake is moving or waiting for a restart.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Running,
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverCause {
    Wall,
    Tail,
    /// The snake filled the board and no cell was left for food.
    BoardFull,
}

/// Side effect of one tick, for the audio and presentation layers to act on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    None,
    AteFood,
    GameOver(GameOverCause),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameController {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub state: RunState,
    spawner: FoodSpawner,
}

impl GameController {
    /// Creates a running game on the standard board with a fixed seed.
    pub fn new_with_seed(seed: u64) -> Result<Self, SpawnError> {
        Self::with_spawner(FoodSpawner::with_seed(Grid::new(GRID_CELLS), seed))
    }

    /// Creates a running game; the board size is taken from `spawner`.
    pub fn with_spawner(mut spawner: FoodSpawner) -> Result<Self, SpawnError> {
        let snake = Snake::new();
        debug_assert!(snake.segments().all(|cell| spawner.grid().in_bounds(*cell)));

        let food = spawner.place(&snake.occupied_cells())?;

        Ok(Self {
            snake,
            food,
            score: 0,
            state: RunState::Running,
            spawner,
        })
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.spawner.grid()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Advances the simulation by one tick. Does nothing after game over.
    pub fn tick(&mut self) -> TickEvent {
        if self.state != RunState::Running {
            return TickEvent::None;
        }

        self.snake.advance();

        match first_collision(&self.snake, self.food, self.grid()) {
            Some(Collision::Food) => self.eat(),
            Some(Collision::Wall) => self.game_over(GameOverCause::Wall),
            Some(Collision::Tail) => self.game_over(GameOverCause::Tail),
            None => TickEvent::None,
        }
    }

    /// Applies a direction key. Returns true when the key restarted the run.
    ///
    /// The snake was already reset at the collision; restarting only clears
    /// the score. The same key then steers the fresh snake.
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        let restarted = self.state == RunState::GameOver;
        if restarted {
            info!("restarting after game over with score {}", self.score);
            self.state = RunState::Running;
            self.score = 0;
        }

        self.snake.set_direction(direction);
        restarted
    }

    /// Applies one event from the input source.
    pub fn apply(&mut self, event: GameEvent) -> TickEvent {
        match event {
            GameEvent::TimerTick => self.tick(),
            GameEvent::KeyDown(direction) => {
                self.handle_direction(direction);
                TickEvent::None
            }
            GameEvent::Quit => TickEvent::None,
        }
    }

    fn eat(&mut self) -> TickEvent {
        self.snake.mark_growth();
        self.score += 1;

        match self.spawner.place(&self.snake.occupied_cells()) {
            Ok(food) => {
                debug!("food eaten at {:?}, next food at {food:?}", self.food);
                self.food = food;
                TickEvent::AteFood
            }
            Err(error) => {
                info!("{error}");
                self.game_over(GameOverCause::BoardFull)
            }
        }
    }

    fn game_over(&mut self, cause: GameOverCause) -> TickEvent {
        info!(
            "game over ({cause:?}) at {:?} with score {}",
            self.snake.head(),
            self.score
        );

        self.snake.reset();
        match self.spawner.place(&self.snake.occupied_cells()) {
            Ok(food) => self.food = food,
            Err(error) => warn!("keeping previous food after reset: {error}"),
        }
        self.state = RunState::GameOver;

        TickEvent::GameOver(cause)
    }
}
