use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::collision::{Collision, check_food_collision, classify};
use crate::commands::{Command, CommandQueue, CommandSender, command_channel};
use crate::config::GameConfig;
use crate::error::{ConfigError, Error, InputError, PlacementError};
use crate::food;
use crate::input::{Direction, direction_change_is_valid};
use crate::motion::next_head;
use crate::score::SpeedRules;
use crate::snake::{Cell, Snake};

/// Why a session went back to its starting configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResetCause {
    WallCollision,
    SelfCollision,
    /// The snake covered the whole grid and no food could be placed.
    BoardFilled,
    /// Explicit restart from the player.
    Requested,
}

impl From<Collision> for ResetCause {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Self::WallCollision,
            Collision::SelfCollision => Self::SelfCollision,
        }
    }
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepEvent {
    /// No direction yet; nothing moved.
    Idle,
    Moved,
    Ate { speed_changed: bool },
    Reset { cause: ResetCause },
}

/// Result of [`Game::step`] and [`Game::reset`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StepOutcome {
    pub event: StepEvent,
    /// New tick interval when it changed; the tick driver must be re-armed.
    pub reschedule: Option<Duration>,
}

impl StepOutcome {
    fn unscheduled(event: StepEvent) -> Self {
        Self {
            event,
            reschedule: None,
        }
    }
}

/// Snapshot of one session at a tick boundary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    /// Current tick interval in milliseconds.
    pub speed_ms: u64,
    pub tile_count: u16,
}

impl GameState {
    /// Current tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

/// Owns the session state and advances it one tick at a time.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    pending_direction: Option<Direction>,
    next_pending_direction: Option<Direction>,
    initial_snake: Snake,
    initial_speed_ms: u64,
    tile_count: u16,
    rules: SpeedRules,
    commands: CommandQueue,
    sender: CommandSender,
    rng: StdRng,
    tick_count: u64,
    best_score: u32,
    last_reset: Option<ResetCause>,
}

impl Game {
    /// Starts a session with entropy-seeded food placement.
    pub fn new(config: &GameConfig) -> Result<Self, Error> {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Starts a reproducible session for tests and replays.
    pub fn new_with_seed(config: &GameConfig, seed: u64) -> Result<Self, Error> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Resumes from an explicit state; resets still use `config`.
    ///
    /// The state must share the config's grid, keep its snake inside that
    /// grid and have its food on a free cell.
    pub fn with_state(config: &GameConfig, state: GameState, seed: u64) -> Result<Self, Error> {
        let mut game = Self::new_with_seed(config, seed)?;
        check_resumed_state(&state, game.tile_count)?;
        game.state = state;
        Ok(game)
    }

    fn from_rng(config: &GameConfig, mut rng: StdRng) -> Result<Self, Error> {
        config.validate()?;
        let initial_snake = config.initial_snake()?;
        let state = initial_state(
            &mut rng,
            &initial_snake,
            config.tile_count,
            config.initial_speed_ms,
        )?;
        let (sender, commands) = command_channel();

        debug!(
            tile_count = config.tile_count,
            speed_ms = config.initial_speed_ms,
            "session started"
        );

        Ok(Self {
            state,
            pending_direction: None,
            next_pending_direction: None,
            initial_snake,
            initial_speed_ms: config.initial_speed_ms,
            tile_count: config.tile_count,
            rules: config.speed_rules(),
            commands,
            sender,
            rng,
            tick_count: 0,
            best_score: 0,
            last_reset: None,
        })
    }

    /// Advances the session by one tick.
    ///
    /// Queued commands are applied first, then the buffered direction is
    /// committed and read once for the whole move.
    ///
    /// A snake still waiting for its first direction does not move: the zero
    /// vector would put the head on its own cell, which a literal collision
    /// check treats as fatal. That step reports [`StepEvent::Idle`] instead
    /// of resetting and re-placing food on every tick.
    pub fn step(&mut self) -> Result<StepOutcome, PlacementError> {
        self.tick_count += 1;

        if let Some(outcome) = self.apply_commands()? {
            return Ok(outcome);
        }

        if let Some(next) = self.pending_direction.take() {
            self.state.direction = next;
            self.pending_direction = self.next_pending_direction.take();
        }

        let direction = self.state.direction;
        if !direction.is_moving() {
            return Ok(StepOutcome::unscheduled(StepEvent::Idle));
        }

        let head = next_head(self.state.snake.head(), direction);
        if let Some(collision) = classify(head, &self.state.snake, self.state.tile_count) {
            return self.reset_with(collision.into());
        }

        self.state.snake.push_head(head);

        if !check_food_collision(head, self.state.food) {
            self.state.snake.pop_tail();
            return Ok(StepOutcome::unscheduled(StepEvent::Moved));
        }

        let reward = self
            .rules
            .on_food_eaten(self.state.score, self.state.speed_ms);
        self.state.score = reward.score;
        self.state.speed_ms = reward.speed_ms;
        self.best_score = self.best_score.max(reward.score);

        if reward.speed_changed {
            info!(
                score = reward.score,
                speed_ms = reward.speed_ms,
                "tick interval shortened"
            );
        }

        match food::place(&mut self.rng, &self.state.snake, self.state.tile_count) {
            Ok(cell) => self.state.food = cell,
            Err(error) => {
                warn!(%error, score = self.state.score, "snake filled the board");
                return self.reset_with(ResetCause::BoardFilled);
            }
        }

        Ok(StepOutcome {
            event: StepEvent::Ate {
                speed_changed: reward.speed_changed,
            },
            reschedule: reward.speed_changed.then(|| self.state.interval()),
        })
    }

    /// Restarts the session from the configured snake, score and speed.
    pub fn reset(&mut self) -> Result<StepOutcome, PlacementError> {
        self.reset_with(ResetCause::Requested)
    }

    /// Buffers a direction for the next tick.
    ///
    /// The first turn of a tick is checked against the direction in effect;
    /// a second one is held for the tick after and checked against the first.
    /// Returns false when the turn would reverse the active axis, or when it
    /// would stop a snake that is already moving.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let stopping = !direction.is_moving();
        if stopping && (self.state.direction.is_moving() || self.pending_direction.is_some()) {
            debug!(current = ?self.state.direction, "stop rejected");
            return false;
        }

        let Some(pending) = self.pending_direction else {
            if !direction_change_is_valid(self.state.direction, direction) {
                debug!(?direction, current = ?self.state.direction, "reversal rejected");
                return false;
            }
            if direction != self.state.direction {
                self.pending_direction = Some(direction);
            }
            return true;
        };

        if !direction_change_is_valid(pending, direction) {
            debug!(?direction, queued = ?pending, "reversal of queued turn rejected");
            return false;
        }
        self.next_pending_direction = Some(direction);
        true
    }

    /// Validates a raw `(dx, dy)` vector and buffers it.
    pub fn set_direction(&mut self, dx: i32, dy: i32) -> Result<bool, InputError> {
        let direction = Direction::try_from((dx, dy))?;
        Ok(self.steer(direction))
    }

    /// Returns a handle for queueing commands from other input sources.
    #[must_use]
    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Steps taken since the session started, resets included.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Highest score reached since the program started.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn last_reset(&self) -> Option<ResetCause> {
        self.last_reset
    }

    fn apply_commands(&mut self) -> Result<Option<StepOutcome>, PlacementError> {
        let speed_before = self.state.speed_ms;
        let mut reset = None;
        for command in self.commands.drain() {
            match command {
                Command::Steer(direction) => {
                    self.steer(direction);
                }
                Command::Reset => reset = Some(self.reset_with(ResetCause::Requested)?.event),
            }
        }

        // Several resets in one drain: only the net interval change matters.
        Ok(reset.map(|event| StepOutcome {
            event,
            reschedule: (speed_before != self.state.speed_ms).then(|| self.state.interval()),
        }))
    }

    fn reset_with(&mut self, cause: ResetCause) -> Result<StepOutcome, PlacementError> {
        let previous_speed_ms = self.state.speed_ms;
        self.state = initial_state(
            &mut self.rng,
            &self.initial_snake,
            self.tile_count,
            self.initial_speed_ms,
        )?;
        self.pending_direction = None;
        self.next_pending_direction = None;
        self.last_reset = Some(cause);

        debug!(?cause, food = ?self.state.food, "session reset");

        Ok(StepOutcome {
            event: StepEvent::Reset { cause },
            reschedule: (previous_speed_ms != self.state.speed_ms).then(|| self.state.interval()),
        })
    }
}

fn check_resumed_state(state: &GameState, tile_count: u16) -> Result<(), ConfigError> {
    if state.tile_count != tile_count {
        return Err(ConfigError::GridMismatch {
            state: state.tile_count,
            config: tile_count,
        });
    }

    if let Some(outside) = state
        .snake
        .segments()
        .find(|segment| !segment.is_within_grid(tile_count))
    {
        return Err(ConfigError::StateOutOfBounds {
            x: outside.x,
            y: outside.y,
            tile_count,
        });
    }

    if !state.food.is_within_grid(tile_count) || state.snake.occupies(state.food) {
        return Err(ConfigError::MisplacedFood {
            x: state.food.x,
            y: state.food.y,
        });
    }

    Ok(())
}

fn initial_state(
    rng: &mut StdRng,
    snake: &Snake,
    tile_count: u16,
    speed_ms: u64,
) -> Result<GameState, PlacementError> {
    let food = food::place(rng, snake, tile_count)?;
    Ok(GameState {
        snake: snake.clone(),
        food,
        direction: Direction::Idle,
        score: 0,
        speed_ms,
        tile_count,
    })
}
