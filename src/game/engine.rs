use super::{
    action::Intent,
    collision,
    config::{Difficulty, GameConfig},
    food::Food,
    grid::{Grid, Position},
    state::{GameContext, GameState, spawn_snake},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

/// Read-only view of the game, handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Snake segments, head first
    pub snake: Vec<Position>,
    pub food: Food,
    pub score: u32,
    pub state: GameState,
    pub difficulty: Difficulty,
    pub grid: Grid,
}

/// Drives a [`GameContext`]: screen transitions and the per-tick simulation
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let grid = Grid::from_config(&config);
        Self { config, grid, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A fresh context sitting on the start screen
    pub fn new_context(&self) -> GameContext {
        GameContext::new(&self.config)
    }

    /// Apply one player intent to the current screen
    pub fn handle_intent(&mut self, ctx: &mut GameContext, intent: Intent) {
        match ctx.state {
            GameState::Start => self.on_start(ctx, intent),
            GameState::SelectDifficulty => self.on_select_difficulty(ctx, intent),
            GameState::Running => self.on_running(ctx, intent),
            GameState::Paused => self.on_paused(ctx, intent),
            GameState::GameOver => self.on_game_over(ctx, intent),
        }
    }

    fn on_start(&mut self, ctx: &mut GameContext, intent: Intent) {
        if !intent.is_any_key() {
            return;
        }

        if self.config.select_difficulty {
            transition(ctx, GameState::SelectDifficulty);
        } else {
            let difficulty = self.config.difficulty;
            self.start_round(ctx, difficulty);
        }
    }

    fn on_select_difficulty(&mut self, ctx: &mut GameContext, intent: Intent) {
        if let Intent::SelectDifficulty(difficulty) = intent {
            self.start_round(ctx, difficulty);
        }
    }

    fn on_running(&mut self, ctx: &mut GameContext, intent: Intent) {
        match intent {
            Intent::Move(direction) => ctx.snake.set_direction(direction),
            Intent::TogglePause => transition(ctx, GameState::Paused),
            Intent::SelectDifficulty(_) | Intent::AnyKey | Intent::Quit => {}
        }
    }

    fn on_paused(&mut self, ctx: &mut GameContext, intent: Intent) {
        if intent == Intent::TogglePause {
            transition(ctx, GameState::Running);
        }
    }

    fn on_game_over(&mut self, ctx: &mut GameContext, intent: Intent) {
        if !intent.is_any_key() {
            return;
        }

        ctx.score = 0;
        if self.config.select_difficulty {
            transition(ctx, GameState::SelectDifficulty);
        } else {
            let difficulty = ctx.difficulty;
            self.start_round(ctx, difficulty);
        }
    }

    /// Reset snake, food and score, then start running at `difficulty`
    fn start_round(&mut self, ctx: &mut GameContext, difficulty: Difficulty) {
        ctx.difficulty = difficulty;
        ctx.snake = spawn_snake(&self.config);
        ctx.score = 0;
        info!(
            difficulty = difficulty.as_str(),
            tick_ms = difficulty.tick_interval().as_millis() as u64,
            "Starting round"
        );

        match ctx.food.relocate(&ctx.snake, &self.grid, &mut self.rng) {
            Ok(()) => transition(ctx, GameState::Running),
            Err(err) => {
                warn!(%err, "No room for food at round start");
                transition(ctx, GameState::GameOver);
            }
        }
    }

    /// Advance the simulation by one tick. Does nothing unless running.
    pub fn tick(&mut self, ctx: &mut GameContext) -> Snapshot {
        if ctx.is_running() {
            self.step(ctx);
        }
        self.snapshot(ctx)
    }

    fn step(&mut self, ctx: &mut GameContext) {
        if ctx.food.eaten {
            if let Err(err) = ctx.food.relocate(&ctx.snake, &self.grid, &mut self.rng) {
                warn!(%err, score = ctx.score, "Board is full, ending round");
                transition(ctx, GameState::GameOver);
                return;
            }
            debug!(x = ctx.food.position.x, y = ctx.food.position.y, "Food placed");
        }

        let movement = ctx.snake.advance(ctx.food.position);
        if movement.ate {
            ctx.score += self.config.score_per_food;
            ctx.food.eaten = true;
            debug!(score = ctx.score, length = ctx.snake.len(), "Food eaten");
        }

        if let Some(collision) = collision::check(&ctx.snake, &self.grid) {
            info!(
                ?collision,
                x = movement.new_head.x,
                y = movement.new_head.y,
                score = ctx.score,
                "Snake crashed"
            );
            transition(ctx, GameState::GameOver);
        }
    }

    /// Project the context for drawing
    pub fn snapshot(&self, ctx: &GameContext) -> Snapshot {
        Snapshot {
            snake: ctx.snake.body().to_vec(),
            food: ctx.food,
            score: ctx.score,
            state: ctx.state,
            difficulty: ctx.difficulty,
            grid: self.grid,
        }
    }
}

fn transition(ctx: &mut GameContext, next: GameState) {
    debug!(from = ctx.state.as_str(), to = next.as_str(), "State transition");
    ctx.state = next;
}
