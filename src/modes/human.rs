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
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use crate::game::{GameConfig, GameContext, GameEngine, GameState, Intent};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    ctx: GameContext,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_engine(GameEngine::with_seed(config, seed))
    }

    fn with_engine(engine: GameEngine) -> Self {
        let ctx = engine.new_context();

        Self {
            engine,
            ctx,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
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
        let mut tick_timer = fixed_timer(self.tick_period());
        info!("Game loop started");

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event, &mut tick_timer) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.ctx.is_running() {
                        self.update_game();
                        self.draw(terminal)?;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games_played = self.metrics.games_played,
            best_score = self.metrics.best_score,
            "Game loop stopped"
        );
        Ok(())
    }

    /// Returns true if the screen needs redrawing
    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) -> bool {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release or repeat
                if key.kind != KeyEventKind::Press {
                    return false;
                }

                let intent = self.input_handler.handle_key_event(key);
                self.apply_intent(intent, tick_timer);
                true
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn apply_intent(&mut self, intent: Intent, tick_timer: &mut Interval) {
        if intent == Intent::Quit {
            self.should_quit = true;
            return;
        }

        let previous_state = self.ctx.state;
        let previous_period = self.tick_period();
        self.engine.handle_intent(&mut self.ctx, intent);

        // A new round gets a full first period even at an unchanged difficulty
        let round_started = starts_round(previous_state, self.ctx.state);
        if self.tick_period() != previous_period || round_started {
            debug!(
                period_ms = self.tick_period().as_millis() as u64,
                "Tick timer restarted"
            );
            *tick_timer = fixed_timer(self.tick_period());
        }

        if self.ctx.state != previous_state {
            self.on_state_change(previous_state);
        }
    }

    fn update_game(&mut self) {
        let previous_state = self.ctx.state;
        self.engine.tick(&mut self.ctx);

        if self.ctx.state != previous_state {
            self.on_state_change(previous_state);
        }
    }

    fn on_state_change(&mut self, previous: GameState) {
        match (previous, self.ctx.state) {
            (previous, next) if starts_round(previous, next) => {
                self.metrics.on_game_start();
            }
            (GameState::Running, GameState::Paused) => self.metrics.on_pause(),
            (GameState::Paused, GameState::Running) => self.metrics.on_resume(),
            (GameState::Running, GameState::GameOver) => {
                self.metrics.on_game_over(self.ctx.score);
                info!(score = self.ctx.score, "Game over");
            }
            _ => {}
        }
    }

    fn tick_period(&self) -> Duration {
        self.ctx.difficulty.tick_interval()
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        let snapshot = self.engine.snapshot(&self.ctx);
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &snapshot, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
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

fn starts_round(previous: GameState, next: GameState) -> bool {
    next == GameState::Running
        && matches!(
            previous,
            GameState::Start | GameState::SelectDifficulty | GameState::GameOver
        )
}

/// Fixed-period timer whose first tick is one period away; late ticks are
/// delayed rather than bunched up
fn fixed_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
