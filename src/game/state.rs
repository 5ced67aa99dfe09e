use super::{
    action::Direction,
    config::{Difficulty, GameConfig},
    food::Food,
    grid::Grid,
    snake::Snake,
};

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Start,
    SelectDifficulty,
    Running,
    Paused,
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SelectDifficulty => "select-difficulty",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::GameOver => "game-over",
        }
    }
}

/// Everything that changes while playing, owned by the control loop
#[derive(Debug, Clone, PartialEq)]
pub struct GameContext {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub state: GameState,
    pub difficulty: Difficulty,
}

impl GameContext {
    /// A context on the start screen, with a freshly spawned snake
    pub fn new(config: &GameConfig) -> Self {
        let snake = spawn_snake(config);
        // No food on the board until a round starts
        let mut food = Food::new(snake.head());
        food.eaten = true;

        Self {
            snake,
            food,
            score: 0,
            state: GameState::Start,
            difficulty: config.difficulty,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }
}

/// A snake of the configured initial length, centred and heading right
pub fn spawn_snake(config: &GameConfig) -> Snake {
    let grid = Grid::from_config(config);
    Snake::new(
        grid.center(),
        Direction::Right,
        config.initial_snake_length,
        config.max_snake_length,
        config.cell_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Position;

    #[test]
    fn test_new_context() {
        let ctx = GameContext::new(&GameConfig::default());

        assert_eq!(ctx.state, GameState::Start);
        assert_eq!(ctx.score, 0);
        assert_eq!(ctx.difficulty, Difficulty::Normal);
        assert_eq!(ctx.snake.len(), 5);
        assert_eq!(ctx.snake.head(), Position::new(320, 240));
        assert!(ctx.food.eaten);
        assert!(!ctx.is_running());
    }

    #[test]
    fn test_spawned_snake_trails_left() {
        let snake = spawn_snake(&GameConfig::default());
        let xs: Vec<i32> = snake.body().iter().map(|pos| pos.x).collect();
        assert_eq!(xs, vec![320, 300, 280, 260, 240]);
        assert!(snake.body().iter().all(|pos| pos.y == 240));
        assert_eq!(snake.max_length(), 100);
    }
}
