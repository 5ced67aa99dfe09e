use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest window edge accepted, in pixels
pub const MAX_WINDOW_EDGE: i32 = 16_384;
/// Largest number of cells a board may have
pub const MAX_CELLS: usize = 65_536;

/// Game pace, chosen on the difficulty screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Map a menu choice (1, 2 or 3) to a difficulty
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::Easy),
            2 => Some(Self::Normal),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Delay between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(200),
            Self::Normal => Duration::from_millis(100),
            Self::Hard => Duration::from_millis(50),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}

/// Configuration for the game
///
/// Dimensions are in pixels; every position on the board is a multiple of
/// `cell_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play area in pixels
    pub window_width: i32,
    /// Height of the play area in pixels
    pub window_height: i32,
    /// Edge length of one grid cell in pixels
    pub cell_size: i32,
    /// Length of the snake when a round starts
    pub initial_snake_length: usize,
    /// Length the snake can never grow past
    pub max_snake_length: usize,
    /// Points awarded per food eaten
    pub score_per_food: u32,
    /// Show the difficulty screen between rounds
    pub select_difficulty: bool,
    /// Difficulty used before (or instead of) a selection
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            cell_size: 20,
            initial_snake_length: 5,
            max_snake_length: 100,
            score_per_food: 10,
            select_difficulty: true,
            difficulty: Difficulty::Normal,
        }
    }
}

impl GameConfig {
    /// Configuration that skips the difficulty screen and always plays at `difficulty`
    pub fn with_fixed_difficulty(difficulty: Difficulty) -> Self {
        Self {
            select_difficulty: false,
            difficulty,
            ..Default::default()
        }
    }

    /// Read a configuration from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window dimensions must be positive"
        );
        ensure!(
            self.window_width <= MAX_WINDOW_EDGE && self.window_height <= MAX_WINDOW_EDGE,
            "window {}x{} exceeds the {} pixel limit",
            self.window_width,
            self.window_height,
            MAX_WINDOW_EDGE
        );
        ensure!(
            self.window_width % self.cell_size == 0 && self.window_height % self.cell_size == 0,
            "window {}x{} is not a multiple of cell_size {}",
            self.window_width,
            self.window_height,
            self.cell_size
        );

        let columns = (self.window_width / self.cell_size) as usize;
        let rows = (self.window_height / self.cell_size) as usize;
        let cells = columns
            .checked_mul(rows)
            .filter(|&cells| cells <= MAX_CELLS)
            .with_context(|| {
                format!(
                    "board of {}x{} cells exceeds the {} cell limit",
                    columns, rows, MAX_CELLS
                )
            })?;

        ensure!(
            self.initial_snake_length > 0,
            "initial_snake_length must be at least 1"
        );
        ensure!(
            self.initial_snake_length <= self.max_snake_length,
            "initial_snake_length {} exceeds max_snake_length {}",
            self.initial_snake_length,
            self.max_snake_length
        );
        // At least one cell stays free for food, even at full length
        ensure!(
            self.max_snake_length < cells,
            "max_snake_length {} leaves no free cell on a board of {} cells",
            self.max_snake_length,
            cells
        );

        // The snake spawns at the centre cell with its body trailing to the left
        let centre_column = columns / 2;
        ensure!(
            self.initial_snake_length <= centre_column + 1,
            "initial snake of length {} does not fit on a {} pixel wide board",
            self.initial_snake_length,
            self.window_width
        );

        Ok(())
    }
}
