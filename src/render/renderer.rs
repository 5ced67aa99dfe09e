use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Difficulty, GameState, Snapshot};
use crate::metrics::GameMetrics;

/// What occupies one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Food,
    /// Snake segment, by index from the head
    Snake(usize),
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let game_area = chunks[1];
        match snapshot.state {
            GameState::Start => {
                frame.render_widget(self.render_start_screen(), game_area);
            }
            GameState::SelectDifficulty => {
                frame.render_widget(self.render_difficulty_menu(snapshot.difficulty), game_area);
            }
            GameState::Running => {
                frame.render_widget(self.render_grid(snapshot), game_area);
            }
            GameState::Paused => {
                frame.render_widget(self.render_grid(snapshot), game_area);
                let popup = centered_rect(game_area, 30, 5);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_pause_overlay(), popup);
            }
            GameState::GameOver => {
                frame.render_widget(self.render_game_over(snapshot, metrics), game_area);
            }
        }

        frame.render_widget(self.render_controls(snapshot.state), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let snake_len = snapshot.snake.len();
        let lines: Vec<Line> = board_cells(snapshot)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        // Snake head - distinct glyph
                        Cell::Snake(0) => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(segment_color(0, snake_len))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Snake(index) => Span::styled(
                            "□ ",
                            Style::default().fg(segment_color(index, snake_len)),
                        ),
                        Cell::Food => Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Difficulty: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.difficulty.as_str(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_screen(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to choose a difficulty",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_difficulty_menu(&self, current: Difficulty) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Select difficulty",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for (key, difficulty) in [
            ('1', Difficulty::Easy),
            ('2', Difficulty::Normal),
            ('3', Difficulty::Hard),
        ] {
            let style = if difficulty == current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            text.push(Line::from(vec![
                Span::styled(
                    format!("{}. ", key),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(
                        "{:<7} {:>4} ms",
                        difficulty.as_str(),
                        difficulty.tick_interval().as_millis()
                    ),
                    style,
                ),
            ]));
        }

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_pause_overlay(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("P", Style::default().fg(Color::Green)),
                Span::styled(" to resume", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_game_over(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games played: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "any key",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, state: GameState) -> Paragraph<'_> {
        let mut spans = match state {
            GameState::Running | GameState::Paused => vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("P", Style::default().fg(Color::Cyan)),
                Span::raw(" to pause | "),
            ],
            GameState::SelectDifficulty => vec![
                Span::styled("1 2 3", Style::default().fg(Color::Cyan)),
                Span::raw(" to choose | "),
            ],
            GameState::Start | GameState::GameOver => Vec::new(),
        };
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay the snapshot out as rows of cells. Eaten food and segments off the
/// board are not drawn.
fn board_cells(snapshot: &Snapshot) -> Vec<Vec<Cell>> {
    let grid = &snapshot.grid;
    let (columns, rows) = (grid.columns() as usize, grid.rows() as usize);
    let mut cells = vec![vec![Cell::Empty; columns]; rows];

    if !snapshot.food.eaten && grid.contains(snapshot.food.position) {
        let (column, row) = grid.to_cell(snapshot.food.position);
        cells[row as usize][column as usize] = Cell::Food;
    }

    // Tail first so the head wins any overlap
    for (index, &segment) in snapshot.snake.iter().enumerate().rev() {
        if grid.contains(segment) {
            let (column, row) = grid.to_cell(segment);
            cells[row as usize][column as usize] = Cell::Snake(index);
        }
    }

    cells
}

/// Head-to-tail colour gradient: green fading to red through blue
fn segment_color(index: usize, len: usize) -> Color {
    let fraction = index as f32 / len.max(1) as f32;
    let r = (255.0 * fraction) as u8;
    let g = (255.0 * (1.0 - fraction)) as u8;
    let b = (128.0 + 127.0 * (fraction * std::f32::consts::PI).sin()) as u8;
    Color::Rgb(r, g, b)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
