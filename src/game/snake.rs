use super::{action::Direction, grid::Position};

/// Outcome of a single movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementResult {
    /// Whether the new head landed on the food
    pub ate: bool,
    /// Where the head moved to
    pub new_head: Position,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Direction used by the last movement step
    heading: Direction,
    /// Direction the next movement step will use
    next_direction: Direction,
    /// Distance covered by one step, in pixels
    step: i32,
    max_length: usize,
}

impl Snake {
    /// Create a snake with its head at `head` and `length` segments trailing
    /// behind it, opposite to `direction`
    pub fn new(
        head: Position,
        direction: Direction,
        length: usize,
        max_length: usize,
        step: i32,
    ) -> Self {
        let max_length = max_length.max(1);
        let length = length.clamp(1, max_length);

        let mut body = Vec::with_capacity(max_length);
        let (dx, dy) = direction.delta();
        for i in 0..length as i32 {
            body.push(head.moved_by(-dx * step * i, -dy * step * i));
        }

        Self {
            body,
            heading: direction,
            next_direction: direction,
            step,
            max_length,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Direction the next step will take
    pub fn direction(&self) -> Direction {
        self.next_direction
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Queue a turn for the next step.
    ///
    /// A turn straight back onto the neck is ignored. The check is made against
    /// the heading of the last step taken, so several turns queued between two
    /// ticks can never add up to a reversal.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.heading.is_opposite(direction) {
            self.next_direction = direction;
        }
    }

    /// Move one cell forward, growing by one segment if the head lands on `food`.
    ///
    /// The new body is built from the previous one in full before it replaces
    /// it. Growth keeps the old tail for this step; at `max_length` the tail is
    /// dropped as usual even if food was eaten.
    pub fn advance(&mut self, food: Position) -> MovementResult {
        self.heading = self.next_direction;
        let new_head = self.head().moved_in_direction(self.heading, self.step);
        let ate = new_head == food;

        let new_len = if ate {
            (self.body.len() + 1).min(self.max_length)
        } else {
            self.body.len()
        };

        let mut body = Vec::with_capacity(self.max_length);
        body.push(new_head);
        body.extend(self.body.iter().take(new_len - 1).copied());
        self.body = body;

        MovementResult { ate, new_head }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: i32 = 20;

    fn snake_at(x: i32, y: i32, direction: Direction, length: usize) -> Snake {
        Snake::new(Position::new(x, y), direction, length, 100, STEP)
    }

    #[test]
    fn test_snake_creation() {
        let snake = snake_at(320, 240, Direction::Right, 5);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Position::new(320, 240));
        assert_eq!(snake.body()[1], Position::new(300, 240));
        assert_eq!(snake.body()[4], Position::new(240, 240));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_move_without_food() {
        let mut snake = snake_at(200, 200, Direction::Right, 3);
        let before = snake.body().to_vec();

        let result = snake.advance(Position::new(0, 0));

        assert!(!result.ate);
        assert_eq!(result.new_head, Position::new(220, 200));
        assert_eq!(snake.len(), 3);
        // Every segment takes the place of the one ahead of it
        assert_eq!(snake.body()[1], before[0]);
        assert_eq!(snake.body()[2], before[1]);
    }

    #[test]
    fn test_move_onto_food_grows() {
        let mut snake = snake_at(200, 200, Direction::Right, 5);
        let old_tail = *snake.body().last().unwrap();

        let result = snake.advance(Position::new(220, 200));

        assert!(result.ate);
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.head(), Position::new(220, 200));
        // Growth keeps the old tail instead of inventing a new segment
        assert_eq!(*snake.body().last().unwrap(), old_tail);
    }

    #[test]
    fn test_growth_clamps_at_max_length() {
        let mut snake = Snake::new(Position::new(200, 200), Direction::Right, 4, 4, STEP);

        let result = snake.advance(Position::new(220, 200));

        assert!(result.ate);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(220, 200));
        assert_eq!(*snake.body().last().unwrap(), Position::new(160, 200));
    }

    #[test]
    fn test_length_only_changes_when_eating() {
        let mut snake = snake_at(200, 200, Direction::Right, 5);
        let food = Position::new(260, 200);

        for _ in 0..5 {
            let before = snake.len();
            let result = snake.advance(food);
            let expected = if result.ate { before + 1 } else { before };
            assert_eq!(snake.len(), expected);
        }
        assert_eq!(snake.len(), 6);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = snake_at(200, 200, Direction::Right, 5);

        snake.set_direction(Direction::Left);

        assert_eq!(snake.direction(), Direction::Right);
        snake.advance(Position::new(0, 0));
        assert_eq!(snake.head(), Position::new(220, 200));
    }

    #[test]
    fn test_double_turn_within_tick_cannot_reverse() {
        let mut snake = snake_at(200, 200, Direction::Right, 5);

        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);

        assert_eq!(snake.direction(), Direction::Up);
        snake.advance(Position::new(0, 0));
        assert_eq!(snake.head(), Position::new(200, 180));

        // Once the upward step is taken, turning left is legal
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_collision_with_body() {
        let snake = snake_at(100, 100, Direction::Right, 3);
        assert!(!snake.collides_with_body(Position::new(100, 100))); // head
        assert!(snake.collides_with_body(Position::new(80, 100))); // body
        assert!(!snake.collides_with_body(Position::new(200, 200))); // empty
        assert!(snake.occupies(Position::new(100, 100)));
    }
}
