use super::{grid::Grid, snake::Snake};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Classify the collision, if any, at the snake's current head
pub fn check(snake: &Snake, grid: &Grid) -> Option<CollisionType> {
    let head = snake.head();

    if !grid.contains(head) {
        return Some(CollisionType::Wall);
    }

    if snake.collides_with_body(head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// True if the head is off the board or on another segment
pub fn detect(snake: &Snake, grid: &Grid) -> bool {
    check(snake, grid).is_some()
}
