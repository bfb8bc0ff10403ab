//! Collision predicates, evaluated after the snake has moved.

use crate::grid::{Grid, Position};
use crate::snake::Snake;

/// What the head ran into on the latest move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Food,
    Wall,
    Tail,
}

/// Returns true when the head sits on the food.
#[must_use]
pub fn food_eaten(head: Position, food: Position) -> bool {
    head == food
}

/// Returns true when the head has left the board.
#[must_use]
pub fn hit_wall(head: Position, grid: Grid) -> bool {
    !grid.in_bounds(head)
}

/// Returns true if the head overlaps any non-head segment.
#[must_use]
pub fn hit_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake.segments().skip(1).any(|segment| *segment == head)
}

/// Reports the first collision that holds, checking food, then wall, then tail.
#[must_use]
pub fn first_collision(snake: &Snake, food: Position, grid: Grid) -> Option<Collision> {
    let head = snake.head();

    if food_eaten(head, food) {
        Some(Collision::Food)
    } else if hit_wall(head, grid) {
        Some(Collision::Wall)
    } else if hit_self(snake) {
        Some(Collision::Tail)
    } else {
        None
    }
}
