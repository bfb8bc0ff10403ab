use std::collections::{HashSet, VecDeque};

use crate::config::INITIAL_SNAKE;
use crate::grid::Position;
use crate::input::{Direction, direction_change_is_valid};

/// Mutable snake state: body segments, heading and deferred growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    grow_pending: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the three-segment starting snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(INITIAL_SNAKE),
            direction: Direction::Right,
            grow_pending: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
            grow_pending: false,
        })
    }

    /// Turns towards `direction` unless that would reverse onto the body.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.direction = direction;
        }
    }

    /// Moves one cell. Keeps the tail instead of dropping it when growth is pending.
    ///
    /// Must run exactly once per tick.
    pub fn advance(&mut self) {
        let next_head = self.head().step(self.direction);

        self.body.push_front(next_head);
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Queues growth on the next movement tick. Repeated calls still grow by one.
    pub fn mark_growth(&mut self) {
        self.grow_pending = true;
    }

    /// Restores the starting layout and heading.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the set of cells covered by the body.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
