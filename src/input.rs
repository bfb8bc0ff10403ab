use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Events consumed by the game loop, one at a time in arrival order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Quit,
    KeyDown(Direction),
    TimerTick,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a terminal key event to a game event. Releases and repeats are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(GameEvent::Quit);
    }

    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Direction::Right,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Some(GameEvent::Quit),
        _ => return None,
    };

    Some(GameEvent::KeyDown(direction))
}

/// Fixed-interval deadline for movement ticks.
///
/// A late check fires one tick. After a stall longer than a full interval the
/// missed ticks are skipped and the schedule restarts from `now`.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    next_deadline: Instant,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_deadline: now + interval,
        }
    }

    /// Consumes one tick if its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }

        self.next_deadline = if now >= self.next_deadline + self.interval {
            now + self.interval
        } else {
            self.next_deadline + self.interval
        };
        true
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }
}

/// Merges the tick timer and terminal key presses into one event stream.
#[derive(Debug)]
pub struct EventSource {
    timer: TickTimer,
}

impl EventSource {
    #[must_use]
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            timer: TickTimer::new(tick_interval, Instant::now()),
        }
    }

    /// Waits at most `frame_budget` for the next event.
    ///
    /// Returns `Ok(None)` when the budget elapses with nothing to report, so
    /// the caller can redraw.
    pub fn next_event(&mut self, frame_budget: Duration) -> io::Result<Option<GameEvent>> {
        let now = Instant::now();
        if self.timer.fire_if_due(now) {
            return Ok(Some(GameEvent::TimerTick));
        }

        let wait = self.timer.remaining(now).min(frame_budget);
        match event::poll(wait) {
            Ok(true) => {}
            Ok(false) => return Ok(None),
            Err(error) => return hangup_as_quit(error),
        }

        match event::read() {
            Ok(Event::Key(key)) => Ok(map_key(key)),
            Ok(_) => Ok(None),
            Err(error) => hangup_as_quit(error),
        }
    }
}

/// Maps a closed terminal to [`GameEvent::Quit`]; other errors pass through.
fn hangup_as_quit(error: io::Error) -> io::Result<Option<GameEvent>> {
    match error.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::BrokenPipe => Ok(Some(GameEvent::Quit)),
        _ => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{
        Direction, GameEvent, TickTimer, direction_change_is_valid, hangup_as_quit, map_key,
    };

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn reversal_is_not_a_valid_change() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let press = |code| map_key(KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(press(KeyCode::Up), Some(GameEvent::KeyDown(Direction::Up)));
        assert_eq!(
            press(KeyCode::Char('a')),
            Some(GameEvent::KeyDown(Direction::Left))
        );
        assert_eq!(
            press(KeyCode::Char('S')),
            Some(GameEvent::KeyDown(Direction::Down))
        );
        assert_eq!(
            press(KeyCode::Right),
            Some(GameEvent::KeyDown(Direction::Right))
        );
    }

    #[test]
    fn quit_keys_and_unbound_keys() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(GameEvent::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameEvent::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(map_key(release), None);
    }

    #[test]
    fn tick_timer_fires_once_per_interval() {
        let start = Instant::now();
        let interval = Duration::from_millis(200);
        let mut timer = TickTimer::new(interval, start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(199)));
        assert!(timer.fire_if_due(start + interval));
        assert!(!timer.fire_if_due(start + interval));
        assert_eq!(
            timer.remaining(start + interval),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn slightly_late_check_keeps_the_schedule() {
        let start = Instant::now();
        let interval = Duration::from_millis(200);
        let mut timer = TickTimer::new(interval, start);

        assert!(timer.fire_if_due(start + Duration::from_millis(250)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(250)),
            Duration::from_millis(150)
        );
    }

    #[test]
    fn long_stall_fires_a_single_tick() {
        let start = Instant::now();
        let interval = Duration::from_millis(200);
        let mut timer = TickTimer::new(interval, start);
        let stalled = start + Duration::from_secs(2);

        let fired = (0..20).filter(|_| timer.fire_if_due(stalled)).count();

        assert_eq!(fired, 1);
        assert_eq!(timer.remaining(stalled), interval);
    }

    #[test]
    fn closed_terminal_reads_as_quit() {
        let eof = io::Error::from(io::ErrorKind::UnexpectedEof);
        let broken = io::Error::from(io::ErrorKind::BrokenPipe);

        assert_eq!(hangup_as_quit(eof).ok(), Some(Some(GameEvent::Quit)));
        assert_eq!(hangup_as_quit(broken).ok(), Some(Some(GameEvent::Quit)));
    }

    #[test]
    fn other_input_errors_propagate() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);

        let error = hangup_as_quit(denied).expect_err("permission errors are not a hangup");
        assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
    }
}
