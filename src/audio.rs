use std::io::{self, Write};

use log::warn;

use crate::game::TickEvent;

/// Fire-and-forget sound effects.
///
/// Implementations swallow their own failures; game logic never sees them.
pub trait AudioSink {
    fn play_eat(&mut self);
    fn play_game_over(&mut self);
}

/// Plays the sound matching a tick's side effect, if any.
pub fn play_for(sink: &mut dyn AudioSink, event: TickEvent) {
    match event {
        TickEvent::AteFood => sink.play_eat(),
        TickEvent::GameOver(_) => sink.play_game_over(),
        TickEvent::None => {}
    }
}

/// Terminal bell cues: one ring when food is eaten, two on game over.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) {
        let bells = b"\x07".repeat(times);
        if let Err(error) = self.out.write_all(&bells).and_then(|()| self.out.flush()) {
            warn!("terminal bell failed: {error}");
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_eat(&mut self) {
        self.ring(1);
    }

    fn play_game_over(&mut self) {
        self.ring(2);
    }
}

/// Discards every sound (`--mute`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play_eat(&mut self) {}

    fn play_game_over(&mut self) {}
}
