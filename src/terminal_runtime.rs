use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::config::{TITLE, Theme};
use crate::game::GameController;
use crate::renderer;

/// Game screen drawn with `theme` on backend `B`.
///
/// Sessions created with [`TerminalSession::enter`] own the real terminal
/// (raw mode, alternate screen, window title) and hand it back on drop.
pub struct TerminalSession<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    owns_tty: bool,
}

impl TerminalSession<CrosstermBackend<io::Stdout>> {
    /// Takes over stdout: panic hook, raw mode, alternate screen, title.
    pub fn enter(theme: Theme) -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide, SetTitle(TITLE)) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Self::open(CrosstermBackend::new(stdout), theme, true) {
            Ok(session) => Ok(session),
            Err(error) => {
                let _ = release_tty();
                Err(error)
            }
        }
    }
}

impl<B: Backend> TerminalSession<B> {
    /// Wraps an arbitrary backend without touching the process terminal.
    pub fn with_backend(backend: B, theme: Theme) -> io::Result<Self> {
        Self::open(backend, theme, false)
    }

    fn open(backend: B, theme: Theme, owns_tty: bool) -> io::Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            theme,
            owns_tty,
        })
    }

    /// Draws one frame of `game`.
    pub fn draw(&mut self, game: &GameController) -> io::Result<()> {
        let theme = self.theme;
        self.terminal
            .draw(|frame| renderer::render(frame, game, &theme))
            .map(|_| ())
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Drop for TerminalSession<B> {
    fn drop(&mut self) {
        if self.owns_tty {
            let _ = release_tty();
        }
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = release_tty();
        default_hook(panic_info);
    }));
}

fn release_tty() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
