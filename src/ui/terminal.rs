//! Terminal-backed drawing surface.

use super::scene::{Scene, SceneView};
use super::surface::{RenderSurface, TextService};
use crate::core::geometry::{Point, Rect, Rgb};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Owns the terminal for the lifetime of the game. Raw mode and the
/// alternate screen are entered on creation and left on [`restore`] or drop.
///
/// [`restore`]: TerminalSurface::restore
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    scene: Scene,
    width: f64,
    height: f64,
    restored: bool,
}

impl TerminalSurface {
    /// Take over the terminal. `width` x `height` is the logical screen size
    /// the game draws in; it is scaled to fit the terminal.
    pub fn new(width: f64, height: f64) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        undo_on_err(stdout.execute(EnterAlternateScreen).map(|_| ()), || {
            let _ = disable_raw_mode();
        })?;
        let terminal = undo_on_err(open_terminal(stdout), || {
            let _ = io::stdout().execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        Ok(Self {
            terminal,
            scene: Scene::new(),
            width,
            height,
            restored: false,
        })
    }

    /// Give the terminal back to the shell.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

fn open_terminal(stdout: Stdout) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Run `undo` if `result` failed, then pass the result through.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Combine the outcome of a run with the outcome of restoring the terminal.
/// A run error wins; a restore error that follows it is only logged.
pub fn finish<T>(run: io::Result<T>, restored: io::Result<()>) -> io::Result<T> {
    match (run, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            log::error!("failed to restore terminal: {}", restore_err);
            Err(e)
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("failed to restore terminal: {}", e);
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn clear(&mut self, color: Rgb) {
        self.scene.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.scene.fill_rect(rect, color);
    }

    fn present(&mut self) -> io::Result<()> {
        self.scene.present()?;
        let view = SceneView::new(self.scene.last_frame(), self.width, self.height);
        self.terminal.draw(|frame| {
            let area = frame.size();
            frame.render_widget(view, area);
        })?;
        Ok(())
    }
}

impl TextService for TerminalSurface {
    fn draw_text(&mut self, text: &str, anchor: Point, color: Rgb, size: u16) {
        self.scene.draw_text(text, anchor, color, size);
    }
}
