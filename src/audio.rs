//! Audio cues.
//!
//! The game only fires cues; how (or whether) they are played is up to the
//! sink. The terminal build rings the terminal bell.

use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Sounds the game can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Jump,
}

/// Fire-and-forget audio trigger.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink that discards every cue.
#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Sink that records cues, for tests and replays.
#[derive(Debug, Default)]
pub struct CueLog {
    pub played: Vec<Cue>,
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

/// Rings the terminal bell on every cue.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.queue(Print('\u{7}'))?;
        self.out.flush()
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if let Err(e) = self.ring() {
            log::warn!("failed to play {:?} cue: {}", cue, e);
        }
    }
}
