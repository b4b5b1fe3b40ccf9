//! Input events and the terminal input source.
//!
//! Keys are translated into UI-agnostic [`InputEvent`]s so the game loop
//! never sees crossterm types.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Keys the game cares about. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Up,
    Char(char),
    Other,
}

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the game.
    Quit,
    KeyDown(Key),
}

impl InputEvent {
    /// Whether this event triggers a jump.
    pub fn is_jump(&self) -> bool {
        matches!(self, InputEvent::KeyDown(Key::Space | Key::Up))
    }
}

/// Input collected for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    pub jump: bool,
}

impl FrameInput {
    /// Fold a drained event queue into a single frame's input.
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut input = FrameInput::default();
        for event in events {
            match event {
                InputEvent::Quit => input.quit = true,
                e if e.is_jump() => input.jump = true,
                _ => {}
            }
        }
        input
    }
}

/// Source of input events, drained once per frame.
pub trait InputSource {
    /// Return every pending event without blocking.
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Reads key presses from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(e) = map_key_event(key_event) {
                    events.push(e);
                }
            }
        }
        Ok(events)
    }
}

/// Translate a crossterm key event. Releases and repeats are dropped.
pub fn map_key_event(key_event: KeyEvent) -> Option<InputEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c'))
    {
        return Some(InputEvent::Quit);
    }
    let event = match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        KeyCode::Char(' ') => InputEvent::KeyDown(Key::Space),
        KeyCode::Up => InputEvent::KeyDown(Key::Up),
        KeyCode::Char(c) => InputEvent::KeyDown(Key::Char(c)),
        _ => InputEvent::KeyDown(Key::Other),
    };
    Some(event)
}

/// Replays a fixed script of per-frame event batches.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_and_up_jump() {
        assert_eq!(
            map_key_event(press(KeyCode::Char(' '))),
            Some(InputEvent::KeyDown(Key::Space))
        );
        assert!(map_key_event(press(KeyCode::Up)).unwrap().is_jump());
        assert!(!map_key_event(press(KeyCode::Char('x'))).unwrap().is_jump());
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(map_key_event(press(KeyCode::Down)), Some(InputEvent::KeyDown(Key::Other)));
        assert_eq!(
            map_key_event(press(KeyCode::Char('q'))),
            Some(InputEvent::Quit)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release), None);
    }

    #[test]
    fn test_frame_input_folds_events() {
        let input = FrameInput::from_events(&[
            InputEvent::KeyDown(Key::Char('x')),
            InputEvent::KeyDown(Key::Space),
            InputEvent::KeyDown(Key::Space),
        ]);
        assert!(input.jump);
        assert!(!input.quit);

        let input = FrameInput::from_events(&[InputEvent::Quit]);
        assert!(input.quit);
        assert!(!input.jump);
    }

    #[test]
    fn test_scripted_input_drains_one_batch_per_poll() {
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(Key::Space)],
            vec![],
            vec![InputEvent::Quit],
        ]);
        assert_eq!(input.poll().unwrap().len(), 1);
        assert!(input.poll().unwrap().is_empty());
        assert_eq!(input.poll().unwrap(), vec![InputEvent::Quit]);
        assert!(input.poll().unwrap().is_empty());
        assert_eq!(input.remaining(), 0);
    }
}
