//! The frame loop.
//!
//! Each frame: drain input, step the session, draw, then let the clock hold
//! the target frame rate. The loop only stops on a quit request; an ended
//! run keeps being drawn until the player quits.

use crate::audio::AudioSink;
use crate::core::clock::Clock;
use crate::game::{FrameEvent, GameSession, RunSummary};
use crate::input::{FrameInput, InputSource};
use crate::ui::renderer::render_session;
use crate::ui::surface::{RenderSurface, TextService};
use rand::Rng;
use std::io;

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Quit,
}

/// The external collaborators a running game talks to.
pub struct GameLoop<I, A, S, C> {
    pub input: I,
    pub audio: A,
    pub surface: S,
    pub clock: C,
}

impl<I, A, S, C> GameLoop<I, A, S, C>
where
    I: InputSource,
    A: AudioSink,
    S: RenderSurface + TextService,
    C: Clock,
{
    pub fn new(input: I, audio: A, surface: S, clock: C) -> Self {
        Self {
            input,
            audio,
            surface,
            clock,
        }
    }

    /// Run one frame. Returns `Quit` as soon as a quit request is seen, in
    /// which case nothing else happens this frame.
    pub fn run_frame<R: Rng>(
        &mut self,
        session: &mut GameSession,
        rng: &mut R,
    ) -> io::Result<FrameControl> {
        let events = self.input.poll()?;
        let input = FrameInput::from_events(&events);
        if input.quit {
            return Ok(FrameControl::Quit);
        }

        let elapsed = self.clock.last_frame();
        let frame_events = session.step(input, elapsed, rng, &mut self.audio);
        log_frame_events(session, &frame_events);

        render_session(session, &mut self.surface)?;
        self.clock.tick(session.config.target_fps);
        Ok(FrameControl::Continue)
    }

    /// Run frames until the player quits.
    pub fn run<R: Rng>(&mut self, session: &mut GameSession, rng: &mut R) -> io::Result<RunSummary> {
        log::info!("run started");
        while self.run_frame(session, rng)? == FrameControl::Continue {}

        let summary = session.summary();
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("run finished: {}", json),
            Err(e) => log::warn!("could not serialize run summary: {}", e),
        }
        Ok(summary)
    }
}

fn log_frame_events(session: &GameSession, events: &[FrameEvent]) {
    for event in events {
        match event {
            FrameEvent::Jumped => log::trace!("frame {}: jump", session.frame_count),
            FrameEvent::Spawned { gap_offset } => log::trace!(
                "frame {}: obstacle spawned, gap offset {}",
                session.frame_count,
                gap_offset
            ),
            FrameEvent::Retired => log::trace!("frame {}: obstacle retired", session.frame_count),
            FrameEvent::Scored { kind, score } => {
                log::debug!("scored by {:?}, score is now {}", kind, score)
            }
            FrameEvent::Ended(cause) => log::info!(
                "run ended by {:?} at frame {} with score {}",
                cause,
                session.frame_count,
                session.score
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, CueLog};
    use crate::core::clock::FixedClock;
    use crate::core::config::GameConfig;
    use crate::input::{InputEvent, Key, ScriptedInput};
    use crate::ui::scene::Scene;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn create_loop(frames: Vec<Vec<InputEvent>>) -> GameLoop<ScriptedInput, CueLog, Scene, FixedClock> {
        GameLoop::new(
            ScriptedInput::new(frames),
            CueLog::default(),
            Scene::new(),
            FixedClock::new(Duration::from_millis(16)),
        )
    }

    #[test]
    fn test_quit_stops_before_stepping() {
        let mut game = create_loop(vec![vec![InputEvent::Quit]]);
        let mut session = GameSession::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let control = game.run_frame(&mut session, &mut rng).unwrap();
        assert_eq!(control, FrameControl::Quit);
        assert_eq!(session.frame_count, 0);
        assert_eq!(game.surface.frames(), 0);
    }

    #[test]
    fn test_frame_steps_draws_and_ticks() {
        let mut game = create_loop(vec![vec![InputEvent::KeyDown(Key::Space)]]);
        let mut session = GameSession::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let control = game.run_frame(&mut session, &mut rng).unwrap();
        assert_eq!(control, FrameControl::Continue);
        assert_eq!(session.frame_count, 1);
        assert_eq!(game.surface.frames(), 1);
        assert_eq!(game.clock.ticks(), 1);
        assert_eq!(game.audio.played, vec![Cue::Jump]);
    }

    #[test]
    fn test_run_until_quit_even_after_end() {
        // 120 idle frames is enough to hit the ground, then quit.
        let mut frames = vec![vec![]; 120];
        frames.push(vec![InputEvent::Quit]);
        let mut game = create_loop(frames);
        let mut session = GameSession::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let summary = game.run(&mut session, &mut rng).unwrap();
        assert!(session.is_ended());
        assert_eq!(summary.frames, 120);
        assert_eq!(game.surface.frames(), 120);
        assert_eq!(game.surface.labels(), vec!["0", "Game Over"]);
    }
}
