//! Collision and scoring evaluation, run once per frame.

use super::obstacle::ObstaclePair;
use super::session::{EndCause, FrameEvent, GameSession, GamePhase, PassKind};
use crate::core::config::ScoringMode;

/// Evaluate the active obstacles against the player.
///
/// For every obstacle, in order: an obstacle that has left the screen is
/// retired and scores a pass by exit; an obstacle whose solid segments
/// overlap the player ends the run; an obstacle whose leading edge is on
/// the player's center line scores a pass by alignment. Finally the
/// player's own bounds check can end the run.
///
/// Each obstacle is judged on its own, so the outcome does not depend on
/// iteration order. Points are only awarded if the run was still going when
/// the frame's evaluation started.
pub fn evaluate(session: &mut GameSession, events: &mut Vec<FrameEvent>) {
    let player_rect = session.player.rect();
    let gate_line = session.player.center_x();
    let scoring_open = session.phase == GamePhase::Running;
    let mode = session.config.scoring;

    let mut collided = false;
    let mut retired = 0;

    for obstacle in session.obstacles.iter_mut() {
        if obstacle.is_off_screen() {
            retired += 1;
            if scoring_open {
                award(obstacle, mode, PassKind::Exit, &mut session.score, events);
            }
        }

        if obstacle.collides_with(&player_rect) {
            collided = true;
        }

        if scoring_open && obstacle.occupies_gate_line(gate_line) {
            award(obstacle, mode, PassKind::Alignment, &mut session.score, events);
        }
    }

    if retired > 0 {
        session.obstacles.retain(|o| !o.is_off_screen());
        events.extend(std::iter::repeat(FrameEvent::Retired).take(retired));
    }

    if collided && session.end(EndCause::Collision) {
        events.push(FrameEvent::Ended(EndCause::Collision));
    }

    if session.player.bounds_check(session.config.screen_height)
        && session.end(EndCause::OutOfBounds)
    {
        events.push(FrameEvent::Ended(EndCause::OutOfBounds));
    }
}

fn award(
    obstacle: &mut ObstaclePair,
    mode: ScoringMode,
    kind: PassKind,
    score: &mut u32,
    events: &mut Vec<FrameEvent>,
) {
    if mode == ScoringMode::PerGate && obstacle.scored {
        return;
    }
    obstacle.scored = true;
    *score = score.saturating_add(1);
    events.push(FrameEvent::Scored {
        kind,
        score: *score,
    });
}
