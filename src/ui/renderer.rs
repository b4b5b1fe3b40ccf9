//! Per-frame drawing of a game session.

use super::surface::{RenderSurface, TextService};
use crate::core::constants::{GAME_OVER_TEXT, SCORE_TEXT_TOP};
use crate::core::geometry::{Point, Rect};
use crate::game::GameSession;
use std::io;

/// Draw the whole frame and present it. Called exactly once per frame in
/// every phase.
///
/// Order: background, obstacles, player, ground strip, score, and the
/// end-of-run message when the run is over.
pub fn render_session<S>(session: &GameSession, out: &mut S) -> io::Result<()>
where
    S: RenderSurface + TextService,
{
    let config = &session.config;
    let palette = &config.palette;

    out.clear(palette.background);

    for item in session.drawables() {
        item.draw(&mut *out, palette);
    }

    out.fill_rect(
        Rect::new(
            0.0,
            config.screen_height - config.ground_height,
            config.screen_width,
            config.ground_height,
        ),
        palette.ground,
    );

    let center_x = config.screen_width / 2.0;
    out.draw_text(
        &session.score.to_string(),
        Point::new(center_x, SCORE_TEXT_TOP),
        palette.font,
        config.font_size,
    );
    if session.is_ended() {
        out.draw_text(
            GAME_OVER_TEXT,
            Point::new(center_x, config.screen_height / 2.0),
            palette.font,
            config.font_size,
        );
    }

    out.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::{EndCause, ObstaclePair};
    use crate::ui::scene::Scene;
    use crate::ui::surface::DrawCommand;

    #[test]
    fn test_running_frame_layout() {
        let mut session = GameSession::new(GameConfig::default());
        session
            .obstacles
            .push(ObstaclePair::with_gap_offset(300.0, 100.0, &session.config));
        session.score = 4;

        let mut scene = Scene::new();
        render_session(&session, &mut scene).unwrap();
        let palette = session.config.palette;
        let frame = scene.last_frame();

        assert_eq!(frame[0], DrawCommand::Clear(palette.background));
        // Two obstacle segments, then the player, then the ground.
        assert_eq!(
            frame[1],
            DrawCommand::FillRect(Rect::new(300.0, 0.0, 100.0, 350.0), palette.obstacle)
        );
        assert_eq!(
            frame[2],
            DrawCommand::FillRect(Rect::new(300.0, 500.0, 100.0, 100.0), palette.obstacle)
        );
        assert_eq!(
            frame[3],
            DrawCommand::FillRect(session.player.rect(), palette.player)
        );
        assert_eq!(
            frame[4],
            DrawCommand::FillRect(Rect::new(0.0, 550.0, 400.0, 50.0), palette.ground)
        );
        assert_eq!(
            frame[5],
            DrawCommand::Text {
                text: "4".to_string(),
                anchor: Point::new(200.0, 10.0),
                color: palette.font,
                size: 40,
            }
        );
        assert_eq!(frame.len(), 6);
        assert_eq!(scene.labels(), vec!["4"]);
    }

    #[test]
    fn test_ended_frame_shows_game_over() {
        let mut session = GameSession::new(GameConfig::default());
        session.end(EndCause::Collision);

        let mut scene = Scene::new();
        render_session(&session, &mut scene).unwrap();
        assert_eq!(scene.labels(), vec!["0", "Game Over"]);
        assert!(matches!(
            scene.last_frame().last(),
            Some(DrawCommand::Text { anchor, .. }) if *anchor == Point::new(200.0, 300.0)
        ));
    }

    #[test]
    fn test_presents_once_per_call() {
        let session = GameSession::new(GameConfig::default());
        let mut scene = Scene::new();
        for _ in 0..3 {
            render_session(&session, &mut scene).unwrap();
        }
        assert_eq!(scene.frames(), 3);
    }
}
