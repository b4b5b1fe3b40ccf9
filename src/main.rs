use rand::rngs::StdRng;
use rand::SeedableRng;
use skyward::audio::TerminalBell;
use skyward::core::clock::FrameClock;
use skyward::input::TerminalInput;
use skyward::ui::{self, TerminalSurface};
use skyward::{logging, GameConfig, GameLoop, GameSession};
use std::io;

fn main() -> io::Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Warning: could not set up logging: {}", e);
    }

    let config = GameConfig::default();
    match serde_json::to_string(&config) {
        Ok(json) => log::debug!("config: {}", json),
        Err(e) => log::warn!("could not serialize config: {}", e),
    }

    let surface = TerminalSurface::new(config.screen_width, config.screen_height)?;
    let mut game = GameLoop::new(
        TerminalInput::new(),
        TerminalBell::stdout(),
        surface,
        FrameClock::new(),
    );

    let mut session = GameSession::new(config);
    let mut rng = StdRng::from_entropy();
    let result = game.run(&mut session, &mut rng);

    // Leave the alternate screen before printing anything.
    let restored = game.surface.restore();
    let summary = ui::finish(result, restored)?;
    println!("Final score: {}", summary.score);
    Ok(())
}
