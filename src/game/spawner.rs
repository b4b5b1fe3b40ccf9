//! Interval-driven obstacle factory.

use super::obstacle::ObstaclePair;
use crate::core::config::GameConfig;
use rand::Rng;
use std::time::Duration;

/// Spawner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnerState {
    /// Counting down; `remaining` is what is left of the interval.
    Waiting { remaining: Duration },
    /// The interval has elapsed and a spawn is due this frame.
    Ready,
}

#[derive(Debug, Clone)]
pub struct Spawner {
    interval: Duration,
    state: SpawnerState,
    spawned: u64,
}

impl Spawner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: SpawnerState::Waiting {
                remaining: interval,
            },
            spawned: 0,
        }
    }

    pub fn state(&self) -> SpawnerState {
        self.state
    }

    /// Number of spawns signalled so far.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Count down by the previous frame's duration. Returns true when an
    /// obstacle should be spawned this frame.
    ///
    /// After a spawn the timer restarts from the full interval; any overshoot
    /// from the frame that emptied it is discarded, so the real spacing
    /// drifts slightly past the nominal interval.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if let SpawnerState::Waiting { remaining } = self.state {
            // A zero remainder means the interval has elapsed.
            self.state = match remaining.checked_sub(elapsed) {
                Some(left) if !left.is_zero() => SpawnerState::Waiting { remaining: left },
                _ => SpawnerState::Ready,
            };
        }

        match self.state {
            SpawnerState::Ready => {
                self.state = SpawnerState::Waiting {
                    remaining: self.interval,
                };
                self.spawned += 1;
                true
            }
            SpawnerState::Waiting { .. } => false,
        }
    }

    /// Tick the timer and build the obstacle that is due, if any. New
    /// obstacles enter at the right screen edge.
    pub fn spawn_due<R: Rng>(
        &mut self,
        elapsed: Duration,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<ObstaclePair> {
        if self.tick(elapsed) {
            Some(ObstaclePair::new(config.screen_width, config, rng))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_starts_waiting_for_full_interval() {
        let spawner = Spawner::new(Duration::from_millis(1500));
        assert_eq!(
            spawner.state(),
            SpawnerState::Waiting {
                remaining: Duration::from_millis(1500)
            }
        );
        assert_eq!(spawner.spawned(), 0);
    }

    #[test]
    fn test_first_spawn_after_interval() {
        let mut spawner = Spawner::new(Duration::from_millis(1500));
        // 93 * 16 = 1488ms: not yet.
        for _ in 0..93 {
            assert!(!spawner.tick(FRAME));
        }
        // 94 * 16 = 1504ms.
        assert!(spawner.tick(FRAME));
        assert_eq!(spawner.spawned(), 1);
    }

    #[test]
    fn test_reset_to_full_interval_drops_overshoot() {
        let mut spawner = Spawner::new(Duration::from_millis(1500));
        let mut spawn_frames = Vec::new();
        for frame in 1..=400u32 {
            if spawner.tick(FRAME) {
                spawn_frames.push(frame);
            }
        }
        // ceil(1500 / 16) = 94 frames between spawns, never 93.
        assert_eq!(spawn_frames, vec![94, 188, 282, 376]);
    }

    #[test]
    fn test_exact_interval_fires() {
        let mut spawner = Spawner::new(Duration::from_millis(100));
        assert!(!spawner.tick(Duration::from_millis(60)));
        assert!(spawner.tick(Duration::from_millis(40)));
    }

    #[test]
    fn test_zero_elapsed_never_fires() {
        let mut spawner = Spawner::new(Duration::from_millis(100));
        for _ in 0..1000 {
            assert!(!spawner.tick(Duration::ZERO));
        }
    }

    #[test]
    fn test_spawn_due_builds_at_right_edge() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut spawner = Spawner::new(config.spawn_interval());

        assert!(spawner
            .spawn_due(Duration::from_millis(1000), &config, &mut rng)
            .is_none());
        let obstacle = spawner
            .spawn_due(Duration::from_millis(500), &config, &mut rng)
            .expect("interval elapsed");
        assert_eq!(obstacle.x, config.screen_width);
        assert!(!obstacle.scored);
    }

    #[test]
    fn test_long_frame_spawns_once() {
        let mut spawner = Spawner::new(Duration::from_millis(100));
        assert!(spawner.tick(Duration::from_secs(5)));
        assert_eq!(spawner.spawned(), 1);
        assert!(!spawner.tick(FRAME));
    }
}
