//! Shared helpers for integration tests.

#![allow(dead_code)]

use strictly_bowling::Game;
use tracing_subscriber::EnvFilter;

/// Installs a test-captured subscriber.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`. Safe to call
/// from every test.
pub fn init_tracing() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Builds a game from per-frame rolls, frame 1 first.
pub fn game_from_frames(frames: &[&[u32]]) -> Game {
    let mut game = Game::new();
    for (i, rolls) in frames.iter().enumerate() {
        let position = i as u32 + 1;
        for &pins in *rolls {
            game.frame_at(position)
                .add_roll(pins)
                .expect("fixture rolls are legal");
        }
    }
    game
}

/// Proptest configuration shared by the property suites.
///
/// `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(256)
        .max(1);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..base
    }
}
