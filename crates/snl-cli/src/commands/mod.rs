pub mod play;
pub mod simulate;

use snl_engine::{GameConfig, GameMode};

/// Parse the mode selector and build a validated config.
fn build_config(
    mode: &str,
    seed: Option<u64>,
    max_turns: Option<u64>,
) -> Result<GameConfig, String> {
    let mode: GameMode = mode.parse().map_err(|e: snl_engine::GameError| e.to_string())?;
    let mut config = GameConfig::default().with_mode(mode);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config = match max_turns {
        Some(limit) => config.with_max_turns(limit),
        None => config.unbounded(),
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
