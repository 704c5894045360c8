#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use gridrun::{
    init_logging, run_session, unseeded_rng, GameConfig, GameEngine, LineInput, TerminalDisplay,
};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();

    let config = GameConfig::default();
    let mut rng = unseeded_rng();
    let engine = GameEngine::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut input = LineInput::stdin();
    let mut display = TerminalDisplay::stdout();
    run_session(engine, &mut rng, &mut input, &mut display)?;
    Ok(())
}
