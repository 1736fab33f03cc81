#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, random_target, GameEngine, GameError, Side};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Play one seeded match with the human seat on autopilot.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 0, help = "Pause before each computer shot, in milliseconds")]
    think_ms: u64,
    #[arg(long, default_value_t = 200, help = "Abort the match after this many rounds")]
    max_turns: usize,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("using seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = GameEngine::new("Autopilot");
    game.place_human_ships_randomly(&mut rng)?;
    game.start(&mut rng)?;

    while game.winner().is_none() {
        if game.turns() >= cli.max_turns {
            anyhow::bail!("match exceeded {} rounds", cli.max_turns);
        }
        match game.turn() {
            Some(Side::Human) => {
                let coord = random_target(game.rules(), game.human().attacked(), &mut rng)
                    .ok_or(GameError::NoLegalMoves)?;
                let outcome = game.human_attack(coord)?;
                log::info!("{}", outcome.message);
            }
            Some(Side::Computer) => {
                if cli.think_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(cli.think_ms)).await;
                }
                let outcome = game.computer_attack(&mut rng)?;
                log::info!("{}", outcome.message);
            }
            None => break,
        }
    }

    let result = json!({
        "seed": seed,
        "winner": game.winner(),
        "turns": game.turns(),
        "human": {
            "shots": game.human().attacked().len(),
            "ships_remaining": game.human().board().ships_remaining(),
        },
        "computer": {
            "shots": game.computer().attacked().len(),
            "ships_remaining": game.computer().board().ships_remaining(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
