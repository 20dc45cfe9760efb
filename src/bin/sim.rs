use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{GameConfig, Match, NoClear, RandomSelector, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut board_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let mut game = Match::new(
        &config,
        Box::new(RandomSelector::new(SmallRng::seed_from_u64(seed1))),
        Box::new(RandomSelector::new(SmallRng::seed_from_u64(seed2))),
        &mut board_rng,
    )?;

    let winner = game.run(&mut NoClear, &mut std::io::sink())?;

    let side_summary = |side: Side| {
        let player = game.player(side);
        json!({
            "live_vessels": player.fleet().live_vessel_count(),
            "shots_taken": game.player(side.opponent()).fleet().fired_upon().len(),
            "last_target": player.last_target(),
        })
    };
    let result = json!({
        "human": side_summary(Side::Human),
        "computer": side_summary(Side::Computer),
        "turns": game.turns(),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
