use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    build_random_grid, init_logging, AnsiScreen, GameConfig, HumanSelector, Match, NoClear, Player,
    RandomSelector, Screen, TargetSelector, DEFAULT_GRID_SIZE, DEFAULT_MARGIN,
};

const GREETING: &str = "\
##########################
#     Sea  Battle        #
##########################
Enter targets as column and row, e.g. `3 7`.";

#[derive(Parser)]
#[command(author, version, about = "Sink the computer's fleet before it sinks yours", long_about = None)]
struct Cli {
    /// Board width and height.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
    /// Cells kept clear around every vessel.
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the computer play the human side too.
    #[arg(long)]
    autoplay: bool,
    /// Do not clear the screen between turns.
    #[arg(long)]
    no_clear: bool,
}

fn make_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s.wrapping_add(offset))
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig {
        size: cli.size,
        margin: cli.margin,
        seed: cli.seed,
    };
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let mut rng = make_rng(config.seed, 0);
    let human_grid = build_random_grid(&mut rng, config.size, false, config.margin)?;
    let computer_grid = build_random_grid(&mut rng, config.size, true, config.margin)?;

    // before the human selector takes the stdin lock
    if !cli.autoplay {
        println!("{}", GREETING);
        print!("Press Enter to continue...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    let human: Box<dyn TargetSelector> = if cli.autoplay {
        Box::new(RandomSelector::new(make_rng(config.seed, 1)))
    } else {
        Box::new(HumanSelector::stdio())
    };
    let computer = Box::new(RandomSelector::new(make_rng(config.seed, 2)));
    let mut game = Match::from_players(
        Player::new("Human", human_grid, human),
        Player::new("AI", computer_grid, computer),
    );

    let mut screen: Box<dyn Screen> = if cli.no_clear || !io::stdout().is_terminal() {
        Box::new(NoClear)
    } else {
        Box::new(AnsiScreen::new(io::stdout()))
    };
    let winner = game.run(&mut screen, &mut io::stdout())?;
    log::info!("match finished: {} won in {} turns", winner, game.turns());
    Ok(())
}
