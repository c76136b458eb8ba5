//! TETRS - headless driver
//!
//! Plays one seeded game with random inputs until it tops out or hits the
//! tick limit, then prints a summary. Useful for soak-testing the engine and
//! for reproducing a game from its seed.

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tetrs_engine::{Action, Game, Settings, Step};
use tracing_subscriber::EnvFilter;

/// Inputs the random policy chooses from; `None` lets the tick pass untouched
const POLICY_ACTIONS: [Option<Action>; 5] = [
    Some(Action::MoveLeft),
    Some(Action::MoveRight),
    Some(Action::SoftDrop),
    Some(Action::Rotate),
    None,
];

#[derive(Parser, Debug)]
#[command(name = "tetrs", version, about = "Play a headless game of TETRS")]
struct Args {
    /// Board rows (defaults to the settings file)
    #[arg(long, value_name = "ROWS")]
    rows: Option<i32>,

    /// Board columns (defaults to the settings file)
    #[arg(long, value_name = "COLS")]
    cols: Option<i32>,

    /// Seed for the piece sequence and the input policy
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value_t = 100_000, value_name = "N")]
    max_ticks: u64,

    /// Random inputs issued before each tick
    #[arg(long, default_value_t = 1, value_name = "N")]
    inputs_per_tick: u32,

    /// Print the final board as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'g', long)]
    debug: bool,
}

/// Totals collected while playing
#[derive(Debug, Default)]
struct Summary {
    ticks: u64,
    pieces_locked: u64,
    lines_cleared: u64,
}

/// Get the tetrs temp directory, creating it if needed
fn tetrs_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("tetrs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load();

    // Generate session ID for this run
    let session_id: u32 = rand::random();
    let tetrs_dir = tetrs_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    let file_appender = tracing_appender::rolling::never(&tetrs_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let mut filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.filter))
        .context("invalid log filter")?;
    if args.debug {
        filter = filter.add_directive("tetrs_engine=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    let rows = args.rows.unwrap_or(settings.board.rows);
    let cols = args.cols.unwrap_or(settings.board.cols);
    let seed = args.seed.or(settings.game.seed).unwrap_or_else(rand::random);

    tracing::info!(
        "TETRS starting up, session={:08x}, seed={}, board={}x{}, log={}",
        session_id,
        seed,
        rows,
        cols,
        tetrs_dir.join(&log_file).display()
    );

    let mut game = Game::with_seed(rows, cols, seed).context("could not start game")?;
    let summary = play(&mut game, &args, seed);

    tracing::info!(
        "Finished after {} ticks: score={}, lines={}, over={}",
        summary.ticks,
        game.score(),
        summary.lines_cleared,
        game.is_over()
    );

    println!("Seed:          {}", seed);
    println!("Ticks:         {}", summary.ticks);
    println!("Pieces locked: {}", summary.pieces_locked);
    println!("Lines cleared: {}", summary.lines_cleared);
    println!("Final score:   {}", game.score());
    println!(
        "Result:        {}",
        if game.is_over() { "topped out" } else { "tick limit reached" }
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }

    Ok(())
}

/// Run the random input policy against `game`
fn play(game: &mut Game, args: &Args, seed: u64) -> Summary {
    // Inputs get their own stream so the piece sequence only depends on the seed
    let mut policy = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut summary = Summary::default();

    while summary.ticks < args.max_ticks {
        for _ in 0..args.inputs_per_tick {
            if let Some(action) = POLICY_ACTIONS[policy.gen_range(0..POLICY_ACTIONS.len())] {
                game.apply(action);
            }
        }

        let step = game.step();
        summary.ticks += 1;
        match step {
            Step::Fell => {}
            Step::Locked { lines_cleared, .. } => {
                summary.pieces_locked += 1;
                summary.lines_cleared += lines_cleared as u64;
            }
            Step::ToppedOut | Step::Halted => break,
        }
    }

    summary
}
