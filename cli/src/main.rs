use anyhow::{Context, Result};
use clap::Parser;
use proximine_core::{FieldConfig, FieldParams, GameState, MineField, Sweeper};
use serde::Serialize;
use web_time::{Instant, SystemTime, UNIX_EPOCH};

/// Plays batches of proximity mine fields with the automated sweeper and reports how often it wins.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Field width
    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    width: i64,

    /// Field height
    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    height: i64,

    /// Number of hidden mines
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    mines: i64,

    /// Largest distance reported by revealed cells
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    radius: i64,

    /// Cells opened before play begins
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    opened: i64,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    games: u64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every final board
    #[arg(long)]
    show: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    seed: u64,
    games: u64,
    won: u64,
    lost: u64,
    safe_moves: usize,
    guesses: usize,
    elapsed_ms: u128,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = FieldConfig::try_from(FieldParams {
        horizontal_field_size: args.width,
        vertical_field_size: args.height,
        mines: args.mines,
        discoverable_radius: args.radius,
        opened_cells: args.opened,
    })
    .context("Invalid field parameters")?;

    let seed = match args.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };
    log::debug!("seed: {seed}");

    let summary = play(config, seed, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let win_rate = 100.0 * summary.won as f64 / summary.games.max(1) as f64;
        println!(
            "{} games, {} won, {} lost ({win_rate:.1}% win rate)",
            summary.games, summary.won, summary.lost
        );
        println!(
            "{} safe moves, {} guesses, {} ms, seed {}",
            summary.safe_moves, summary.guesses, summary.elapsed_ms, summary.seed
        );
    }
    Ok(())
}

fn play(config: FieldConfig, seed: u64, args: &Args) -> Result<Summary> {
    let mut summary = Summary {
        seed,
        games: args.games,
        ..Default::default()
    };
    let start = Instant::now();

    for game in 0..args.games {
        let game_seed = seed.wrapping_add(game);
        let mut field = MineField::random(config, game_seed);
        let mut sweeper = Sweeper::new(&mut field, game_seed);
        let state = sweeper
            .sweep()
            .with_context(|| format!("Sweep failed for game {game}"))?;
        summary.safe_moves += sweeper.safe_moves();
        summary.guesses += sweeper.guesses();

        match state {
            GameState::Won => summary.won += 1,
            GameState::Lost => summary.lost += 1,
            GameState::InProgress => log::warn!("Game {game} did not finish"),
        }
        if args.show {
            println!("game {game}: {state:?}\n{field}");
        }
    }

    summary.elapsed_ms = start.elapsed().as_millis();
    log::info!("Played {} games in {} ms", summary.games, summary.elapsed_ms);
    Ok(summary)
}

fn clock_seed() -> Result<u64> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the unix epoch")?;
    Ok(since_epoch.as_nanos() as u64)
}
