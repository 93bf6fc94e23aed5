//! Console runner (default binary).
//!
//! Loads the score configuration, then either shows a single transition from an
//! empty grid (enumerate, apply one action, score) or, with `--play`, plays a
//! random session until no placement is left.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;

use tromino_tetris::core::{evaluate_detailed, SimpleRng, State};
use tromino_tetris::engine::{load_score_config, Game, DEFAULT_CONFIG_PATH};
use tromino_tetris::term::{
    render_action_list, to_json, ActionReport, GameReport, GridView, RunReport, StepReport,
};
use tromino_tetris::types::{ScoreConfig, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_MOVES};

#[derive(Parser, Debug)]
#[command(name = "tromino-tetris", version, about = "Tromino placement puzzle runner")]
struct Args {
    /// Score configuration: five integers
    /// (one_line two_lines three_lines one_gap many_gaps).
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Grid width in columns.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: usize,

    /// Grid height in rows.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: usize,

    /// RNG seed for shape draws (and action picks with --play). Defaults to the clock.
    #[arg(long)]
    seed: Option<u32>,

    /// Index into the available action list to apply.
    #[arg(long, default_value_t = 0)]
    action: usize,

    /// Play uniformly random actions until the grid is stuck.
    #[arg(long)]
    play: bool,

    /// Move cap for --play.
    #[arg(long, default_value_t = MAX_MOVES)]
    max_moves: u32,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,

    /// Write run diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        bail!("grid dimensions must be non-zero, got {}x{}", args.width, args.height);
    }

    // Nothing is printed before the configuration is known to be good.
    let config = load_score_config(&args.config).context("loading score configuration")?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    if args.verbose {
        eprintln!("config: {} = {}", args.config.display(), config);
        eprintln!("grid: {}x{}, seed: {}", args.width, args.height, seed);
    }

    let mut rng = SimpleRng::new(seed);
    if args.play {
        run_game(&args, config, seed, &mut rng)
    } else {
        run_single(&args, config, &mut rng)
    }
}

fn run_single(args: &Args, config: ScoreConfig, rng: &mut SimpleRng) -> Result<()> {
    let view = GridView::default();
    let state = State::initial(args.width, args.height, rng);
    let actions = state.available_actions();

    if !actions.is_empty() && args.action >= actions.len() {
        bail!(
            "action index {} out of range ({} actions available)",
            args.action,
            actions.len()
        );
    }

    let shape = state.next_shape();
    let mut report = RunReport::new(&config, state.grid(), shape.name(), &actions);

    if !args.json {
        println!("Loaded config: {}\n", config);
        println!("Next Piece: {}", shape);
        print!("{}", view.render(state.grid()));
        print!("{}", render_action_list(&actions));
    }

    let Some(action) = actions.get(args.action) else {
        if args.json {
            println!("{}", to_json(&report)?);
        } else {
            println!("No placement available.");
        }
        return Ok(());
    };

    let next = state
        .apply_action(action, rng)
        .with_context(|| format!("applying action {}", action))?;
    let result = evaluate_detailed(next.grid(), &config);

    if args.json {
        report = report.with_result(action, next.next_shape().name(), next.grid(), result);
        println!("{}", to_json(&report)?);
    } else {
        println!("\nApplied {}", action);
        println!("{}", next);
        println!("Score: {}", result.total);
    }
    Ok(())
}

fn run_game(args: &Args, config: ScoreConfig, seed: u32, rng: &mut SimpleRng) -> Result<()> {
    let view = GridView::default();
    let mut game = Game::new(config, args.width, args.height, rng);
    let mut steps = Vec::new();

    if !args.json {
        println!("Loaded config: {}\n", config);
        println!("Initial State:\n{}", game.state());
    }

    let json = args.json;
    game.play_random_with(rng, args.max_moves, |before, after, outcome| {
        steps.push(StepReport {
            placed: outcome.placed.name().to_string(),
            action: ActionReport::from(&outcome.action),
            gain: outcome.gain(),
            score: outcome.score,
        });
        if !json {
            println!("Action number {}: {}", steps.len() - 1, outcome.action);
            print!("{}", view.render_transition(before, after));
            println!("Gain: {}, current score: {}\n", outcome.gain(), outcome.score);
        }
    })?;

    if json {
        let report = GameReport {
            config: config.to_array(),
            seed,
            moves: game.moves(),
            score: game.score(),
            steps,
            final_grid: view.lines(game.state().grid()),
        };
        println!("{}", to_json(&report)?);
    } else {
        println!(
            "Game Over! Global score: {} in {} actions",
            game.score(),
            game.moves()
        );
    }
    Ok(())
}
