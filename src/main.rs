//! go-rules: debugging front end for the Go rules engine.
//!
//! ## Usage
//!
//! - `go-rules demo` - Play a seeded random game and print the result
//! - `go-rules show D4 E5 pass 2,2` - Replay moves and print the board

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use go_rules::board::Color;
use go_rules::config::{GameConfig, load_config};
use go_rules::playout::{max_game_len, play_random_game};
use go_rules::position::{parse_move, play, vertex_string};
use go_rules::score::{compute_score, is_terminal};

/// go-rules: a Go rules engine
#[derive(Parser)]
#[command(name = "go-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GameArgs {
    /// TOML file with `board_size` and `komi`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Board size, overrides the config file
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Komi, overrides the config file
    #[arg(long, global = true)]
    komi: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a random game and print the final board
    Demo {
        /// RNG seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Move cap (defaults to three times the board area)
        #[arg(long)]
        max_moves: Option<usize>,
    },
    /// Replay moves given as vertices (D4, pass) or `row,col`, Black first
    Show {
        moves: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli.game)?;
    info!(size = config.board_size, komi = config.komi, "game settings");

    match cli.command {
        Some(Commands::Show { moves }) => run_show(&config, &moves),
        Some(Commands::Demo { seed, max_moves }) => {
            run_demo(&config, seed, max_moves);
            Ok(())
        }
        None => {
            run_demo(&config, 1, None);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: &GameArgs) -> Result<GameConfig> {
    load_config(args.config.as_deref())
        .context("loading game config")?
        .with_overrides(args.size, args.komi)
        .context("invalid game settings")
}

fn run_demo(config: &GameConfig, seed: u64, max_moves: Option<usize>) {
    let cap = max_moves.unwrap_or_else(|| max_game_len(config.board_size));
    let record = play_random_game(config, seed, cap);
    let size = config.board_size;

    println!("{}", record.state.board);
    let played: Vec<String> = record
        .moves
        .iter()
        .map(|&(_, mv)| vertex_string(mv, size))
        .collect();
    println!("Moves ({}): {}", played.len(), played.join(" "));
    println!(
        "Captures: black {} white {}",
        record.state.captures.of(Color::Black),
        record.state.captures.of(Color::White)
    );
    println!("Score: {:+.1}", record.score);
    match record.result.winner {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("Stopped after {} moves without a result", record.moves.len()),
    }
}

fn run_show(config: &GameConfig, moves: &[String]) -> Result<()> {
    let size = config.board_size;
    let mut state = config.new_game();
    let mut color = Color::Black;

    for (i, vertex) in moves.iter().enumerate() {
        let mv = parse_move(vertex, size).with_context(|| format!("move {}", i + 1))?;
        let report = play(&mut state, mv, color)
            .with_context(|| format!("move {} ({color} {vertex})", i + 1))?;
        if report.stones > 0 {
            println!("{color} {vertex} captures {}", report.stones);
        }
        let verdict = is_terminal(&state, mv);
        if verdict.over {
            if i + 1 < moves.len() {
                bail!("game ended after move {}, {} moves left over", i + 1, moves.len() - i - 1);
            }
            break;
        }
        color = color.opponent();
    }

    println!("{}", state.board);
    println!("Score: {:+.1}", compute_score(&state));
    Ok(())
}
