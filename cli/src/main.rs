// SPDX-License-Identifier: MIT OR Apache-2.0

//! weiqi CLI - play Go in the terminal
//!
//! Black is typed at the prompt. White is played by a random bot unless
//! `--human-white` is given, in which case both sides share the prompt.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use weiqi_cli::bot::RandomSuggester;
use weiqi_cli::config::{load_settings, Settings};
use weiqi_cli::input::{parse_command, Command};
use weiqi_cli::render::{coord_label, render_board, render_outcome, render_status};
use weiqi_core::{
    play_suggested, BoardSize, Color, Difficulty, GameError, GameState, PassReason, SuggestedPlay,
};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "weiqi-cli",
    about = "Play Go in the terminal against a random bot",
    version
)]
struct Args {
    /// Board size (9, 13, or 19)
    #[clap(short, long)]
    size: Option<u8>,

    /// Bot strength
    #[clap(short, long, value_enum)]
    difficulty: Option<Level>,

    /// Seed for the bot's random choices
    #[clap(long)]
    seed: Option<u64>,

    /// Path to a TOML settings file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Let a second human play White
    #[clap(long)]
    human_white: bool,

    /// Print the final game state as JSON
    #[clap(long)]
    json: bool,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

/// Bot strength on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Level {
    Beginner,
    Skilled,
    Pro,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Difficulty::Beginner,
            Level::Skilled => Difficulty::Skilled,
            Level::Pro => Difficulty::Pro,
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Settings file first, then command-line flags on top
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = load_settings(args.config.as_deref())?;

    if let Some(size) = args.size {
        settings.game.board_size = BoardSize::try_from(size)?;
    }
    if let Some(level) = args.difficulty {
        settings.game.difficulty = level.into();
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.human_white |= args.human_white;

    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let settings = resolve_settings(&args)?;
    tracing::info!(?settings, "Starting game");

    let mut game = settings.game.new_game();
    let mut bot = RandomSuggester::new(settings.seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_game_over() {
        println!("\n{}", render_board(game.board(), None));
        println!("{}", render_status(&game));

        if game.current_player() == Color::White && !settings.human_white {
            bot_turn(&mut game, &mut bot, &settings)?;
            continue;
        }

        print!(
            "{} to move. Enter a move (e.g., 'D4'), 'pass', or 'quit': ",
            game.current_player()
        );
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, game.board().size()) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Play(coord) => match game.play(coord) {
                Ok(0) => {}
                Ok(captured) => println!("Captured {captured} stone(s)."),
                Err(GameError::Rejected(_)) => {
                    if let Some(rejection) = game.take_rejection() {
                        println!("{} at {}.", rejection.reason, coord_label(rejection.coord));
                    }
                }
                Err(e) => return Err(e.into()),
            },
            Command::Pass => {
                let player = game.current_player();
                game.pass()?;
                println!("{player} passes.");
            }
            Command::Quit => {
                println!("Leaving the game unfinished.");
                break;
            }
        }
    }

    if let Some(summary) = render_outcome(&game) {
        println!("\n{summary}");
    }

    if args.json {
        let json =
            serde_json::to_string_pretty(&game.view()).context("Failed to serialize game")?;
        println!("{json}");
    }

    Ok(())
}

fn bot_turn(game: &mut GameState, bot: &mut RandomSuggester, settings: &Settings) -> Result<()> {
    let player = game.current_player();
    let turn = play_suggested(
        game,
        bot,
        settings.game.difficulty,
        settings.game.max_suggestion_attempts,
    )?;

    match turn {
        SuggestedPlay::Placed {
            coord, captured, ..
        } => {
            println!("{player} plays {}.", coord_label(coord));
            if captured > 0 {
                println!("Captured {captured} stone(s).");
            }
        }
        SuggestedPlay::Passed { reason, .. } => match reason {
            PassReason::Suggested => println!("{player} passes."),
            PassReason::AttemptsExhausted { attempts, .. } => {
                println!("{player} found no legal move in {attempts} tries and passes.")
            }
            PassReason::SuggesterFailed(e) => println!("{player} passes ({e})."),
        },
    }
    Ok(())
}
