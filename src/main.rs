use crate::args::MinesweeperArgs;
use crate::game::{Game, Outcome};
use crate::minefield::Minefield;
use crate::parser::MoveParser;
use clap::Parser;
use color_eyre::Result;
use crossterm::tty::IsTty;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

mod action;
mod args;
mod cell;
mod cell_status;
mod game;
mod minefield;
mod parser;
mod util;
mod win_state;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // stdout belongs to the game, logs go to stderr
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let settings = MinesweeperArgs::parse().settings();
    debug!(?settings, "starting");
    if settings.show_seed {
        eprintln!("seed is {}", settings.seed);
    }

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut field = Minefield::new(settings.width, settings.height);
    field.generate(settings.mines, &mut rng);

    let stdout = io::stdout();
    let mut game = Game::new(field)
        .with_cursor(settings.cursor)
        .with_styled_messages(stdout.is_tty());
    let mut parser = MoveParser::new(io::stdin().lock()).with_cursor_commands(settings.cursor);
    let outcome = game.run(&mut parser, &mut stdout.lock(), &mut io::stderr().lock())?;

    Ok(match outcome {
        Outcome::Won | Outcome::Lost => ExitCode::SUCCESS,
        Outcome::InputEnded => ExitCode::FAILURE,
    })
}
