mod app;
mod cli;
mod command;
mod config;
mod consts;
mod events;
mod game;
mod ticker;
mod util;
use crate::app::App;
use crate::cli::{Arguments, Mode};
use crate::config::Config;
use crate::events::CrosstermEvents;
use crate::game::Game;
use anyhow::Context;
use log::{error, info};
use ratatui::layout::Size;
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::process::ExitCode;
use thiserror::Error;

fn main() -> ExitCode {
    let args = match Mode::from_env() {
        Ok(Mode::Run(args)) => args,
        Ok(Mode::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            eprint!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    let config = match setup(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wrapsnake: {e:?}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = check_terminal_size() {
        error!("{e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    let game = Game::new(config.tick_period, rand::rng());
    let mut terminal = ratatui::init();
    let r = App::new(game).run(&mut terminal, &mut CrosstermEvents);
    ratatui::restore();
    if let Ok(score) = r {
        info!("Exiting with final score {score}");
        println!("Thanks for playing! Final Score: {score}");
    }
    io_exit(r.map(|_| ()))
}

/// Load the configuration, apply command-line overrides, and start logging
fn setup(args: &Arguments) -> anyhow::Result<Config> {
    let mut config = match args.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let path = Config::default_path()?;
            Config::load(&path, true)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
    };
    if let Some(period) = args.tick_period {
        config.tick_period = period;
    }
    if let Some(ref path) = args.log_file {
        config.logging.file = Some(path.clone());
    }
    if let Some(ref path) = config.logging.file {
        if config.logging.level != LevelFilter::Off {
            let file = fs_err::File::create(path).context("failed to open log file")?;
            WriteLogger::init(
                config.logging.level,
                simplelog::Config::default(),
                file.into_parts().0,
            )
            .context("failed to initialize logger")?;
        }
    }
    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    Ok(config)
}

fn check_terminal_size() -> Result<(), StartupError> {
    let (width, height) = crossterm::terminal::size().map_err(StartupError::TerminalSize)?;
    if util::fits_display(Size { width, height }) {
        Ok(())
    } else {
        Err(StartupError::TooSmall {
            width: consts::DISPLAY_SIZE.width,
            height: consts::DISPLAY_SIZE.height,
        })
    }
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to get terminal size")]
    TerminalSize(#[source] io::Error),
    #[error("Terminal too small! Need at least {width}x{height}")]
    TooSmall { width: u16, height: u16 },
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
