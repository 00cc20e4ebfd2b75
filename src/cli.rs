use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    Run(Arguments),
    Help,
    Version,
}

/// Command-line settings for a game run.  Anything given here overrides the
/// configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) tick_period: Option<Duration>,
}

impl Mode {
    pub(crate) fn from_env() -> Result<Mode, UsageError> {
        Mode::from_parser(Parser::from_env())
    }

    #[cfg(test)]
    fn from_args<I>(args: I) -> Result<Mode, UsageError>
    where
        I: IntoIterator,
        I::Item: Into<std::ffi::OsString>,
    {
        Mode::from_parser(Parser::from_args(args))
    }

    fn from_parser(mut parser: Parser) -> Result<Mode, UsageError> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("tick-ms") => {
                    let ms = parser.value()?.parse::<u64>()?;
                    if ms == 0 {
                        return Err(UsageError::ZeroTick);
                    }
                    args.tick_period = Some(Duration::from_millis(ms));
                }
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(Mode::Run(args))
    }
}

pub(crate) static USAGE: &str = "\
Usage: wrapsnake [options]

Play Snake in the terminal.  The snake wraps around the edges of the board.

Options:
  -c, --config <FILE>     Read configuration from <FILE>
      --log-file <FILE>   Write log messages to <FILE>
      --tick-ms <N>       Move the snake every <N> milliseconds
  -h, --help              Show this help and exit
  -V, --version           Show the program version and exit
";

#[derive(Debug, Error)]
pub(crate) enum UsageError {
    #[error(transparent)]
    Lexopt(#[from] lexopt::Error),
    #[error("--tick-ms must be at least 1")]
    ZeroTick,
}
