mod app;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod theme;
mod ui;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    ExecutableCommand,
};
use lexopt::{Arg, Parser, ValueExt};
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal

Options:
  -c, --config <PATH>   Read configuration from the given file
      --log-file <PATH> Write a debug log to the given file
      --seed <N>        Seed the random placement of food & obstacles
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    seed: Option<u64>,
}

impl CliCommand {
    fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}

fn main() -> ExitCode {
    match CliCommand::from_parser(Parser::from_env()) {
        Ok(CliCommand::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(CliCommand::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(path) = args.log_file {
        let logfile = fs_err::File::create(path).context("failed to create log file")?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), logfile)
            .context("failed to initialize logging")?;
    }
    let config = load_config(args.config)?;
    info!(
        "Starting {}x{} game (cell size {}, snake length {}, {} obstacles, tick {:?}, theme {})",
        config.settings.grid.columns(),
        config.settings.grid.rows(),
        config.settings.grid.cell_size(),
        config.settings.initial_length,
        config.settings.obstacles,
        config.tick_period,
        config.theme,
    );
    let rng = match args.seed {
        Some(seed) => {
            debug!("Using RNG seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let terminal = ratatui::init();
    let r = io::stdout()
        .execute(EnableFocusChange)
        .and_then(|_| App::new(config, rng).run(terminal));
    disable_focus_reporting(&mut io::stdout());
    ratatui::restore();
    match r {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("terminal I/O failed"),
    }
}

/// Turn off terminal focus reporting.  The terminal is being torn down at
/// this point, so a failure is only logged.
fn disable_focus_reporting<W: io::Write>(out: &mut W) {
    if let Err(e) = out.execute(DisableFocusChange) {
        warn!("Failed to disable focus reporting: {e}");
    }
}

/// Load the configuration from `path` or, if that is not given, from the
/// default configuration file, if any
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let r = match path {
        Some(p) => {
            debug!("Reading configuration from {}", p.display());
            Config::load(&p, false)
        }
        None => match Config::default_path() {
            Ok(p) => {
                debug!("Reading configuration from {}, if it exists", p.display());
                Config::load(&p, true)
            }
            Err(e) => {
                debug!("Using default configuration: {e}");
                Ok(Config::default())
            }
        },
    };
    r.context("failed to load configuration")
}
