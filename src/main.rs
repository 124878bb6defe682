mod app;
mod calendar;
mod entry;
mod field;
mod help;
mod logging;
mod picker;
mod theme;
use crate::app::App;
use crate::calendar::{local_today, CalendarState};
use crate::entry::{format_date, resolve};
use crate::logging::{init_logging, LOG_ENV_VAR};
use crate::picker::DatePicker;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<String>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => date = Some(value.string()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, log_file } => {
                if let Some(path) = log_file {
                    init_logging(&path)?;
                }
                let today = local_today().context("failed to determine local date")?;
                let mut picker = DatePicker::new(CalendarState::new(today));
                if let Some(text) = date {
                    picker.select(resolve(&text, today).context("invalid initial date")?);
                }
                let selected = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    Ok(App::new(picker).run(terminal)?)
                })?;
                if let Some(date) = selected {
                    println!("{}", format_date(date));
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [OPTIONS] [DATE]");
                println!();
                println!("Pick a date in the terminal and print it as MM/DD/YYYY");
                println!();
                println!("DATE is selected at startup.  Missing parts are taken from the current");
                println!("month, and two-digit years are taken to be in the current millennium.");
                println!();
                println!("Options:");
                println!("  --log-file <PATH> Append diagnostic logs to PATH (filter with ${LOG_ENV_VAR})");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
