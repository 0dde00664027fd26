use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod error;
mod exits;
mod logging;
mod pass;
mod rand;
mod session;
mod settings;
mod terminal;
mod tui;

use clipboard::SystemClipboard;
use error::Error;
use rand::Rand;
use session::Session;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Args(_)) => {
            cli::prompts::error(&e.to_string());
            cli::prompts::error("Run `genpass --help` for usage.");
            ExitCode::from(2)
        }
        Err(e) => {
            cli::prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Error> {
    let flags = cli::parse(args)?;

    if flags.help {
        tui::print_help();
        return Ok(());
    }
    if flags.version {
        println!("genpass {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let one_shot = flags.is_one_shot();
    let sink = logging::sink_for(&flags, env::var_os(logging::LOG_ENV).is_some());
    logging::init(sink)?;

    let settings = cli::settings_from(&flags);
    tracing::debug!(?settings, one_shot, "starting");

    if one_shot {
        cli::run(&flags, settings);
        return Ok(());
    }

    let session = Session::new(settings, Rand::new(), SystemClipboard::new());
    tui::run(session)
}
