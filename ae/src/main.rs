use std::{path::PathBuf, process::ExitCode};

use ae_frontend::settings::Settings;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Tracing error")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // NOTE: clap exits with a usage error before any editor state exists
    let args = cli().get_matches();

    if let Err(err) = init_tracing() {
        eprintln!("logging disabled: {}", err);
    }

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&args, &mut settings);

    match ae_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("ae: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    Command::new("ae")
        .about("ae - a minimal screen oriented editor for raw bytes")
        .args([Arg::new("path")
            .action(ArgAction::Set)
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("file to edit, created on first save when missing")])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    if let Some(path) = args.get_one::<PathBuf>("path") {
        settings.path = path.clone();
    }
}

fn init_tracing() -> Result<(), Error> {
    let logpath = get_logging_path()?;
    let logfile = tracing_appender::rolling::daily(logpath, "log");

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn get_logging_path() -> Result<PathBuf, Error> {
    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("ae").join("logs")),
        None => Err(Error::Initialization),
    }
}
