use std::{
    ffi::OsString,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use chrono::Local;
use dirlist_infra::{LstatProbe, StdDirectorySource};

use crate::{
    application::{ListDirectoryCommand, ListingSummary},
    domain::{config::ListingConfig, options::FailurePolicy, palette::ColorPalette},
    error::{DirListError, MetadataQueryError, Result, UsageError},
    presentation::cli::{self, Invocation},
};

/// Environment variable holding the `env_logger` filter (`off` when unset).
pub const LOG_ENV: &str = "DIRLIST_LOG";

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
/// What the legacy `exit(-1)` turned into.
pub const EXIT_USAGE: u8 = 255;

const DEFAULT_PROGRAM: &str = "dirlist";

pub fn run() -> ExitCode {
    init_logging();
    let status = run_from(std::env::args_os(), &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}

/// Runs one invocation against explicit streams and returns the exit status.
///
/// Usage problems go to `out` followed by the usage block; listing failures
/// go to `err` unless the legacy failure policy silences them.
pub fn run_from<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    let config = match cli::parse_from(args) {
        Ok(Invocation::List(config)) => config,
        Ok(Invocation::Version) => {
            if let Err(e) = writeln!(out, "{DEFAULT_PROGRAM} {}", crate::VERSION) {
                log::debug!("version text lost: {e}");
            }
            return EXIT_SUCCESS;
        }
        Err(usage) => {
            report_usage(&usage, &program, out);
            return EXIT_USAGE;
        }
    };
    log::debug!("listing {} with {:?}", config.path.display(), config);

    match list(&config, out) {
        Ok(summary) => {
            log::debug!("listed {} entries", summary.entries);
            EXIT_SUCCESS
        }
        Err(failure) if silenced(&failure, &config) => {
            log::debug!("suppressed by legacy exit status: {failure}");
            EXIT_SUCCESS
        }
        Err(failure) => {
            if let Err(e) = writeln!(err, "{program}: {failure}") {
                log::debug!("error report lost: {e}");
            }
            EXIT_FAILURE
        }
    }
}

fn list<W: Write>(config: &ListingConfig, out: &mut W) -> Result<ListingSummary> {
    let source = StdDirectorySource::new();
    let probe = LstatProbe::new();
    let palette = ColorPalette::ANSI;
    let now = Local::now();

    ListDirectoryCommand::new(&source, &probe, &palette).execute(config, &now, out)
}

/// Legacy builds exited 0 without a word when the directory could not be
/// opened or an entry could not be stat'd.
fn silenced(failure: &DirListError, config: &ListingConfig) -> bool {
    config.compat.failure_policy == FailurePolicy::SilentSuccess
        && matches!(
            failure.root(),
            DirListError::Open { .. } | DirListError::MetadataQuery(MetadataQueryError::Stat { .. })
        )
}

fn report_usage<W: Write>(usage: &UsageError, program: &str, out: &mut W) {
    if let Err(e) = write_usage_report(usage, program, out) {
        log::debug!("usage text lost: {e}");
    }
}

fn write_usage_report<W: Write>(
    usage: &UsageError,
    program: &str,
    out: &mut W,
) -> io::Result<()> {
    if !matches!(usage, UsageError::HelpRequested) {
        writeln!(out, "{usage}")?;
    }
    cli::write_usage(out, program)?;
    out.flush()
}

fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "off");
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}
