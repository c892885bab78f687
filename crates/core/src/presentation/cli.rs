mod args;
mod usage;

use std::ffi::OsString;

use clap::{
    Parser,
    error::{ContextKind, ErrorKind},
};
use dirlist_shared_kernel::UsageError;

pub use args::Args;
pub use usage::write_usage;

use crate::domain::{
    config::ListingConfig,
    options::{CompatOptions, FailurePolicy, MetadataLookup},
};

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    List(ListingConfig),
    Version,
}

/// Parse CLI arguments (including `argv[0]`) into an [`Invocation`].
pub fn parse_from<I, T>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) if args.version && !args.help => Ok(Invocation::Version),
        Ok(args) => build_config(args).map(Invocation::List),
        Err(err) => Err(usage_error(&err)),
    }
}

/// Convert parsed CLI arguments into a listing configuration.
///
/// Help wins over everything else; a missing path is rejected here, before
/// anything touches the filesystem.
pub fn build_config(args: Args) -> Result<ListingConfig, UsageError> {
    if args.help {
        return Err(UsageError::HelpRequested);
    }
    let path = args.path.ok_or(UsageError::MissingArgument)?;

    let compat = CompatOptions {
        metadata_lookup: if args.legacy_cwd_lookup {
            MetadataLookup::WorkingDirectory
        } else {
            MetadataLookup::ListedDirectory
        },
        failure_policy: if args.legacy_exit_status {
            FailurePolicy::SilentSuccess
        } else {
            FailurePolicy::Report
        },
    };

    Ok(ListingConfig::new(path).with_long_format(args.long).with_compat(compat))
}

fn usage_error(err: &clap::Error) -> UsageError {
    let offender = err.get(ContextKind::InvalidArg).map(ToString::to_string);

    match (err.kind(), offender) {
        (ErrorKind::UnknownArgument, Some(arg)) if arg.starts_with('-') => {
            UsageError::UnknownOption { option: arg }
        }
        (ErrorKind::UnknownArgument, Some(arg)) => UsageError::UnexpectedArgument { argument: arg },
        _ => UsageError::Invalid { message: first_line(err) },
    }
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}
