// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is terminal for the invocation; nothing is recovered per entry.
#[derive(Debug, Error)]
pub enum DirListError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DirListError>,
    },

    #[error("cannot open directory '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read directory '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata query failed: {0}")]
    MetadataQuery(#[from] MetadataQueryError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DirListError>;

impl DirListError {
    /// Walks through `Context` wrappers to the error that actually happened.
    pub fn root(&self) -> &DirListError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.root(), Self::Open { .. })
    }
}

/// Command-line misuse. Always reported together with the usage text and
/// never wrapped in [`DirListError`].
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("help requested")]
    HelpRequested,

    #[error("Unknown option '{option}'")]
    UnknownOption { option: String },

    #[error("Missing argument: <path>")]
    MissingArgument,

    #[error("Unexpected argument '{argument}'")]
    UnexpectedArgument { argument: String },

    #[error("{message}")]
    Invalid { message: String },
}

/// Failure to build [`FileMetadata`](crate::FileMetadata) for a single entry.
#[derive(Debug, Error)]
pub enum MetadataQueryError {
    #[error("cannot stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no user name for uid {uid}")]
    UnknownOwner { uid: u32 },

    #[error("no group name for gid {gid}")]
    UnknownGroup { gid: u32 },

    #[error("{what} lookup for id {id} failed: {source}")]
    Lookup {
        what: &'static str,
        id: u32,
        #[source]
        source: std::io::Error,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DirListError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DirListError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
