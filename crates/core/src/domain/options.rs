// src/domain/options.rs

/// How entries are rendered. Fixed for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    pub long_format: bool,
}

/// Where the long format looks up an entry's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataLookup {
    /// Join the listed directory with the entry name.
    #[default]
    ListedDirectory,
    /// Use the bare entry name, resolved against the process working directory.
    /// Only correct when listing `.`; kept for output parity with older builds.
    WorkingDirectory,
}

/// What to do when the directory cannot be opened or an entry cannot be stat'd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Print the error to stderr and exit non-zero.
    #[default]
    Report,
    /// Print nothing and exit 0.
    SilentSuccess,
}

/// Switches that reproduce legacy behaviour bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompatOptions {
    pub metadata_lookup: MetadataLookup,
    pub failure_policy: FailurePolicy,
}
