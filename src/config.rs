/// Run configuration
///
/// A `ScanConfig` is built once per run and handed by reference to every
/// scanning, formatting and writing step.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default source-file suffix
pub const DEFAULT_EXTENSION: &str = ".py";

/// Default report file name
pub const DEFAULT_OUTPUT_FILE: &str = "lines.txt";

/// How much detail each entry label carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Bare names only
    #[default]
    Terse,
    /// Parameter lists and base classes included
    Verbose,
}

/// Configuration for a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Label detail level
    pub verbosity: Verbosity,

    /// Suffix a file name must end with to be scanned
    pub extension: String,

    /// Report file, resolved against the scanned directory
    pub output_file: PathBuf,

    /// File name that is never scanned (the running program itself)
    pub skip_name: Option<OsString>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Terse,
            extension: DEFAULT_EXTENSION.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            skip_name: None,
        }
    }
}

impl ScanConfig {
    /// Build the configuration used by the command-line binary
    ///
    /// The skipped name is the file name component of `argv[0]`.
    pub fn for_invocation(verbose: bool) -> Self {
        let skip_name = std::env::args_os()
            .next()
            .and_then(|arg0| Path::new(&arg0).file_name().map(|name| name.to_os_string()));

        Self {
            verbosity: if verbose { Verbosity::Verbose } else { Verbosity::Terse },
            skip_name,
            ..Self::default()
        }
    }

    /// Set the verbosity
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the name to exclude from scanning
    pub fn with_skip_name<S: Into<OsString>>(mut self, name: S) -> Self {
        self.skip_name = Some(name.into());
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Gap added to the widest field when aligning report columns.
    /// Verbose labels are longer, so they get less padding.
    pub fn padding(&self) -> usize {
        match self.verbosity {
            Verbosity::Verbose => 2,
            Verbosity::Terse => 10,
        }
    }
}
