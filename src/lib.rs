/// Declaration Lines - lists the functions and classes of Python sources
///
/// This library scans the `.py` files of a directory for `def` and `class`
/// declarations and writes a two-column report of labels and line numbers.

pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{ScanConfig, Verbosity};
pub use crate::core::report::{Record, RecordKind, Report};

/// Scan a single file and return its entry records
///
/// This is a convenience function for simple use cases. No header or
/// separator records are added.
///
/// # Arguments
///
/// * `file_path` - Path to the file to scan
/// * `verbosity` - Label detail level
pub fn scan_file<P: AsRef<std::path::Path>>(
    file_path: P,
    verbosity: Verbosity,
) -> anyhow::Result<Report> {
    let config = ScanConfig::default().with_verbosity(verbosity);
    let mut report = Report::new();
    crate::core::scanner::scan_file(file_path.as_ref(), &config, &mut report)?;
    Ok(report)
}

/// Command-line application functionality
pub mod app {
    use crate::config::ScanConfig;
    use crate::core::report::Report;
    use crate::core::scanner;
    use crate::utils::{file_utils, output_formatter};
    use anyhow::Result;
    use log::{debug, info};
    use std::path::{Path, PathBuf};

    /// What a run did
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RunOutcome {
        /// No source files were found; nothing was written
        NoFiles,
        /// The report was written
        Written {
            path: PathBuf,
            files: usize,
            entries: usize,
        },
    }

    /// Scan every source file in `dir` into a single report
    ///
    /// Each file gets a header record, its entries, then a separator record,
    /// even when it has no declarations.
    pub fn collect_report(dir: &Path, config: &ScanConfig) -> Result<Report> {
        let mut report = Report::new();

        for path in file_utils::source_files(dir, config)? {
            report.push_header(&file_utils::display_name(&path));
            let found = scanner::scan_file(&path, config, &mut report)?;
            debug!("{}: {} declarations", path.display(), found);
            report.push_separator();
        }

        Ok(report)
    }

    /// Scan `dir` and write the report next to the sources
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory whose source files are scanned
    /// * `config` - Run configuration
    ///
    /// # Returns
    ///
    /// `RunOutcome::NoFiles` when nothing was found, in which case the output
    /// file is left untouched
    pub fn run(dir: &Path, config: &ScanConfig) -> Result<RunOutcome> {
        let report = collect_report(dir, config)?;
        if report.is_empty() {
            return Ok(RunOutcome::NoFiles);
        }

        let path = dir.join(&config.output_file);
        output_formatter::write_report(&report, config, &path)?;

        let files = report
            .iter()
            .filter(|r| r.kind() == crate::core::report::RecordKind::Header)
            .count();
        let entries = report.entry_count();
        info!("Listed {} declarations from {} files", entries, files);

        Ok(RunOutcome::Written {
            path,
            files,
            entries,
        })
    }
}
