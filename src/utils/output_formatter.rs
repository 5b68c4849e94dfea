/// Output formatter for the declaration report
///
/// This module lays the report out as two left-aligned, space-padded columns
/// and writes it to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::ScanConfig;
use crate::core::report::{Record, Report};

/// Width every column is padded to
///
/// The longest label or line number across the whole report, measured in
/// characters, plus the padding for the configured verbosity.
pub fn column_width(report: &Report, config: &ScanConfig) -> usize {
    let longest = report
        .iter()
        .flat_map(|record| record.fields())
        .map(|field| field.chars().count())
        .max()
        .unwrap_or(0);

    longest + config.padding()
}

/// Render one record as an output line, without the newline
pub fn render_line(record: &Record, width: usize) -> String {
    let mut line = String::new();
    for field in record.fields() {
        line.push_str(&format!("{:<width$}", field, width = width));
    }
    line.truncate(line.trim_end().len());
    line
}

/// Render the whole report as the contents of the output file
pub fn render_report(report: &Report, config: &ScanConfig) -> String {
    let width = column_width(report, config);
    let mut output = String::new();
    for record in report {
        output.push_str(&render_line(record, width));
        output.push('\n');
    }
    output
}

/// Write the report to a file, replacing any previous contents
///
/// # Arguments
///
/// * `report` - The collected records, expected to be non-empty
/// * `config` - Run configuration
/// * `output_path` - Path where the report will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn write_report(report: &Report, config: &ScanConfig, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(render_report(report, config).as_bytes())
        .with_context(|| format!("Failed to write to {}", output_path.display()))?;

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", output_path.display()))?;

    info!("Wrote {} records to {}", report.len(), output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.push_header("mod.py");
        report.push_entry("alpha".to_string(), 1);
        report.push_entry("class Beta".to_string(), 12);
        report.push_separator();
        report
    }

    #[test]
    fn test_column_width_uses_longest_field() {
        let report = sample_report();
        // "####mod.py####" is 14 characters
        assert_eq!(column_width(&report, &ScanConfig::default()), 24);
        let verbose = ScanConfig::default().with_verbosity(Verbosity::Verbose);
        assert_eq!(column_width(&report, &verbose), 16);
    }

    #[test]
    fn test_render_pads_first_column_and_trims() {
        let report = sample_report();
        let width = 16;
        let lines: Vec<_> = report.iter().map(|r| render_line(r, width)).collect();
        assert_eq!(lines[0], "####mod.py####");
        assert_eq!(lines[1], format!("{:<16}1", "alpha"));
        assert_eq!(lines[2], format!("{:<16}12", "class Beta"));
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_render_report_ends_every_line_with_newline() {
        let report = sample_report();
        let output = render_report(&report, &ScanConfig::default());
        assert_eq!(output.lines().count(), 4);
        assert!(output.ends_with("\n\n"));
        assert!(!output.contains('\r'));
    }

    #[test]
    fn test_write_report_truncates_existing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lines.txt");
        std::fs::write(&path, "stale contents that are much longer than the report\n".repeat(20))
            .unwrap();

        let report = sample_report();
        let config = ScanConfig::default();
        write_report(&report, &config, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report(&report, &config));
    }
}
