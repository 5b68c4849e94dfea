/// Line scanner
///
/// Reads a source file line by line and records every line that looks like a
/// function or class declaration. Detection is a plain substring heuristic:
/// a keyword plus a colon somewhere on the same line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::config::ScanConfig;
use crate::core::formatter::format_declaration;
use crate::core::report::Report;

/// Substring marking a function declaration
pub const FUNCTION_MARKER: &str = "def ";

/// Substring marking a class declaration
pub const CLASS_KEYWORD: &str = "class";

/// Error raised while reading a source file
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Whether a raw line is a declaration candidate.
///
/// The colon keeps out comments and prose that merely mention a keyword.
/// It is not a syntax check: colons in strings still match, and a
/// declaration whose colon sits on a continuation line is missed.
pub fn is_candidate(line: &str) -> bool {
    (line.contains(FUNCTION_MARKER) || line.contains(CLASS_KEYWORD)) && line.contains(':')
}

/// Scan a file and append its declarations to `report`
///
/// # Arguments
///
/// * `path` - Source file to read
/// * `config` - Run configuration
/// * `report` - Report receiving one entry record per declaration
///
/// # Returns
///
/// The number of entries recorded
pub fn scan_file(path: &Path, config: &ScanConfig, report: &mut Report) -> Result<usize, ScanError> {
    debug!("Scanning {}", path.display());

    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    scan_reader(BufReader::new(file), config, report).map_err(|(line, source)| ScanError::Read {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Scan any buffered reader. Errors carry the line number being read.
pub fn scan_reader<R: BufRead>(
    mut reader: R,
    config: &ScanConfig,
    report: &mut Report,
) -> Result<usize, (usize, io::Error)> {
    let mut buf = Vec::new();
    let mut line_num = 1;
    let mut found = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| (line_num, e))?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if is_candidate(&line) {
            let label = format_declaration(strip_terminator(&line), config);
            trace!("line {}: {:?}", line_num, label);
            report.push_entry(label, line_num);
            found += 1;
        }
        line_num += 1;
    }

    Ok(found)
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
