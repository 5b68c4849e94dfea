/// In-memory report of discovered declarations
///
/// A report is an ordered list of two-column records. Header, entry and
/// separator records share one shape and are told apart by their content.

/// Delimiter wrapped around file names in header records
pub const HEADER_DELIMITER: &str = "####";

/// One report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First column: a header marker, a declaration label, or empty
    pub label: String,
    /// Second column: a 1-based line number, or empty
    pub line: String,
}

/// What a record represents, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Header,
    Entry,
    Separator,
}

impl Record {
    pub fn new<L: Into<String>, N: Into<String>>(label: L, line: N) -> Self {
        Self {
            label: label.into(),
            line: line.into(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        if !self.line.is_empty() {
            RecordKind::Entry
        } else if self.label.is_empty() {
            RecordKind::Separator
        } else {
            RecordKind::Header
        }
    }

    /// Both columns, in output order
    pub fn fields(&self) -> [&str; 2] {
        [&self.label, &self.line]
    }
}

/// Append-only, ordered collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<Record>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record as-is
    pub fn push<L: Into<String>, N: Into<String>>(&mut self, label: L, line: N) {
        self.records.push(Record::new(label, line));
    }

    /// Mark the start of a file's section
    pub fn push_header(&mut self, file_name: &str) {
        self.push(
            format!("{HEADER_DELIMITER}{file_name}{HEADER_DELIMITER}"),
            String::new(),
        );
    }

    pub fn push_entry(&mut self, label: String, line_number: usize) {
        self.push(label, line_number.to_string());
    }

    /// Mark the end of a file's section
    pub fn push_separator(&mut self) {
        self.push(String::new(), String::new());
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of entry records
    pub fn entry_count(&self) -> usize {
        self.iter().filter(|r| r.kind() == RecordKind::Entry).count()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kinds_follow_shape() {
        let mut report = Report::new();
        report.push_header("app.py");
        report.push_entry("main".to_string(), 3);
        report.push_separator();

        let kinds: Vec<_> = report.iter().map(Record::kind).collect();
        assert_eq!(kinds, vec![RecordKind::Header, RecordKind::Entry, RecordKind::Separator]);
        assert_eq!(report.records()[0].label, "####app.py####");
        assert_eq!(report.records()[1].line, "3");
        assert_eq!(report.entry_count(), 1);
    }

    #[test]
    fn test_push_keeps_duplicates_in_order() {
        let mut report = Report::new();
        report.push("a", "1");
        report.push("a", "1");
        report.push("b", "2");
        assert_eq!(report.len(), 3);
        let labels: Vec<_> = report.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "a", "b"]);
    }
}
