/// Utility modules for the declaration lister
///
/// This module contains the source-file enumerator and the report writer.

pub mod file_utils;
pub mod output_formatter;
