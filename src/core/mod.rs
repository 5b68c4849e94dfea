/// Core module for declaration scanning
///
/// This module contains the line scanner, the entry label formatter and the
/// in-memory report they fill.

pub mod formatter;
pub mod report;
pub mod scanner;
