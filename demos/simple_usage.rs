/// Simple example demonstrating how to use the declaration lister library

use anyhow::Result;
use decl_lines::{scan_file, Verbosity};
use std::path::Path;

fn main() -> Result<()> {
    // Path to file for scanning
    let file_path = std::env::temp_dir().join("decl_lines_sample.py");

    // Create sample file
    std::fs::write(
        &file_path,
        r#"class Greeter(object):
    def __init__(self, name):
        self.name = name

    def greet(self, punctuation="!"):
        return "Hello " + self.name + punctuation
"#,
    )?;

    println!("Scanning file: {}", file_path.display());

    for verbosity in [Verbosity::Terse, Verbosity::Verbose] {
        let report = scan_file(Path::new(&file_path), verbosity)?;

        println!("\n{:?}:", verbosity);
        for record in &report {
            println!("  {:>3}  {}", record.line, record.label);
        }
    }

    std::fs::remove_file(&file_path)?;

    Ok(())
}
