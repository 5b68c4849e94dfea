/// Entry label formatting
///
/// Turns a matched declaration line into the label shown in the report.
/// The rules are textual and make no attempt to understand the declaration.

use crate::config::ScanConfig;
use crate::core::scanner::CLASS_KEYWORD;

/// Function keyword, dropped from function labels. Also the substring that
/// selects function formatting, so `undefined` or `default` select it too.
const FUNCTION_KEYWORD: &str = "def";

/// Format a function declaration line
///
/// Terse mode yields the bare name. Verbose mode yields the name and
/// parameter list with the colon and everything after it removed.
///
/// # Arguments
///
/// * `line` - The declaration line, already stripped of its terminator
/// * `config` - Run configuration
///
/// # Returns
///
/// The entry label
pub fn format_function(line: &str, config: &ScanConfig) -> String {
    let mut tokens = line
        .split_whitespace()
        .filter(|token| *token != FUNCTION_KEYWORD);

    if config.is_verbose() {
        let mut function = String::new();
        for token in tokens {
            function.push_str(token);
            function.push(' ');
        }
        match function.find(':') {
            Some(idx) => function.truncate(idx),
            // no colon: the last character goes instead
            None => {
                function.pop();
            }
        }
        function
    } else {
        tokens
            .next()
            .map(|token| before_paren(token).to_string())
            .unwrap_or_default()
    }
}

/// Format a class declaration line
///
/// Terse mode keeps everything before the first `(`, including the `class`
/// keyword and any indentation. Verbose mode drops the final character,
/// which is the colon only when nothing follows it on the line.
pub fn format_class(line: &str, config: &ScanConfig) -> String {
    if config.is_verbose() {
        let mut class = line.to_string();
        class.pop();
        class
    } else {
        before_paren(line).to_string()
    }
}

/// Format a candidate line the way the scanner does.
///
/// Function formatting runs first, whenever the line contains the bare
/// function keyword anywhere. Class formatting then runs on its result
/// whenever that result still mentions the class keyword.
pub fn format_declaration(line: &str, config: &ScanConfig) -> String {
    let mut label = line.to_string();
    if label.contains(FUNCTION_KEYWORD) {
        label = format_function(&label, config);
    }
    if label.contains(CLASS_KEYWORD) {
        label = format_class(&label, config);
    }
    label
}

fn before_paren(text: &str) -> &str {
    text.split('(').next().unwrap_or(text)
}
