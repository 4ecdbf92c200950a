//! CI output helpers

use std::io::Write;

/// Emit a `key=value` pair for the invoking CI step.
///
/// The pair is always printed to stdout; when `$GITHUB_OUTPUT` is set it is
/// also appended to that file so the surrounding workflow step can consume
/// it as an output variable.
pub fn emit_action_output(key: &str, value: &str) -> std::io::Result<()> {
    println!("{}={}", key, value);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}={}", key, value)?;
    }

    Ok(())
}
