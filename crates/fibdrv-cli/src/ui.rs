//! Terminal styling for the banner and error messages.

use console::style;

/// Shown after a `Busy` error.
const BUSY_HINT: &str = "another session holds fibdrv; retry once it is closed";

/// Whether `NO_COLOR` asks for plain output.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Banner naming the engine that serves reads.
#[must_use]
pub fn header_line(algorithm: &str) -> String {
    let text = format!("=== fibdrv ({algorithm}) ===");
    if is_color_disabled() {
        text
    } else {
        style(text).bold().cyan().to_string()
    }
}

/// Lines printed for a failed run. A busy device gets a retry hint.
#[must_use]
pub fn error_lines(message: &str, busy: bool) -> Vec<String> {
    let plain = is_color_disabled();
    let tag = if plain {
        "[ERROR]".to_string()
    } else {
        style("[ERROR]").red().bold().to_string()
    };
    let mut lines = vec![format!("{tag} {message}")];
    if busy {
        lines.push(if plain {
            format!("  hint: {BUSY_HINT}")
        } else {
            format!("  {} {BUSY_HINT}", style("hint:").yellow())
        });
    }
    lines
}

pub fn print_header(algorithm: &str) {
    println!("{}", header_line(algorithm));
}

pub fn print_error(message: &str, busy: bool) {
    for line in error_lines(message, busy) {
        eprintln!("{line}");
    }
}
