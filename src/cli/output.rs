//! Output formatting module for vpnhelper
//!
//! Results go to stdout, either as bare values (one per line) or as JSON.
//! Diagnostics go to stderr.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Output formatter for the human and JSON output modes
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// JSON output mode
    json_mode: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(use_color: bool, json_mode: bool) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();

        Self {
            use_color,
            json_mode,
        }
    }

    /// Whether results should be rendered as JSON
    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    /// Render a serializable result as pretty JSON
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Render values one per line
    pub fn values(&self, values: &[String]) -> String {
        values.join("\n")
    }

    /// Render a `label: value` pair
    pub fn field(&self, label: &str, value: &str) -> String {
        if self.use_color {
            format!("{} {}", format!("{}:", label).bright_white().bold(), value)
        } else {
            format!("{}: {}", label, value)
        }
    }

    /// Print a rendered result to stdout, newline-terminated
    pub fn print(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.json_mode {
            let err = serde_json::json!({
                "type": "error",
                "message": message
            });
            eprintln!("{}", err);
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "ERROR:".red().bold(), message);
        } else {
            eprintln!("ERROR: {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.json_mode {
            let warn = serde_json::json!({
                "type": "warning",
                "message": message
            });
            eprintln!("{}", warn);
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "WARNING:".yellow().bold(), message);
        } else {
            eprintln!("WARNING: {}", message);
        }
    }

    /// Flush stdout
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}
