use std::io::IsTerminal;

use crate::logger::{format::LoggerFormat, level::LoggerLevel};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    /// Include the event target (module path) in each line.
    pub with_targets: bool,
    /// ANSI colors; ignored by the json and journald backends.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::Text,
            level: LoggerLevel::default(),
            with_targets: true,
            use_color,
        }
    }
}
