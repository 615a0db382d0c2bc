// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "constraint_dsl_log_debug.log";

/// Configure where the builder's diagnostics go (priority clamping warnings, and the
/// install / uninstall trace that is enabled by [`crate::DEBUG_CONSTRAINT_DSL`]).
///
/// You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Use [`crate::try_initialize_logging_global()`] to install a global subscriber with
/// this configuration. Applications that already have a subscriber don't need it, the
/// crate only emits [`tracing`] events.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

/// - `String` is the file path and prefix to use for the log file, eg:
///   `/tmp/constraint_dsl.log` or `constraint_dsl.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Warnings and errors to stderr. This is what you want in most apps, since the only
    /// warning this crate emits is the priority clamping diagnostic.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level: tracing::Level::WARN,
        }
    }
}

impl TracingConfig {
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level: tracing::Level::DEBUG,
        }
    }

    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_warns_to_stderr() {
        let config = TracingConfig::default();
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        assert_eq!(config.get_level_filter(), LevelFilter::WARN);
    }

    #[test]
    fn test_file_config_uses_default_file_name() {
        let config = TracingConfig::new_file(None);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_file_and_display_config() {
        let config = TracingConfig::new_file_and_display(
            Some("/tmp/layout.log".to_string()),
            DisplayPreference::Stdout,
        );
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                "/tmp/layout.log".to_string()
            )
        );
    }
}
