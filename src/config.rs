use std::io::IsTerminal;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;

use crate::ui::RenderOptions;

pub const CONFIG_FILE: &str = "spec-reporter.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reporter: ReporterConfig,
}

/// Options for the spec reporter.
#[derive(Debug, Clone, Deserialize)]
pub struct ReporterConfig {
    /// Maximum stack frames printed per error.
    #[serde(default = "default_stack_lines_count")]
    pub stack_lines_count: NonZeroUsize,
    /// Force colors on or off. Auto-detected from the terminal when unset.
    #[serde(default)]
    pub colors: Option<bool>,
}

fn default_stack_lines_count() -> NonZeroUsize {
    NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN)
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            stack_lines_count: default_stack_lines_count(),
            colors: None,
        }
    }
}

impl ReporterConfig {
    /// Colors are on when forced, otherwise when stdout is a terminal and
    /// `NO_COLOR` is unset.
    pub fn render_options(&self) -> RenderOptions {
        let colors = self.colors.unwrap_or_else(|| {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        });
        let width = crossterm::terminal::size()
            .map(|(columns, _)| columns as usize)
            .unwrap_or(80);
        RenderOptions { colors, width }
    }
}

impl Config {
    /// Load `spec-reporter.toml` from `dir`, falling back to defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                let path = path.display();
                tracing::warn!(%path, error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path());
        assert_eq!(config.reporter.stack_lines_count.get(), 5);
        assert_eq!(config.reporter.colors, None);
    }

    #[test]
    fn reads_reporter_table() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[reporter]\nstack_lines_count = 12\ncolors = false\n",
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.reporter.stack_lines_count.get(), 12);
        assert!(!config.reporter.render_options().colors);
    }

    #[test]
    fn zero_stack_lines_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[reporter]\nstack_lines_count = 0\n",
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.reporter.stack_lines_count.get(), 5);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[reporter]\ncolors = true\n").unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.reporter.colors, Some(true));
        assert_eq!(config.reporter.stack_lines_count.get(), 5);
    }
}
