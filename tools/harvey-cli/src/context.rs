//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use harvey_commerce::config::StorefrontConfig;
use harvey_observability::{LogFormat, LogLevel, StructuredLogger};

use crate::config::{self, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            // Try to find config in current directory or parent directories
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => config::load(path)?,
            None => StorefrontConfig::default(),
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Structured logger for a component, honouring the `[log]` config.
    ///
    /// `--verbose` lowers the threshold to debug.
    pub fn logger(&self, scope: &str) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            self.config.log.level.parse().unwrap_or(LogLevel::Info)
        };
        let format = self.config.log.format.parse().unwrap_or(LogFormat::Human);

        StructuredLogger::new(scope)
            .with_min_level(level)
            .with_format(format)
    }

    /// Path `config init` writes to.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find a config file in `start` or any of its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".harvey.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join(".harvey.toml")));
    }

    #[test]
    fn test_find_config_prefers_plain_name() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(".harvey.toml"), "").unwrap();
        std::fs::write(root.path().join("harvey.toml"), "").unwrap();

        assert_eq!(find_config(root.path()), Some(root.path().join("harvey.toml")));
    }

    #[test]
    fn test_resolve_relative() {
        let cwd = Path::new("/srv/shop");
        assert_eq!(resolve(cwd, "conf/harvey.toml"), PathBuf::from("/srv/shop/conf/harvey.toml"));
        assert_eq!(resolve(cwd, "/etc/harvey.toml"), PathBuf::from("/etc/harvey.toml"));
    }
}
