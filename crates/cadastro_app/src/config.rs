//! Startup configuration.
//!
//! # Responsibility
//! - Resolve database path and logging settings once per process.
//!
//! # Invariants
//! - Every resolved path is absolute when the working directory is known.
//! - Blank overrides are ignored.

use cadastro_core::default_log_level;
use std::path::{Path, PathBuf};

const DB_PATH_ENV: &str = "CADASTRO_DB_PATH";
const LOG_LEVEL_ENV: &str = "CADASTRO_LOG_LEVEL";
const LOG_DIR_ENV: &str = "CADASTRO_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "cadastros.db";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve(|key| std::env::var(key).ok(), &cwd)
    }

    /// Resolves settings from `lookup`, anchoring relative paths at `cwd`.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>, cwd: &Path) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let db_path = cwd.join(value(DB_PATH_ENV).unwrap_or_else(|| DEFAULT_DB_FILE_NAME.into()));
        let log_dir = match value(LOG_DIR_ENV) {
            Some(dir) => cwd.join(dir),
            None => db_path
                .parent()
                .unwrap_or(cwd)
                .join(DEFAULT_LOG_DIR_NAME),
        };
        let log_level = value(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use cadastro_core::default_log_level;
    use std::collections::HashMap;
    use std::path::Path;

    fn resolve_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::resolve(|key| vars.get(key).cloned(), Path::new("/work"))
    }

    #[test]
    fn defaults_place_database_and_logs_in_working_directory() {
        let config = resolve_with(&[]);
        assert_eq!(config.db_path, Path::new("/work/cadastros.db"));
        assert_eq!(config.log_dir, Path::new("/work/logs"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn db_override_moves_default_log_dir_along() {
        let config = resolve_with(&[("CADASTRO_DB_PATH", "/data/people.db")]);
        assert_eq!(config.db_path, Path::new("/data/people.db"));
        assert_eq!(config.log_dir, Path::new("/data/logs"));
    }

    #[test]
    fn relative_overrides_are_anchored_and_blank_ones_ignored() {
        let config = resolve_with(&[
            ("CADASTRO_DB_PATH", "  "),
            ("CADASTRO_LOG_DIR", "var/log"),
            ("CADASTRO_LOG_LEVEL", " warn "),
        ]);
        assert_eq!(config.db_path, Path::new("/work/cadastros.db"));
        assert_eq!(config.log_dir, Path::new("/work/var/log"));
        assert_eq!(config.log_level, "warn");
    }
}
