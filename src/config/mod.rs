// Configuration module entry point
// Startup settings for the runtime, logging, and connection handling

mod types;

pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from `config.toml` in the working directory
    /// (optional) plus `SERVER_`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let cfg = Config::load_from("missing-config-file").unwrap();
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert!(cfg.logging.access_log_file.is_none());
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.performance.write_timeout, 30);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = std::env::temp_dir().join(format!("hello-server-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("config.toml");
        std::fs::write(
            &file,
            "[server]\nworkers = 2\n\n[logging]\naccess_log = false\n",
        )
        .unwrap();

        let base = dir.join("config");
        let cfg = Config::load_from(base.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.workers, Some(2));
        assert!(!cfg.logging.access_log);
        // Sections absent from the file still get builder defaults
        assert_eq!(cfg.performance.read_timeout, 30);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
