use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Seed the demo catalog and patient registry on an empty store.
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads configuration from defaults overridden by `APP__`-prefixed
/// environment variables (e.g. `APP__PORT=3001`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("log_level", "info")?
        .set_default("seed_demo_data", true)?
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = load_config().expect("defaults load");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.seed_demo_data);
        assert_eq!(cfg.server_addr(), "0.0.0.0:8080");
    }
}
