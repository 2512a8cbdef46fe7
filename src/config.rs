use std::env;

/// Application configuration, loaded from environment variables with
/// defaults. `dotenvy` has already populated the environment from `.env`
/// by the time this runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Config {
        let defaults = Config::default();

        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let log_level = env::var("LOG_LEVEL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_level);

        Config { port, log_level }
    }
}
