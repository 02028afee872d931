//! Server configuration from the environment (`.env` honoured).

const DEFAULT_EVENT_BUFFER: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Number of recent events the collector keeps.
    pub event_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let event_buffer = match lookup("EVENT_BUFFER") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "EVENT_BUFFER",
                value,
            })?,
            None => DEFAULT_EVENT_BUFFER,
        };
        Ok(Self { event_buffer })
    }
}
