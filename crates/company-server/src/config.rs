//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration.
///
/// Database settings are read separately by
/// [`company_store::StoreConfig::from_env`].
#[derive(Clone)]
pub struct ServerConfig {
    /// Address to listen on, `host:port` or `:port`.
    pub listen_address: String,
    /// Kafka bootstrap brokers.
    pub kafka_hosts: Vec<String>,
    /// Topic change events are published to.
    pub kafka_topic: String,
    /// Partition change events are produced to.
    pub kafka_partition: i32,
    /// Base64-encoded HS256 signing key.
    pub jwt_key: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `KAFKA_HOST`: Comma-separated broker list
    /// - `KAFKA_TOPIC`: Topic for change events
    /// - `JWT_KEY`: Base64-encoded signing key
    ///
    /// Optional:
    /// - `LISTEN_ADDRESS`: Listen address (default: "0.0.0.0:8080")
    /// - `KAFKA_PARTITION`: Partition to produce to (default: 0)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "text" or "json" (default: "text")
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_address =
            env::var("LISTEN_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let kafka_hosts: Vec<String> = required("KAFKA_HOST")?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if kafka_hosts.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "KAFKA_HOST".to_string(),
                reason: "no broker addresses".to_string(),
            });
        }

        let kafka_topic = required("KAFKA_TOPIC")?;

        let kafka_partition = match env::var("KAFKA_PARTITION") {
            Ok(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "KAFKA_PARTITION".to_string(),
                reason: format!("not an integer: {s}"),
            })?,
            Err(_) => 0,
        };

        let jwt_key = required("JWT_KEY")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_address,
            kafka_hosts,
            kafka_topic,
            kafka_partition,
            jwt_key,
            log_level,
            log_format,
        })
    }

    /// Get the socket address for the server.
    ///
    /// A bare `:port` binds all interfaces.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = match self.listen_address.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => self.listen_address.clone(),
        };
        addr.parse().map_err(|e| ConfigError::InvalidValue {
            name: "LISTEN_ADDRESS".to_string(),
            reason: format!("{e}"),
        })
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("listen_address", &self.listen_address)
            .field("kafka_hosts", &self.kafka_hosts)
            .field("kafka_topic", &self.kafka_topic)
            .field("kafka_partition", &self.kafka_partition)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish_non_exhaustive()
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
