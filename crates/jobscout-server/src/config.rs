use jobscout_core::error::AppError;

/// Server runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `API_HOST` (optional, defaults to 0.0.0.0)
    /// - `API_PORT` (optional, defaults to 8000)
    /// - `ENVIRONMENT` (optional, defaults to development)
    /// - `LOG_LEVEL` (optional, defaults to info)
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("API_PORT") {
            Err(_) => 8000,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("Invalid API_PORT '{raw}': must be a port number"))
            })?,
        };

        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            environment,
            log_level,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
