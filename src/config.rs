//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use secrecy::SecretString;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_SEARCH_ENDPOINT: &str = "http://localhost:9010";
    pub const DEV_SEARCH_QUERY_KEY: &str = "dev-query-key-do-not-use-in-production";
    pub const DEV_SEARCH_INDEX: &str = "hotels";
    pub const DEV_SEARCH_SUGGESTER: &str = "sg";
    pub const DEV_SEARCH_API_VERSION: &str = "2023-11-01";
    pub const DEV_SEARCH_MAX_RESULTS: usize = 1000;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Connection settings for the external search service.
///
/// The query key is read-only (query operations never need an admin key)
/// and is kept out of logs via `SecretString`.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Base URL of the search service, e.g. `https://myservice.search.windows.net`
    pub endpoint: String,
    /// Query API key
    pub query_key: SecretString,
    /// Index holding the hotel documents
    pub index: String,
    /// Suggester configured on the index (backs suggest and autocomplete)
    pub suggester: String,
    /// REST API version string sent with every call
    pub api_version: String,
    /// Upper bound on hits retrieved per query; pagination slices locally
    /// within this bounded result set
    pub max_results: usize,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// External search service settings
    pub search: SearchSettings,
    /// Directory for static frontend assets (production only)
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In development mode (RUST_ENV=development) every variable has a
    /// default and only RUST_ENV is required. In production mode the server
    /// refuses to start with development defaults for the search endpoint
    /// or query key.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `STAY_HOST`: Server host (default: 127.0.0.1)
    /// - `STAY_PORT`: Server port (default: 8080)
    /// - `SEARCH_ENDPOINT`: Search service base URL (required in production)
    /// - `SEARCH_QUERY_KEY`: Query API key (required in production)
    /// - `SEARCH_INDEX`: Index name (default: hotels)
    /// - `SEARCH_SUGGESTER`: Suggester name (default: sg)
    /// - `SEARCH_API_VERSION`: REST API version (default: 2023-11-01)
    /// - `SEARCH_MAX_RESULTS`: Result-set retrieval cap (default: 1000)
    /// - `STAY_STATIC_DIR`: Static assets directory for production
    pub fn from_env() -> Result<Self, ConfigError> {
        // Parse environment - required
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("STAY_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("STAY_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("STAY_PORT must be a valid port number"))?;

        let endpoint = env::var("SEARCH_ENDPOINT")
            .unwrap_or_else(|_| defaults::DEV_SEARCH_ENDPOINT.to_string());

        let query_key = SecretString::from(
            env::var("SEARCH_QUERY_KEY")
                .unwrap_or_else(|_| defaults::DEV_SEARCH_QUERY_KEY.to_string()),
        );

        let index =
            env::var("SEARCH_INDEX").unwrap_or_else(|_| defaults::DEV_SEARCH_INDEX.to_string());

        let suggester = env::var("SEARCH_SUGGESTER")
            .unwrap_or_else(|_| defaults::DEV_SEARCH_SUGGESTER.to_string());

        let api_version = env::var("SEARCH_API_VERSION")
            .unwrap_or_else(|_| defaults::DEV_SEARCH_API_VERSION.to_string());

        let max_results = env::var("SEARCH_MAX_RESULTS")
            .unwrap_or_else(|_| defaults::DEV_SEARCH_MAX_RESULTS.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidValue("SEARCH_MAX_RESULTS must be a valid number"))?;

        if max_results == 0 {
            return Err(ConfigError::InvalidValue(
                "SEARCH_MAX_RESULTS must be greater than zero",
            ));
        }

        let static_dir = env::var("STAY_STATIC_DIR").ok().map(PathBuf::from);

        let config = Config {
            environment,
            host,
            port,
            search: SearchSettings {
                endpoint,
                query_key,
                index,
                suggester,
                api_version,
                max_results,
            },
            static_dir,
        };

        // Validate production configuration
        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        use secrecy::ExposeSecret;

        let mut errors = Vec::new();

        if self.search.endpoint == defaults::DEV_SEARCH_ENDPOINT {
            errors.push(format!(
                "SEARCH_ENDPOINT is using development default '{}'. Set the production search service URL.",
                defaults::DEV_SEARCH_ENDPOINT
            ));
        }

        if self.search.query_key.expose_secret() == defaults::DEV_SEARCH_QUERY_KEY {
            errors.push(
                "SEARCH_QUERY_KEY is using the development default. Set a production query key."
                    .to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
