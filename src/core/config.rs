use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Read every section from the environment, after `.env` if present
    pub fn from_env() -> Result<Self, String> {
        match dotenvy::dotenv() {
            Err(e) if !e.not_found() => eprintln!("Warning: could not read .env: {}", e),
            _ => {}
        }

        Ok(Self {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "127.0.0.1";
    const DEFAULT_PORT: u16 = 3000;
    // Request bodies are small JSON objects
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024;

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            host: var_or("HOST", Self::DEFAULT_HOST),
            port: parse_or("PORT", Self::DEFAULT_PORT)?,
            cors_allowed_origins: parse_origins(&var_or("CORS_ALLOWED_ORIGINS", "*")),
            max_request_body_size: parse_or(
                "MAX_REQUEST_BODY_SIZE",
                Self::DEFAULT_MAX_REQUEST_BODY_SIZE,
            )?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: Self::DEFAULT_MAX_REQUEST_BODY_SIZE,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl DatabaseConfig {
    // Every request is a single short round trip
    const POOL_MAX: u32 = 10;
    const POOL_MIN: u32 = 1;
    const ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const IDLE_TIMEOUT_SECS: u64 = 10 * 60;
    const MAX_LIFETIME_SECS: u64 = 30 * 60;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL is required".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", Self::POOL_MAX)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", Self::POOL_MIN)?,
            acquire_timeout_secs: parse_or("DB_ACQUIRE_TIMEOUT_SECS", Self::ACQUIRE_TIMEOUT_SECS)?,
            idle_timeout_secs: parse_or("DB_IDLE_TIMEOUT_SECS", Self::IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_or("DB_MAX_LIFETIME_SECS", Self::MAX_LIFETIME_SECS)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        Self {
            title: var_or("SWAGGER_TITLE", "Board Game Reviews API"),
            version: var_or("SWAGGER_VERSION", env!("CARGO_PKG_VERSION")),
            description: var_or(
                "SWAGGER_DESCRIPTION",
                "Reviews, categories, comments and users for board games",
            ),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a numeric variable, falling back to `default` when unset
fn parse_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}
