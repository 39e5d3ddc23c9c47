use crate::auth::jwt::JwtConfig;

/// Process-level settings for the formgen server, read once at startup.
///
/// Generator settings live in `formgen_llm::LlmConfig`; everything the HTTP
/// server and the store need is here.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Postgres connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Upper bound on pooled connections. Each generation request holds one
    /// only while its tree is written, so this can stay well below the
    /// number of concurrent generations.
    pub database_max_connections: u32,
    /// Origins the creation dialog is served from.
    pub cors_origins: Vec<String>,
    /// Covers the whole generation round trip, so it should exceed
    /// `LLM_TIMEOUT_SECS`.
    pub request_timeout_secs: u64,
    /// Grace period for in-flight generations after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default                 |
    /// |----------------------------|----------|-------------------------|
    /// | `DATABASE_URL`             | **yes**  | --                      |
    /// | `DATABASE_MAX_CONNECTIONS` | no       | `20`                    |
    /// | `HOST`                     | no       | `0.0.0.0`               |
    /// | `PORT`                     | no       | `3000`                  |
    /// | `CORS_ORIGINS`             | no       | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`     | no       | `90`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | no       | `30`                    |
    ///
    /// # Panics
    ///
    /// Panics on a missing `DATABASE_URL` or an unparseable number, so
    /// misconfiguration stops the process before it binds.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3001".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks and stray whitespace.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
