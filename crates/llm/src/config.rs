/// Default OpenAI-compatible API base URL.
const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
/// Default chat model.
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default HTTP timeout for one generation call, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the generation endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`.
    pub api_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Model name passed through to the endpoint.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Required | Default                     |
    /// |--------------------|----------|-----------------------------|
    /// | `LLM_API_KEY`      | **yes**  | --                          |
    /// | `LLM_API_URL`      | no       | `https://api.openai.com/v1` |
    /// | `LLM_MODEL`        | no       | `gpt-4o-mini`               |
    /// | `LLM_TIMEOUT_SECS` | no       | `60`                        |
    ///
    /// # Panics
    ///
    /// Panics if `LLM_API_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("LLM_API_KEY").expect("LLM_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "LLM_API_KEY must not be empty");

        let api_url = std::env::var("LLM_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            api_key,
            model,
            timeout_secs,
        }
    }
}
