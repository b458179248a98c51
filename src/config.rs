use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub registration: RegistrationMode,
    pub max_body_size: usize,
    pub log_level: String,
    pub ai: Option<AiConfig>,
}

/// Upstream chat-completions provider for the AI assistant.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationMode {
    Open,
    Closed,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("STAFFHUB_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid STAFFHUB_HOST: {e}"))?;

        let port: u16 = env_or("STAFFHUB_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid STAFFHUB_PORT: {e}"))?;

        let registration = match env_or("STAFFHUB_REGISTRATION", "open").as_str() {
            "closed" => RegistrationMode::Closed,
            _ => RegistrationMode::Open,
        };

        let max_body_size: usize = env_or("STAFFHUB_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid STAFFHUB_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("STAFFHUB_LOG_LEVEL", "info");

        let ai = std::env::var("GROQ_API_KEY").ok().map(|api_key| AiConfig {
            api_key,
            base_url: env_or("STAFFHUB_AI_BASE_URL", "https://api.groq.com/openai/v1"),
            model: env_or("STAFFHUB_AI_MODEL", "llama-3.1-8b-instant"),
        });

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            registration,
            max_body_size,
            log_level,
            ai,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
