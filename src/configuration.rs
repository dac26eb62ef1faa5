use crate::connectors::OpenAiConfig;
use serde;
use std::fmt;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    /// Directory with the mini-app front-end, served at `/` when present.
    #[serde(default)]
    pub static_dir: Option<String>,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub ai: OpenAiConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Clone, Default, serde::Deserialize)]
pub struct AuthSettings {
    /// Bot token used as the signing secret of the session payload (from env: BOT_TOKEN)
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// Maximum accepted age of `auth_date`, 0 disables the check
    #[serde(default)]
    pub max_age_secs: u64,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "***"))
            .field("max_age_secs", &self.max_age_secs)
            .finish()
    }
}

impl AuthSettings {
    pub fn with_bot_token(mut self, bot_token: impl Into<String>) -> Self {
        self.bot_token = Some(bot_token.into());
        self
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // `configuration.yaml` first, then APP__SECTION__KEY overrides from the environment
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // Secrets never live in the config file
    config.auth.bot_token = non_empty_env("BOT_TOKEN");
    config.ai.api_key = non_empty_env("OPENAI_API_KEY");

    Ok(config)
}
