use std::env;
use config::{Config, File, ConfigError};
use dotenv::dotenv;
use secrecy::SecretString;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub provider: ProviderSettings,
    pub cache: CacheSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub log_level: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout_seconds: u64,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct CacheSettings {
    pub ttl_seconds: u64,
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
        )
        .add_source(
            config::Environment::default()
                .prefix("PROVIDER")
                .prefix_separator("__")
                .separator("__")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    // Hosted deployments expose the provider key directly as an env var
    if let Ok(api_key) = env::var("APIFOOTBALL_KEY") {
        settings.provider.api_key = SecretString::new(api_key.into_boxed_str());
    }

    Ok(settings)
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
