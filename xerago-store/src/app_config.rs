use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;

pub const DEFAULT_COUPON_FOLDER: &str = "/content/coupons/static";
pub const DEFAULT_START_SCREEN_TYPE: &str = "xeragotheme/components/smartRushGame/gamestartscreen";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub coupons: CouponConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub backend: RepositoryBackend,
    pub database_url: Option<String>,
    /// JSON seed file loaded at startup.
    pub seed: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CouponConfig {
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default = "default_start_screen_type")]
    pub start_screen_resource_type: String,
}

impl Default for CouponConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            start_screen_resource_type: default_start_screen_type(),
        }
    }
}

fn default_folder() -> String {
    DEFAULT_COUPON_FOLDER.to_string()
}

fn default_start_screen_type() -> String {
    DEFAULT_START_SCREEN_TYPE.to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RandomConfig {
    /// Fixed seed for coupon selection; unset means thread-local entropy.
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `XERAGO__SERVER__PORT=8081`
            .add_source(
                config::Environment::with_prefix("XERAGO")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
