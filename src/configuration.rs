use crate::connectors::config::PayPalSettings;

#[derive(Debug, serde::Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paypal: PayPalSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paypal: PayPalSettings::default(),
            log_level: default_log_level(),
        }
    }
}

/// Layered settings: optional `configuration.{yaml,toml,json}` in the working
/// directory, then `APP_*` environment variables (`APP_PAYPAL__CLIENT_ID`, ...).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
