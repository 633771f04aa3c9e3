use std::{collections::HashMap, env};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lettre::message::Mailbox;
use serde::Deserialize;
use weba_notification::MailConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub company: CompanyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Business profile shown in the navbar and footer of every page
#[derive(Debug, Deserialize, Clone)]
pub struct CompanyConfig {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_company_city")]
    pub city: String,
    #[serde(default = "default_company_country")]
    pub country: String,
    #[serde(default)]
    pub business_id: String,
    #[serde(default)]
    pub social_links: HashMap<String, String>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            phone: String::new(),
            email: String::new(),
            city: default_company_city(),
            country: default_company_country(),
            business_id: String::new(),
            social_links: HashMap::new(),
        }
    }
}

impl CompanyConfig {
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "phone" => &self.phone,
            "email" => &self.email,
            "city" => &self.city,
            "country" => &self.country,
            "business_id" => &self.business_id,
            _ => return None,
        };

        Some(value.as_str())
    }

    pub fn social_link(&self, network: &str) -> Option<&str> {
        self.social_links
            .get(network)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }
}

fn default_company_name() -> String {
    "WEBA Consultants".to_string()
}

fn default_company_city() -> String {
    "Helsinki".to_string()
}

fn default_company_country() -> String {
    "Finland".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `json` for structured output, anything else for console output
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Flat mail variables (MAIL_SERVER, MAIL_PORT, ...)
    /// 2. Environment variables (WEBA__MAIL__HOST, etc.)
    /// 3. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEBA")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("MAIL_SERVER", "mail.host"),
            ("MAIL_PORT", "mail.port"),
            ("MAIL_USE_TLS", "mail.use_tls"),
            ("MAIL_USERNAME", "mail.username"),
            ("MAIL_PASSWORD", "mail.password"),
            ("MAIL_SENDER", "mail.sender"),
            ("MAIL_RECEIVER", "mail.recipient"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.mail.port == 0 {
            return Err("Mail port must be greater than 0".to_string());
        }

        for (name, address) in [
            ("mail.sender", self.mail.sender_address()),
            ("mail.recipient", self.mail.recipient.as_str()),
        ] {
            if !address.is_empty() && address.parse::<Mailbox>().is_err() {
                return Err(format!("{name} is not a valid email address: {address}"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig::default(),
            mail: MailConfig {
                sender: "noreply@weba.fi".to_string(),
                recipient: "office@weba.fi".to_string(),
                ..Default::default()
            },
            company: CompanyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_mail_port() {
        let mut config = config();
        config.mail.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_recipient() {
        let mut config = config();
        config.mail.recipient = "not an address".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.contains("mail.recipient"));
    }

    #[test]
    fn test_validation_allows_unset_addresses() {
        let mut config = config();
        config.mail.sender = String::new();
        config.mail.recipient = String::new();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_company_lookup() {
        let mut company = CompanyConfig::default();
        company
            .social_links
            .insert("linkedin".to_string(), "https://linkedin.com/company/weba".to_string());
        company
            .social_links
            .insert("facebook".to_string(), String::new());

        assert_eq!(company.field("name"), Some("WEBA Consultants"));
        assert_eq!(company.field("city"), Some("Helsinki"));
        assert_eq!(company.field("password"), None);
        assert_eq!(
            company.social_link("linkedin"),
            Some("https://linkedin.com/company/weba")
        );
        assert_eq!(company.social_link("facebook"), None);
        assert_eq!(company.social_link("instagram"), None);
    }
}
