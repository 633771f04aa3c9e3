use std::time::Duration;

use lettre::transport::smtp::authentication::Credentials;
use serde::Deserialize;

/// Outbound relay settings, read once at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login for AUTH. When empty, mail is sent without authenticating.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Upgrade the connection with STARTTLS before authenticating
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            use_tls: default_use_tls(),
            sender: String::new(),
            recipient: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// The From address. Relays that only accept mail from the authenticated
    /// account are served by leaving `sender` empty.
    pub fn sender_address(&self) -> &str {
        if self.sender.is_empty() {
            &self.username
        } else {
            &self.sender
        }
    }

    /// `None` when the relay is used without authentication (e.g. MailDev)
    pub fn credentials(&self) -> Option<Credentials> {
        if self.username.is_empty() {
            return None;
        }

        Some(Credentials::new(
            self.username.to_owned(),
            self.password.to_owned(),
        ))
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    587
}

fn default_use_tls() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}
