//! Mail notification configuration.

use serde::{Deserialize, Serialize};

/// Outbound mail notification settings.
///
/// Disabled by default; when enabled, a plain SMTP relay (no auth, no
/// TLS) is expected at `smtp_host:smtp_port`, typically localhost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Enable the address-update notification
    #[serde(default)]
    pub enabled: bool,

    /// SMTP relay host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Envelope and header sender address
    #[serde(default = "default_from")]
    pub from: String,

    /// Recipient address
    #[serde(default)]
    pub to: String,

    /// Subject line
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_smtp_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_smtp_port() -> u16 {
    25
}

fn default_from() -> String {
    "windlantern@localhost".to_string()
}

fn default_subject() -> String {
    "Wind Lantern address updated".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            from: default_from(),
            to: String::new(),
            subject: default_subject(),
        }
    }
}
