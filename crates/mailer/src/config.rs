//! Mailer configuration.
//!
//! Deployment concerns (database, credentials, error tracking) come from
//! environment variables. Store behaviour (sender address, which emails are
//! enabled, template paths) comes from a JSON settings file so it can be
//! versioned with the theme.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL` - `PostgreSQL` connection string for the store database
//!
//! ## Optional
//! - `RESEND_API_KEY` - Resend API key. Without it no email is sent.
//! - `RESEND_BASE_URL` - Resend API base URL (default: `https://api.resend.com`)
//! - `LARDER_CONFIG` - Settings file path (default: `config/default.json`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//!
//! # Settings File
//!
//! ```json
//! {
//!   "resend": {
//!     "from": "Larder <orders@larder.shop>",
//!     "events": {
//!       "order_placed": {
//!         "enabled": true,
//!         "subject": "Thanks for your order",
//!         "templatePath": "emails/order_placed.hbs",
//!         "diagnosticTo": "ops@larder.shop"
//!       }
//!     }
//!   },
//!   "events": { "pollIntervalSecs": 10, "batchSize": 10 }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

/// Default settings file location, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "config/default.json";

/// Default Resend API base URL.
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.0;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
    #[error("Failed to read settings file {}: {source}", .path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Mailer process configuration.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Resend API key (`None` disables sending)
    pub resend_api_key: Option<SecretString>,
    /// Resend API base URL
    pub resend_base_url: String,
    /// Store settings loaded from the settings file
    pub settings: Settings,
    /// Directory template paths are resolved against
    pub working_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
}

impl MailerConfig {
    /// Load configuration from environment variables and the settings file.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is missing or the settings
    /// file exists but cannot be read or parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_required_env("DATABASE_URL").map(SecretString::from)?;
        let resend_api_key = get_optional_env("RESEND_API_KEY").map(|key| {
            if let Err(e) = validate_secret_strength(&key, "RESEND_API_KEY") {
                tracing::warn!("RESEND_API_KEY validation warning: {e}");
            }
            SecretString::from(key)
        });
        let resend_base_url = get_env_or_default("RESEND_BASE_URL", DEFAULT_RESEND_BASE_URL);

        let working_dir = std::env::current_dir().map_err(|e| {
            ConfigError::InvalidEnvVar("current directory".to_string(), e.to_string())
        })?;
        let settings_path = get_optional_env("LARDER_CONFIG")
            .map_or_else(|| working_dir.join(DEFAULT_SETTINGS_PATH), PathBuf::from);
        let settings = Settings::load(&settings_path)?;

        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .map(|s| {
                s.parse::<f32>().map_err(|e| {
                    ConfigError::InvalidEnvVar("SENTRY_SAMPLE_RATE".to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or(1.0);

        Ok(Self {
            database_url,
            resend_api_key,
            resend_base_url,
            settings,
            working_dir,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
        })
    }
}

// =============================================================================
// Settings File
// =============================================================================

/// Store settings read from the JSON settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Resend email settings.
    pub resend: ResendSettings,
    /// Event dispatcher settings.
    pub events: EventSettings,
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults (every email disabled).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Settings file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::SettingsIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_json(&raw).map_err(|source| ConfigError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the JSON does not match the settings shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// `resend.*` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResendSettings {
    /// Sender address (`resend.from`).
    from: Option<String>,
    /// Per-event email settings (`resend.events`).
    pub events: ResendEventSettings,
}

impl ResendSettings {
    /// Build settings programmatically.
    #[must_use]
    pub fn new(from: Option<String>, order_placed: OrderPlacedSettings) -> Self {
        Self {
            from,
            events: ResendEventSettings { order_placed },
        }
    }

    /// Sender address, treating a blank value as unset.
    #[must_use]
    pub fn from(&self) -> Option<&str> {
        non_blank(self.from.as_deref())
    }
}

/// `resend.events.*` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResendEventSettings {
    /// `resend.events.order_placed`.
    pub order_placed: OrderPlacedSettings,
}

/// `resend.events.order_placed` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderPlacedSettings {
    /// Whether the confirmation email is sent at all.
    pub enabled: bool,
    /// Customer email subject.
    pub subject: Option<String>,
    /// Handlebars template, relative to the working directory.
    #[serde(rename = "templatePath", alias = "template_path")]
    pub template_path: Option<PathBuf>,
    /// Recipient of the internal new-order notice.
    #[serde(rename = "diagnosticTo", alias = "diagnostic_to")]
    pub diagnostic_to: Option<String>,
}

impl OrderPlacedSettings {
    /// Subject, treating a blank value as unset.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        non_blank(self.subject.as_deref())
    }

    /// Template path, treating an empty path as unset.
    #[must_use]
    pub fn template_path(&self) -> Option<&Path> {
        self.template_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Diagnostic recipient, treating a blank value as unset.
    #[must_use]
    pub fn diagnostic_to(&self) -> Option<&str> {
        non_blank(self.diagnostic_to.as_deref())
    }
}

/// `events.*` settings for the dispatcher loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Seconds between polls of the event table.
    #[serde(rename = "pollIntervalSecs", alias = "poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Maximum events processed per poll.
    #[serde(rename = "batchSize", alias = "batch_size")]
    pub batch_size: i64,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
            batch_size: 10,
        }
    }
}

impl EventSettings {
    /// Poll interval as a `Duration` (at least one second).
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating an empty value as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("entropy too low ({entropy:.2} bits/char)"),
        ));
    }

    Ok(())
}
