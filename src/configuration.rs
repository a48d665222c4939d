use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

use crate::contact_client::ContactFormClient;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;

/// App-wide configuration
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact_form: ContactFormSettings,
}

/// Where the relay listens.
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Settings for the email API the relay forwards submissions through.
#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    /// Inbox that receives every contact notification.
    pub recipient_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn recipient(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.recipient_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    /// Builds an `EmailClient` from these settings.
    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        let base_url = Url::parse(&self.base_url)?;
        let sender = self.sender().map_err(anyhow::Error::msg)?;
        let client = EmailClient::new(
            base_url,
            sender,
            self.authorization_token.clone(),
            self.timeout(),
        )?;
        Ok(client)
    }
}

/// Settings for the client side of the form.
#[derive(Deserialize, Clone)]
pub struct ContactFormSettings {
    /// Where submissions are posted.
    pub endpoint: String,
}

impl ContactFormSettings {
    pub fn client(&self) -> Result<ContactFormClient, url::ParseError> {
        Ok(ContactFormClient::new(Url::parse(&self.endpoint)?))
    }
}

/// The environment the app runs in. Picks which configuration file is layered on
/// top of `base`.
#[derive(Debug)]
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
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Reads app configuration from the `configuration` directory.
///
/// `base.yaml` is always read, then the file named by `APP_ENVIRONMENT` (defaults
/// to `local`). Environment variables prefixed with `APP_` win over both, with `__`
/// separating nested keys, e.g. `APP_APPLICATION__PORT=5001`.
///
/// Returns an error if any file is missing or malformed, or if `APP_ENVIRONMENT`
/// names an unknown environment.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let environment = Environment::try_from(
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into()),
    )
    .map_err(config::ConfigError::Message)?;

    config::Config::builder()
        .add_source(config::File::with_name("configuration/base"))
        .add_source(config::File::with_name(&format!(
            "configuration/{}",
            environment.as_str()
        )))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
