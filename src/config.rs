use {crate::adapters::stripe::StripeSettings, std::env, thiserror::Error};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the service reads from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub stripe: StripeSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            stripe: StripeSettings {
                secret_key: required("STRIPE_SECRET")?,
                endpoint_secret: required("STRIPE_ENDPOINT_SECRET")?,
                success_url: required("STRIPE_SUCCESS_URL")?,
                cancel_url: required("STRIPE_CANCEL_URL")?,
            },
        })
    }
}
