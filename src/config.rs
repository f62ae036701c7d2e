use crate::{
    error::Error,
    s3::{Credentials, Region},
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::{env, fs::File, path::Path};

/// Prefix of the names under which the settings are read from a host key/value store
pub const CONF_KEY_PREFIX: &str = "s3tmpurl";

pub const CONF_KEY_ACCESS_KEY: &str = "s3tmpurl.s3.key";
pub const CONF_KEY_SECRET_KEY: &str = "s3tmpurl.s3.secret";
pub const CONF_KEY_BUCKET: &str = "s3tmpurl.s3.bucket";
pub const CONF_KEY_REGION: &str = "s3tmpurl.s3.region";
pub const CONF_KEY_ENDPOINT: &str = "s3tmpurl.s3.endpoint";

// signing region used for custom endpoints when none is configured
const CUSTOM_ENDPOINT_REGION: &str = "us-east-1";

/// Settings the signer is built from.
///
/// ```yaml
/// ---
/// access_key: XXX
/// secret_key: YYY
/// bucket: assets
/// region: eu-central-1
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: Option<SecretString>,
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

impl Config {
    /// Load the configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file can't be opened or parsed
    pub fn new<P: AsRef<Path>>(config_path: P) -> Result<Self, Error> {
        let file = File::open(config_path)?;

        serde_yaml_ng::from_reader(file)
            .map_err(|e| Error::config(format!("unable to parse config file: {e}")))
    }

    /// Build the configuration from a key/value store, `lookup` receives the `CONF_KEY_*` names
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_prefixed(CONF_KEY_PREFIX, lookup)
    }

    /// Same as [`Config::from_lookup`] for a store that keeps the settings under another
    /// prefix, `lookup` receives `<prefix>.s3.{key,secret,bucket,region,endpoint}`
    #[must_use]
    pub fn from_lookup_prefixed<F>(prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{prefix}.s3.{name}"));

        Self {
            access_key: get("key").unwrap_or_default(),
            secret_key: get("secret").map(|s| SecretString::new(s.into())),
            bucket: get("bucket"),
            region: get("region"),
            endpoint: get("endpoint"),
        }
    }

    /// Credentials from the configuration, blank values fall back to `AWS_ACCESS_KEY_ID` and
    /// `AWS_SECRET_ACCESS_KEY`
    ///
    /// # Errors
    ///
    /// Will return `Err` if the access key or the secret key is missing
    pub fn credentials(&self) -> Result<Credentials, Error> {
        let access_key = not_blank(Some(self.access_key.as_str()))
            .map(ToString::to_string)
            .or_else(|| env::var("AWS_ACCESS_KEY_ID").ok().filter(|v| !v.trim().is_empty()));

        let secret_key = self
            .secret_key
            .as_ref()
            .filter(|s| !s.expose_secret().trim().is_empty())
            .map(|s| SecretString::new(s.expose_secret().into()))
            .or_else(|| {
                env::var("AWS_SECRET_ACCESS_KEY")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| SecretString::new(v.into()))
            });

        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Ok(Credentials::new(&access_key, &secret_key)),
            _ => Err(Error::config(format!(
                "access key ({CONF_KEY_ACCESS_KEY}) and/or secret key ({CONF_KEY_SECRET_KEY}) are missing or invalid"
            ))),
        }
    }

    /// Region to sign for
    ///
    /// # Errors
    ///
    /// Will return `Err` if no endpoint is set and the region is not a known AWS region
    pub fn region(&self) -> Result<Region, Error> {
        let region = not_blank(self.region.as_deref());

        if let Some(endpoint) = not_blank(self.endpoint.as_deref()) {
            return Ok(Region::Custom {
                name: region.unwrap_or(CUSTOM_ENDPOINT_REGION).to_string(),
                endpoint: endpoint.to_string(),
            });
        }

        match region {
            Some(r) => r.parse::<Region>().map_err(Error::config),
            None => Ok(Region::default()),
        }
    }

    /// The bucket used when a request doesn't name one
    #[must_use]
    pub fn default_bucket(&self) -> Option<&str> {
        not_blank(self.bucket.as_deref())
    }
}

pub(crate) fn not_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
