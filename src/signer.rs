use crate::{
    config::{Config, not_blank},
    error::Error,
    s3::{Region, S3},
};
use chrono::prelude::{DateTime, Utc};

/// Expiration used when a request asks for less than one second (20 minutes)
pub const DEFAULT_EXPIRE: i64 = 60 * 20;

/// Longest validity a query string signature can have (seven days)
pub const MAX_EXPIRE: i64 = 604_800;

/// What to sign: the object plus the optional overrides.
///
/// Only `key` is required, every other field falls back to a default when left empty:
/// the configured bucket, `DEFAULT_EXPIRE`, and no response header override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignRequest {
    pub bucket: Option<String>,
    pub key: String,
    pub expire: i64,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

impl SignRequest {
    #[must_use]
    pub fn new<K: ToString>(key: K) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bucket<B: ToString>(mut self, bucket: B) -> Self {
        self.bucket = Some(bucket.to_string());
        self
    }

    /// Seconds the URL stays valid, anything below 1 means `DEFAULT_EXPIRE`
    #[must_use]
    pub fn expire(mut self, seconds: i64) -> Self {
        self.expire = seconds;
        self
    }

    /// Sent back by the provider as `Content-Type` (`response-content-type`)
    #[must_use]
    pub fn content_type<T: ToString>(mut self, content_type: T) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Sent back by the provider as `Content-Disposition` (`response-content-disposition`)
    #[must_use]
    pub fn content_disposition<T: ToString>(mut self, content_disposition: T) -> Self {
        self.content_disposition = Some(content_disposition.to_string());
        self
    }
}

/// Builds presigned GET URLs.
///
/// Credentials are validated once, when the signer is created, and shared by every request
/// afterwards. The signer is immutable and can be shared between threads.
#[derive(Debug)]
pub struct Signer {
    s3: S3,
    bucket: Option<String>,
}

impl Signer {
    /// # Errors
    ///
    /// Will return `Err` if the credentials are missing or the region is invalid
    pub fn new(config: &Config) -> Result<Self, Error> {
        let credentials = config.credentials()?;
        let region = config.region()?;
        let bucket = config.default_bucket().map(ToString::to_string);

        log::debug!(
            "signer: region {region}, default bucket {}",
            bucket.as_deref().unwrap_or("<none>")
        );

        Ok(Self {
            s3: S3::new(credentials, region),
            bucket,
        })
    }

    #[must_use]
    pub fn default_bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    #[must_use]
    pub const fn region(&self) -> &Region {
        self.s3.region()
    }

    /// Presigned URL valid from now
    ///
    /// # Errors
    ///
    /// Will return `Err` if no bucket can be resolved, the key is blank, the expiration is over
    /// `MAX_EXPIRE` or the URL can't be built
    pub fn sign(&self, request: &SignRequest) -> Result<String, Error> {
        self.sign_at(request, Utc::now())
    }

    /// Presigned URL valid from `now`
    ///
    /// # Errors
    ///
    /// Same as [`Signer::sign`]
    pub fn sign_at(&self, request: &SignRequest, now: DateTime<Utc>) -> Result<String, Error> {
        let bucket = not_blank(request.bucket.as_deref())
            .or_else(|| self.default_bucket())
            .ok_or_else(|| Error::config("no bucket provided and no default bucket configured"))?;

        if request.key.trim().is_empty() {
            return Err(Error::validation("object key is blank"));
        }

        let expire = effective_expire(request.expire)?;

        let mut params = Vec::new();
        if let Some(content_type) = not_blank(request.content_type.as_deref()) {
            params.push(("response-content-type", content_type));
        }
        if let Some(content_disposition) = not_blank(request.content_disposition.as_deref()) {
            params.push(("response-content-disposition", content_disposition));
        }

        log::debug!(
            "presigning {bucket}/{} for {expire}s, overrides: {params:?}",
            request.key
        );

        let url = self
            .s3
            .presigned_url(bucket, &request.key, expire, &params, now)?;

        Ok(url.to_string())
    }
}

fn effective_expire(expire: i64) -> Result<u64, Error> {
    let expire = if expire < 1 { DEFAULT_EXPIRE } else { expire };
    if expire > MAX_EXPIRE {
        return Err(Error::validation(format!(
            "expiration of {expire} seconds is over the maximum of {MAX_EXPIRE}"
        )));
    }
    u64::try_from(expire).map_err(Error::validation)
}
