pub mod credentials;
pub mod region;
pub mod signature;
pub mod tools;
pub use self::{credentials::Credentials, region::Region, signature::Signature};

use crate::error::Error;
use chrono::prelude::{DateTime, Utc};
use http::Method;
use std::fmt;
use url::Url;

#[derive(Debug)]
pub struct S3 {
    // AWS Credentials
    credentials: Credentials,
    // AWS Region
    region: Region,
}

impl S3 {
    #[must_use]
    pub const fn new(credentials: Credentials, region: Region) -> Self {
        Self {
            credentials,
            region,
        }
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Path-style URL of an object, `<endpoint>/<bucket>/<key>`, with `params` as query
    ///
    /// # Errors
    ///
    /// Will return `Err` if the key has `.` or `..` segments or the resulting url can't be parsed
    pub fn object_url(&self, bucket: &str, key: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        if tools::has_dot_segment(key) {
            return Err(Error::validation(format!(
                "object key has a '.' or '..' segment: {key}"
            )));
        }

        let mut url = Url::parse(&format!(
            "{}/{}/{}",
            self.region.base_url(),
            tools::uri_encode(bucket),
            tools::encode_key(key)
        ))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Presigned GET url for `bucket/key`, valid `expire` seconds from `now`
    ///
    /// # Errors
    ///
    /// Will return `Err` if the url can't be built or signed
    pub fn presigned_url(
        &self,
        bucket: &str,
        key: &str,
        expire: u64,
        params: &[(&str, &str)],
        now: DateTime<Utc>,
    ) -> Result<Url, Error> {
        let url = self.object_url(bucket, key, params)?;
        Signature::new(self, Method::GET)
            .at(now)
            .presigned_url(&url, expire)
    }
}

impl fmt::Display for S3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "region: {}\naccess key: {}",
            self.region,
            self.credentials.aws_access_key_id()
        )
    }
}
