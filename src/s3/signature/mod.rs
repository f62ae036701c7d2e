//!  S3 signature v4, query string authentication
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-query-string-auth.html>

use crate::{
    error::Error,
    s3::{
        S3,
        tools::{sha256_digest, sha256_hmac, uri_encode, write_hex_bytes},
    },
};
use chrono::prelude::{DateTime, Utc};
use http::Method;
use ring::hmac;
use secrecy::ExposeSecret;
use url::Url;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

// Only the host header is signed, the client fetching the URL sends nothing else we control
const SIGNED_HEADERS: &str = "host";

// The payload of a presigned GET is never known in advance
const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

#[derive(Debug)]
pub struct Signature<'a> {
    // S3
    s3: &'a S3,
    // The HTTPRequestMethod
    pub http_method: Method,
    // current date & time
    datetime: DateTime<Utc>,
}

impl<'a> Signature<'a> {
    #[must_use]
    pub fn new(s3: &'a S3, method: Method) -> Self {
        Self {
            s3,
            http_method: method,
            datetime: Utc::now(),
        }
    }

    /// Sign as of `datetime` instead of now
    #[must_use]
    pub fn at(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = datetime;
        self
    }

    /// Returns `url` with the `X-Amz-*` authentication parameters and the signature added to
    /// its query. Parameters already present in `url` (`response-content-type`, ...) are signed
    /// too.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the url has no host or the signed url can't be parsed
    pub fn presigned_url(&self, url: &Url, expire: u64) -> Result<Url, Error> {
        let current_date = self.datetime.format("%Y%m%d").to_string();
        let current_datetime = self.datetime.format("%Y%m%dT%H%M%SZ").to_string();
        let region = self.s3.region().name();

        // <date>/<aws-region>/s3/aws4_request
        let scope = format!("{current_date}/{region}/s3/aws4_request");

        let mut params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        params.push(("X-Amz-Algorithm".to_string(), ALGORITHM.to_string()));
        params.push((
            "X-Amz-Credential".to_string(),
            format!("{}/{scope}", self.s3.credentials().aws_access_key_id()),
        ));
        params.push(("X-Amz-Date".to_string(), current_datetime.clone()));
        params.push(("X-Amz-Expires".to_string(), expire.to_string()));
        params.push(("X-Amz-SignedHeaders".to_string(), SIGNED_HEADERS.to_string()));

        let canonical_query_string = canonical_query_string(&params);

        // 1. Create a canonical request
        //
        //     CanonicalRequest =
        //         HTTPRequestMethod + '\n' +
        //         CanonicalURI + '\n' +
        //         CanonicalQueryString + '\n' +
        //         CanonicalHeaders + '\n' +
        //         SignedHeaders + '\n' +
        //         UNSIGNED-PAYLOAD
        let canonical_request = format!(
            "{}\n{}\n{}\nhost:{}\n\n{}\n{}",
            self.http_method,
            url.path(),
            canonical_query_string,
            host(url)?,
            SIGNED_HEADERS,
            UNSIGNED_PAYLOAD
        );

        log::debug!("canonical request:\n{canonical_request}");

        // 2. Create a string to sign
        let canonical_request_hash = write_hex_bytes(sha256_digest(&canonical_request).as_ref());
        let string_to_sign = string_to_sign(&current_datetime, &scope, &canonical_request_hash);

        // 3. Calculate the signature
        let signing_key = signature_key(
            self.s3.credentials().aws_secret_access_key().expose_secret(),
            &current_date,
            region,
            "s3",
        );
        let signature = sha256_hmac(signing_key.as_ref(), string_to_sign.as_bytes());

        // 4. Add the signature to the query string
        let mut signed = url.clone();
        signed.set_query(Some(&format!(
            "{canonical_query_string}&X-Amz-Signature={}",
            write_hex_bytes(signature.as_ref())
        )));

        Ok(signed)
    }
}

// The host header value, the port is only included when it isn't the default one for the scheme
fn host(url: &Url) -> Result<String, Error> {
    let host = url.host_str().ok_or(url::ParseError::EmptyHost)?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

// CanonicalQueryString specifies the URI-encoded query string parameters. You URI-encode name and
// values individually. You must also sort the parameters in the canonical query string
// alphabetically by key name. The sorting occurs after encoding.
#[must_use]
pub fn canonical_query_string(params: &[(String, String)]) -> String {
    let mut pairs = params
        .iter()
        .map(|(key, value)| format!("{}={}", uri_encode(key), uri_encode(value)))
        .collect::<Vec<String>>();
    pairs.sort();
    pairs.join("&")
}

// Create a string to sign for Signature Version 4
// https://docs.aws.amazon.com/general/latest/gr/sigv4-create-string-to-sign.html
#[must_use]
pub fn string_to_sign(timestamp: &str, scope: &str, hashed_canonical_request: &str) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{scope}\n{hashed_canonical_request}")
}

#[must_use]
pub fn signature_key(secret_access_key: &str, date: &str, region: &str, service: &str) -> hmac::Tag {
    let k_date = sha256_hmac(
        format!("AWS4{secret_access_key}").as_bytes(),
        date.as_bytes(),
    );
    let k_region = sha256_hmac(k_date.as_ref(), region.as_bytes());
    let k_service = sha256_hmac(k_region.as_ref(), service.as_bytes());
    sha256_hmac(k_service.as_ref(), b"aws4_request")
}
