//! Call shapes for page templates.
//!
//! Templates are often rendered against documents whose fields are not filled in yet, so a
//! blank or missing key yields an empty string instead of an error. That leniency lives here
//! only; [`Signer`] keeps rejecting blank keys.

use crate::{
    config::Config,
    error::Error,
    signer::{SignRequest, Signer},
};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Access to the fields of the document a template is rendered for
pub trait FieldSource {
    /// Value of the field at `xpath`, `None` when the field is not set
    fn field_value(&self, xpath: &str) -> Option<String>;
}

impl FieldSource for BTreeMap<String, String> {
    fn field_value(&self, xpath: &str) -> Option<String> {
        self.get(xpath).cloned()
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field_value(&self, xpath: &str) -> Option<String> {
        self.get(xpath).cloned()
    }
}

#[derive(Debug)]
pub struct TemplateHelper {
    signer: Signer,
}

impl TemplateHelper {
    #[must_use]
    pub const fn new(signer: Signer) -> Self {
        Self { signer }
    }

    /// # Errors
    ///
    /// Will return `Err` if the signer can't be built from `config`
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Signer::new(config).map(Self::new)
    }

    #[must_use]
    pub const fn signer(&self) -> &Signer {
        &self.signer
    }

    /// URL for `key` in the default bucket
    ///
    /// # Errors
    ///
    /// Will return `Err` if no default bucket is configured or signing fails
    pub fn signed_url(&self, key: Option<&str>) -> Result<String, Error> {
        self.signed_url_with(None, key, 0, None, None)
    }

    /// URL for `key` in `bucket`, a blank bucket means the default one
    ///
    /// # Errors
    ///
    /// Will return `Err` if no bucket can be resolved or signing fails
    pub fn signed_url_in(&self, bucket: Option<&str>, key: Option<&str>) -> Result<String, Error> {
        self.signed_url_with(bucket, key, 0, None, None)
    }

    /// # Errors
    ///
    /// Will return `Err` if no bucket can be resolved or signing fails
    pub fn signed_url_with(
        &self,
        bucket: Option<&str>,
        key: Option<&str>,
        expire: i64,
        content_type: Option<&str>,
        content_disposition: Option<&str>,
    ) -> Result<String, Error> {
        let Some(key) = key.filter(|k| !k.trim().is_empty()) else {
            return Ok(String::new());
        };

        let mut request = SignRequest::new(key).expire(expire);
        if let Some(bucket) = bucket {
            request = request.bucket(bucket);
        }
        if let Some(content_type) = content_type {
            request = request.content_type(content_type);
        }
        if let Some(content_disposition) = content_disposition {
            request = request.content_disposition(content_disposition);
        }

        self.signer.sign(&request)
    }

    /// URL for the key stored in the document field `xpath`
    ///
    /// # Errors
    ///
    /// Will return `Err` if no default bucket is configured or signing fails
    pub fn signed_url_for_field<F: FieldSource + ?Sized>(
        &self,
        doc: &F,
        xpath: &str,
    ) -> Result<String, Error> {
        self.signed_url_for_field_in(doc, None, xpath)
    }

    /// # Errors
    ///
    /// Will return `Err` if no bucket can be resolved or signing fails
    pub fn signed_url_for_field_in<F: FieldSource + ?Sized>(
        &self,
        doc: &F,
        bucket: Option<&str>,
        xpath: &str,
    ) -> Result<String, Error> {
        let key = doc.field_value(xpath);
        if key.is_none() {
            log::debug!("field {xpath} is not set");
        }
        self.signed_url_in(bucket, key.as_deref())
    }
}

impl From<Signer> for TemplateHelper {
    fn from(signer: Signer) -> Self {
        Self::new(signer)
    }
}
