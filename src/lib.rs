//! Time-limited, presigned download URLs for objects in S3 buckets.
//!
//! ```no_run
//! use s3tmpurl::{Config, TemplateHelper};
//!
//! # fn main() -> Result<(), s3tmpurl::Error> {
//! let config = Config::new("config.yml")?;
//! let helper = TemplateHelper::from_config(&config)?;
//! let url = helper.signed_url(Some("report.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod helper;
pub mod s3;
pub mod signer;

pub use self::{
    config::Config,
    error::Error,
    helper::{FieldSource, TemplateHelper},
    signer::{DEFAULT_EXPIRE, MAX_EXPIRE, SignRequest, Signer},
};
