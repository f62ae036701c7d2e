//! Common test helpers for e2e integration tests
//!
//! - `MinioContext`: Manages the `MinIO` test environment (external or container-based)
//! - Config helpers: Create temporary s3tmpurl config files and signers
//! - Binary helpers: Run the s3tmpurl binary with a config

#![allow(dead_code, clippy::expect_used, clippy::missing_panics_doc)]

mod helpers;

pub use helpers::minio::{MINIO_ROOT_PASSWORD, MINIO_ROOT_USER, MinioContainer};

use s3tmpurl::{Config, TemplateHelper};
use secrecy::SecretString;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

/// Create a temporary config.yml file for s3tmpurl
pub fn create_config_file(
    endpoint: &str,
    access_key: &str,
    secret_key: &str,
    bucket: Option<&str>,
) -> NamedTempFile {
    let mut config_content = format!(
        r"---
endpoint: {endpoint}
access_key: {access_key}
secret_key: {secret_key}
"
    );

    if let Some(bucket) = bucket {
        config_content.push_str(&format!("bucket: {bucket}\n"));
    }

    let mut config_file = NamedTempFile::new().expect("Failed to create temp config file");
    config_file
        .write_all(config_content.as_bytes())
        .expect("Failed to write config");
    config_file.flush().expect("Failed to flush config");
    config_file
}

/// `MinIO` test context - either external or testcontainer-based
pub enum MinioContext {
    External {
        endpoint: String,
        access_key: String,
        secret_key: String,
    },
    Container(Box<MinioContainer>),
}

impl MinioContext {
    /// Get or start `MinIO` - uses external if `MINIO_ENDPOINT` is set, otherwise starts container
    pub async fn get_or_start() -> Self {
        if let Ok(endpoint) = env::var("MINIO_ENDPOINT") {
            let access_key =
                env::var("MINIO_ACCESS_KEY").unwrap_or_else(|_| MINIO_ROOT_USER.to_string());
            let secret_key =
                env::var("MINIO_SECRET_KEY").unwrap_or_else(|_| MINIO_ROOT_PASSWORD.to_string());

            println!("Using external MinIO at {endpoint}");

            Self::External {
                endpoint,
                access_key,
                secret_key,
            }
        } else {
            println!("Starting MinIO testcontainer");
            let container = MinioContainer::start().await;
            container.wait_for_ready().await.expect("MinIO ready");
            Self::Container(Box::new(container))
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::External { endpoint, .. } => endpoint,
            Self::Container(c) => c.endpoint(),
        }
    }

    pub fn access_key(&self) -> &str {
        match self {
            Self::External { access_key, .. } => access_key,
            Self::Container(c) => &c.access_key,
        }
    }

    pub fn secret_key(&self) -> &str {
        match self {
            Self::External { secret_key, .. } => secret_key,
            Self::Container(c) => &c.secret_key,
        }
    }

    pub fn config(&self, bucket: Option<&str>) -> Config {
        Config {
            access_key: self.access_key().to_string(),
            secret_key: Some(SecretString::new(self.secret_key().into())),
            bucket: bucket.map(ToString::to_string),
            region: None,
            endpoint: Some(self.endpoint().to_string()),
        }
    }

    pub fn template_helper(&self, bucket: Option<&str>) -> TemplateHelper {
        TemplateHelper::from_config(&self.config(bucket)).expect("valid MinIO config")
    }
}

/// Get the path to the s3tmpurl binary (builds it if needed)
pub fn get_s3tmpurl_binary() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("s3tmpurl");

    if !path.exists() {
        let output = Command::new("cargo")
            .args(["build", "--bin", "s3tmpurl"])
            .output()
            .expect("Failed to build s3tmpurl binary");

        assert!(
            output.status.success(),
            "Failed to build s3tmpurl: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    path
}

/// Run s3tmpurl with a config pointing at `MinIO`
pub fn run_s3tmpurl_with_minio(
    minio: &MinioContext,
    bucket: Option<&str>,
    args: &[&str],
) -> std::process::Output {
    let config_file = create_config_file(
        minio.endpoint(),
        minio.access_key(),
        minio.secret_key(),
        bucket,
    );
    let config_path = config_file.path().to_str().expect("Invalid config path");

    let output = Command::new(get_s3tmpurl_binary())
        .arg("--config")
        .arg(config_path)
        .args(args)
        .output()
        .expect("Failed to execute s3tmpurl");

    // Keep config_file alive until command completes
    drop(config_file);

    output
}

/// Run s3tmpurl without config (for --version, --help, etc.)
pub fn run_s3tmpurl(args: &[&str]) -> std::process::Output {
    Command::new(get_s3tmpurl_binary())
        .args(args)
        .output()
        .expect("Failed to execute s3tmpurl")
}
