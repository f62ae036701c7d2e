use crate::{
    cli::commands,
    config::Config,
    signer::{SignRequest, Signer},
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn get_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().map_or_else(|| PathBuf::from("/tmp"), |h| h);

    let config_path = Path::new(&home_dir).join(".config").join("s3tmpurl");
    fs::create_dir_all(&config_path)
        .context(format!("unable to create: {}", &config_path.display()))?;

    Ok(config_path)
}

/// # Errors
/// Will return an error if the config file can't be loaded or the signer can't be created
pub fn start() -> Result<(Signer, SignRequest)> {
    let config_path = get_config_path()?;

    // start the command line interface
    let matches = commands::new(&config_path).get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbose").copied().unwrap_or(0) {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(verbosity_level)
        .init();

    log::info!("config path: {}", config_path.display());

    from_matches(&matches)
}

fn from_matches(matches: &ArgMatches) -> Result<(Signer, SignRequest)> {
    let config_file = matches
        .get_one::<PathBuf>("config")
        .context("no config file found")?;

    // load the config file
    let config = Config::new(config_file)
        .with_context(|| format!("unable to load config file {}", config_file.display()))?;

    log::debug!("config: {config:#?}");

    let signer = Signer::new(&config)?;

    let key = matches
        .get_one::<String>("key")
        .context("object key missing")?;

    let mut request =
        SignRequest::new(key).expire(matches.get_one::<i64>("expire").copied().unwrap_or(0));

    if let Some(bucket) = matches.get_one::<String>("bucket") {
        request = request.bucket(bucket);
    }
    if let Some(content_type) = matches.get_one::<String>("content-type") {
        request = request.content_type(content_type);
    }
    if let Some(content_disposition) = matches.get_one::<String>("content-disposition") {
        request = request.content_disposition(content_disposition);
    }

    log::info!("request: {request:?}");

    Ok((signer, request))
}
