use clap::{
    Arg, ColorChoice, Command,
    builder::ValueParser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::{fs, path::Path, path::PathBuf};

pub fn validator_is_file() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<PathBuf, String> {
        if let Ok(metadata) = fs::metadata(s) {
            if metadata.is_file() {
                return Ok(PathBuf::from(s));
            }
        }

        Err(format!("Invalid file path or file does not exist: '{s}'"))
    })
}

pub fn new(config_path: &Path) -> Command {
    // get config file path (default: ~/.config/s3tmpurl/config.yml)
    let config_file_path = config_path.join("config.yml");

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("s3tmpurl")
        .about("Print a presigned download URL for an object")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("config")
            .default_value(config_file_path.into_os_string())
            .env("S3TMPURL_CONFIG")
            .long("config")
            .num_args(1)
            .short('c')
            .value_parser(validator_is_file())
            .value_name("config.yml")
        )
        .arg(
            Arg::new("key")
            .help("Object key, example: docs/report.pdf")
            .required(true)
            .num_args(1)
        )
        .arg(
            Arg::new("bucket")
            .help("Bucket name, defaults to the bucket in the config file")
            .env("S3TMPURL_BUCKET")
            .long("bucket")
            .short('b')
            .num_args(1)
        )
        .arg(
            Arg::new("expire")
            .help("Time period in seconds, max value 604800 (seven days), 0 for the default of 1200")
            .long("expire")
            .short('e')
            .default_value("0")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64))
            .num_args(1)
        )
        .arg(
            Arg::new("content-type")
            .help("Override the Content-Type header of the response")
            .long("content-type")
            .num_args(1)
        )
        .arg(
            Arg::new("content-disposition")
            .help("Override the Content-Disposition header of the response, example: \"attachment; filename=report.pdf\"")
            .long("content-disposition")
            .num_args(1)
        )
        .arg(
            Arg::new("verbose")
            .help("Verbosity level")
            .short('v')
            .long("verbose")
            .action(clap::ArgAction::Count)
        )
}
