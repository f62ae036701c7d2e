use colored::Colorize;
use s3tmpurl::cli::start;
use std::process;

fn main() {
    let result = start().and_then(|(signer, request)| Ok(signer.sign(&request)?));

    match result {
        Ok(url) => println!("{url}"),
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            process::exit(1);
        }
    }
}
