extern crate env_logger;
extern crate pare;
extern crate serde_json;

pub mod options;

use clap::Parser;
use options::Cli;
use pare::configuration::Configuration;
use pare::page::Page;
use pare::tokio;
use pare::utils::log;
use pare_transformations::transformation::content::{reduce_content, ReduceMode};
use std::process::ExitCode;
use string_concat::string_concat;
use string_concat::string_concat_impl;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        use env_logger::Env;
        let env = Env::default()
            .filter_or("RUST_LOG", "info")
            .write_style_or("RUST_LOG_STYLE", "always");

        env_logger::init_from_env(env);
    }

    let url = if cli.url.starts_with("http") {
        cli.url
    } else {
        string_concat!("https://", cli.url)
    };

    let mut configuration = Configuration::new();

    match cli.agent {
        Some(ref agent) => {
            configuration.with_user_agent(Some(agent));
        }
        _ => (),
    }

    let page = Page::new(&url, &configuration).await;

    if page.is_empty() {
        eprintln!("Failed to fetch content for {}.", url);
        return ExitCode::FAILURE;
    }

    let mode = if cli.strip_all_tags {
        ReduceMode::StripAllTags
    } else {
        ReduceMode::PreserveContent
    };

    let (reduced, stats) = reduce_content(&page, mode);

    match tokio::fs::write(&cli.output, &reduced).await {
        Ok(_) => {
            log("Stored", &cli.output);
        }
        Err(e) => {
            eprintln!("Unable to write {}: {}", &cli.output, e);
            return ExitCode::FAILURE;
        }
    }

    if cli.stats {
        match serde_json::to_string_pretty(&stats) {
            Ok(j) => println!("{}", j),
            Err(e) => eprintln!("{:?}", e),
        }
    }

    ExitCode::SUCCESS
}
