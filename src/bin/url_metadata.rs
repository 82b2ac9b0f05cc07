//! Command-line front end: scrape each URL and print its JSON record.
//!
//! Logs go to stderr and are controlled by `RUST_LOG`, e.g.
//! `RUST_LOG=url_metadata_scraper=debug url-metadata example.com`.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url_metadata_scraper::{scrape_with_options, Options};

/// Fetch pages and print link-preview metadata as JSON
#[derive(Parser)]
#[command(name = "url-metadata")]
#[command(about = "Fetch pages and print link-preview metadata as JSON", long_about = None)]
struct Cli {
    /// URLs to scrape, one after another (a missing scheme defaults to http)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Pretty-print each record
    #[arg(short, long)]
    pretty: bool,

    /// Override the user agent sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Page timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Image validations allowed in flight at once
    #[arg(short, long, default_value_t = 4)]
    concurrency: usize,

    /// Maximum number of images in each record
    #[arg(long, default_value_t = 10)]
    max_images: usize,
}

impl Cli {
    fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            user_agent: self.user_agent.clone().unwrap_or_else(|| defaults.user_agent.clone()),
            page_timeout: Duration::from_secs(self.timeout),
            image_validation_concurrency: self.concurrency,
            max_image_urls: self.max_images,
            ..defaults
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    for url in &cli.urls {
        let record = scrape_with_options(url, &options);
        if cli.pretty {
            println!("{}", record.to_json_pretty());
        } else {
            println!("{}", record.to_json());
        }
    }
}
