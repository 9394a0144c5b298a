use std::time::Duration;

use clap::Parser;
use hibp_range_check::prompt::{PASSWORD_PROMPT, read_password};
use hibp_range_check::{ClientConfig, DEFAULT_API_URL, Error, RangeClient, check_password, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hibp-range-check")]
#[command(about = "Check whether a password appears in the Have I Been Pwned breach database")]
struct Args {
    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Base URL of the range endpoint; the hash prefix is appended as a path segment
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
}

async fn run(args: Args) -> Result<(), Error> {
    let config = ClientConfig { api_url: args.api_url, timeout: Duration::from_secs(args.timeout) };
    let client = RangeClient::new(&config)?;

    let password = read_password(PASSWORD_PROMPT)?;
    let count = check_password(&client, &password).await?;
    drop(password);

    info!(count, "lookup complete");
    println!("{}", report::render(count));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{}", report::render_error(&err));
        std::process::exit(1);
    }
}
