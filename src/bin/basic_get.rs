use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;
use webfetch::{FailureKind, fetch_url, report};

const URL: &str = "https://github.com/ArminAhmadkhaniha";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("--- 1. Sending the GET request ---");
    println!("Fetching {URL} ...");

    match fetch_url(URL, None).await {
        Ok(outcome) => {
            println!("--- 2. Checking the status code ---");
            println!("Status code: {}", outcome.status);
            if let Some(line) = report::status_line(outcome.status) {
                println!("{line}");
            }

            println!("--- 3. Reading the body ---");
            println!(
                "Received {} bytes in {:?}",
                outcome.body.len(),
                outcome.elapsed
            );
            println!("Preview of page content:\n{}...", report::preview(&outcome.body));
        }
        Err(failure) if failure.kind == FailureKind::Read => {
            // A response arrived and only the body was lost; log and move on.
            error!(%failure, "body read failed");
        }
        Err(failure) => {
            println!("Could not connect: {failure}");
            process::exit(1);
        }
    }

    Ok(())
}
