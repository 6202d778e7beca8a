use std::time::Duration;

use tracing_subscriber::EnvFilter;
use webfetch::{FailureKind, fetch_url};

// httpbin delays its reply by the number of seconds in the path, so with a
// two second deadline the request is guaranteed to be cut off.
const SLOW_URL: &str = "https://httpbin.org/delay/5";
const GIVE_UP_AFTER: Duration = Duration::from_secs(2);

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("--- Fetching with a deadline ---");
    println!("Attempting to fetch {SLOW_URL} ...");
    println!("(I will give up in {GIVE_UP_AFTER:?})");

    match fetch_url(SLOW_URL, Some(GIVE_UP_AFTER)).await {
        Ok(outcome) => {
            println!();
            println!("Success!");
            println!("Status code: {}, took {:?}", outcome.status, outcome.elapsed);
        }
        Err(failure) if failure.kind == FailureKind::Timeout => {
            println!();
            println!("Result: request timed out (as expected!)");
            println!("Time waited: {:?}", failure.elapsed);
            println!("Error details: {}", failure.detail);
        }
        Err(failure) => {
            println!();
            println!("Result: request failed");
            println!("Time waited: {:?}", failure.elapsed);
            println!("Error details: {}", failure.detail);
        }
    }

    Ok(())
}
