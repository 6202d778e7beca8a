pub mod fetch;
pub mod report;

pub use fetch::http::fetch_url;
pub use fetch::{FailureKind, FetchFailure, FetchOutcome};
