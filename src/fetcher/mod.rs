pub mod client;
pub mod decode;
pub mod errors;
pub mod robots;

pub use client::{PageResponse, fetch, get_client};
pub use errors::FetchError;

/// Fetch one page, optionally gated on robots.txt.
pub async fn fetch_page(url: &str, respect_robots: bool) -> Result<PageResponse, FetchError> {
    if respect_robots && !robots::is_allowed(url).await {
        return Err(FetchError::RobotsDisallowed(url.to_string()));
    }
    client::fetch(url).await
}
