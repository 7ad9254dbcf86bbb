//! robots.txt compliance check.
//!
//! Fail-open: an unreachable or unparseable robots.txt never blocks a crawl.

use texting_robots::{Robot, get_robots_url};
use tracing::debug;

use crate::fetcher::client;

/// Product token matched against robots.txt user-agent groups.
const ROBOTS_AGENT: &str = "PageLensBot";

/// Whether robots.txt allows us to crawl `url`.
pub async fn is_allowed(url: &str) -> bool {
    let Ok(robots_url) = get_robots_url(url) else {
        return true;
    };

    let response = match client::get_client().get(&robots_url).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!("robots.txt unreachable for {url}, assuming allowed: {err}");
            return true;
        }
    };
    if !response.status().is_success() {
        return true;
    }
    let robots_txt = response.text().await.unwrap_or_default();

    match Robot::new(ROBOTS_AGENT, robots_txt.as_bytes()) {
        Ok(robot) => robot.allowed(url),
        Err(err) => {
            debug!("robots.txt unparseable for {url}, assuming allowed: {err}");
            true
        }
    }
}
