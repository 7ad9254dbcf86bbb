//! Top-level crawl pipeline: fetch → parse → classify/extract → assemble.
//!
//! `crawl` never returns an error. A robots disallow or fetch failure comes
//! back as a `CrawlResult` with empty metadata and a populated error string;
//! the caller decides how that maps onto the HTTP boundary.

use tracing::{error, info, warn};

use crate::classifier;
use crate::entities::CrawlResult;
use crate::fetcher::{self, FetchError};
use crate::parser;
use crate::topics;

/// Body text is truncated to this many characters for storage; the word
/// count is computed over the untruncated text first.
const STORED_BODY_CHARS: usize = 2000;

/// Fetch, parse, and extract metadata from any URL.
pub async fn crawl(url: &str, respect_robots: bool) -> CrawlResult {
    let response = match fetcher::fetch_page(url, respect_robots).await {
        Ok(response) => response,
        Err(err @ FetchError::RobotsDisallowed(_)) => {
            warn!("robots disallow: {url}");
            return CrawlResult::failed(url, 403, err.to_string());
        }
        Err(err) => {
            error!("fetch failed for {url}: {err}");
            return CrawlResult::failed(url, 0, err.to_string());
        }
    };

    let record = parser::parse_html(&response.body);

    // both are pure reads over the record; order does not matter
    let page_type = classifier::classify(&record, url);
    let topics = topics::extract_topics(&record);

    let word_count = record.body_text.split_whitespace().count();
    let body_text = if record.body_text.is_empty() {
        None
    } else {
        Some(truncate_chars(&record.body_text, STORED_BODY_CHARS))
    };

    info!(
        "crawled {url}: status={} type={} topics={}",
        response.status.as_u16(),
        page_type.as_str(),
        topics.len()
    );

    CrawlResult {
        url: url.to_string(),
        final_url: response.url_final.to_string(),
        status_code: response.status.as_u16(),
        title: record.title,
        description: record.description,
        keywords: record.keywords,
        og_title: record.og_title,
        og_description: record.og_description,
        og_image: record.og_image,
        og_type: record.og_type,
        twitter_title: record.twitter_title,
        twitter_description: record.twitter_description,
        canonical_url: record.canonical_url,
        language: record.language,
        author: record.author,
        robots: record.robots,
        h1_tags: record.h1_tags,
        h2_tags: record.h2_tags,
        body_text,
        topics,
        page_type,
        word_count,
        error: None,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
