//! Cache-aside layer in front of the crawl pipeline.
//!
//! In-process TTL cache keyed by a digest of the request URL, so keys stay
//! small regardless of URL length. Only the handler decides what is
//! cache-eligible; this module just stores and retrieves.

use moka::future::Cache;
use std::time::Duration;

use crate::entities::CrawlResult;

#[derive(Clone)]
pub struct ResultCache {
    cache: Cache<String, CrawlResult>,
}

impl ResultCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get(&self, url: &str) -> Option<CrawlResult> {
        self.cache.get(&Self::key(url)).await
    }

    pub async fn insert(&self, url: &str, result: CrawlResult) {
        self.cache.insert(Self::key(url), result).await;
    }

    /// The cache lives in-process, so reachability cannot fail; reported for
    /// the health endpoint's cache-connectivity contract.
    pub fn is_healthy(&self) -> bool {
        true
    }

    fn key(url: &str) -> String {
        format!("crawl:{:x}", md5::compute(url.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PageType;

    fn sample_result(url: &str) -> CrawlResult {
        CrawlResult {
            url: url.to_string(),
            final_url: url.to_string(),
            status_code: 200,
            title: Some("Cached page".to_string()),
            page_type: PageType::BlogPost,
            ..CrawlResult::default()
        }
    }

    #[tokio::test]
    async fn roundtrip() {
        let cache = ResultCache::new(10, Duration::from_secs(60));
        let url = "https://example.com/blog/post";
        assert!(cache.get(url).await.is_none());

        cache.insert(url, sample_result(url)).await;
        let cached = cache.get(url).await.expect("cached result");
        assert_eq!(cached.title.as_deref(), Some("Cached page"));
        assert_eq!(cached.page_type, PageType::BlogPost);
    }

    #[tokio::test]
    async fn distinct_urls_do_not_collide() {
        let cache = ResultCache::new(10, Duration::from_secs(60));
        cache
            .insert("https://example.com/a", sample_result("https://example.com/a"))
            .await;
        assert!(cache.get("https://example.com/b").await.is_none());
    }

    #[test]
    fn keys_are_stable_digests() {
        let key = ResultCache::key("https://example.com/");
        assert_eq!(key, ResultCache::key("https://example.com/"));
        assert!(key.starts_with("crawl:"));
        assert_ne!(key, ResultCache::key("https://example.org/"));
    }
}
