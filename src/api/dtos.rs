use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::CrawlResult;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CrawlRequest {
    pub url: String,
    /// Set false only for testing/demo purposes.
    #[serde(default = "default_respect_robots")]
    pub respect_robots: bool,
}

fn default_respect_robots() -> bool {
    true
}

impl CrawlRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }
        if self.url.len() > 2048 {
            return Err("URL too long".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CrawlResponse {
    #[serde(flatten)]
    pub result: CrawlResult,
    /// Whether this result was served from the cache.
    pub cached: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        for url in ["http://example.com", "https://example.com/page"] {
            let request = CrawlRequest {
                url: url.to_string(),
                respect_robots: true,
            };
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn rejects_other_schemes() {
        for url in ["ftp://example.com", "example.com", "file:///etc/passwd", ""] {
            let request = CrawlRequest {
                url: url.to_string(),
                respect_robots: true,
            };
            assert!(request.validate().is_err(), "{url} should be rejected");
        }
    }

    #[test]
    fn rejects_oversized_urls() {
        let request = CrawlRequest {
            url: format!("https://example.com/{}", "a".repeat(2048)),
            respect_robots: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn respect_robots_defaults_to_true() {
        let request: CrawlRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(request.respect_robots);
    }

    #[test]
    fn response_flattens_result_fields() {
        let response = CrawlResponse {
            result: CrawlResult {
                url: "https://example.com".to_string(),
                status_code: 200,
                ..CrawlResult::default()
            },
            cached: true,
        };
        let value: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["cached"], true);
    }
}
