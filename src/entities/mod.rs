use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse page classification. Exactly one label per page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Product,
    NewsArticle,
    BlogPost,
    Homepage,
    #[default]
    Other,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::NewsArticle => "news_article",
            Self::BlogPost => "blog_post",
            Self::Homepage => "homepage",
            Self::Other => "other",
        }
    }
}

/// Everything extracted and derived from a single crawl request.
///
/// Constructed once per request, immutable afterwards; either cached or
/// returned directly. `error` is populated only on failure, in which case the
/// metadata fields stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrawlResult {
    pub url: String,
    pub final_url: String,
    pub status_code: u16,

    // standard meta tags
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,

    // open graph / social tags
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,

    // twitter card
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,

    // page basics
    pub canonical_url: Option<String>,
    pub language: Option<String>,
    pub author: Option<String>,
    pub robots: Option<String>,

    // extracted content
    #[serde(default)]
    pub h1_tags: Vec<String>,
    #[serde(default)]
    pub h2_tags: Vec<String>,
    /// Cleaned plaintext of the page body, truncated for storage.
    pub body_text: Option<String>,

    // derived
    #[serde(default)]
    pub topics: Vec<String>,
    pub page_type: PageType,
    pub word_count: usize,

    pub error: Option<String>,
}

impl CrawlResult {
    /// Result for a crawl that produced no page: the metadata fields stay
    /// empty and `error` carries the reason.
    pub fn failed(url: &str, status_code: u16, error: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            final_url: url.to_string(),
            status_code,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
