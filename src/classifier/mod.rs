//! Page-type classification.
//!
//! A fixed priority cascade over signal tables: og:type first, then URL
//! structure, then content keywords as a last resort. The cascade always
//! terminates with a label; unrecognized or empty input maps to
//! [`PageType::Other`].

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::entities::PageType;
use crate::parser::FieldRecord;

/// Outcome of the og:type table lookup. `Ambiguous` means the value is known
/// but does not decide the label on its own; the cascade falls through to URL
/// signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OgTypeSignal {
    Label(PageType),
    Ambiguous,
}

/// og:type values with a fixed mapping, checked in order.
const OG_TYPE_TABLE: &[(&str, OgTypeSignal)] = &[
    ("product", OgTypeSignal::Label(PageType::Product)),
    ("product.item", OgTypeSignal::Label(PageType::Product)),
    ("book", OgTypeSignal::Label(PageType::Other)),
    ("music.song", OgTypeSignal::Label(PageType::Other)),
    ("video.movie", OgTypeSignal::Label(PageType::Other)),
    ("website", OgTypeSignal::Ambiguous),
    ("article", OgTypeSignal::Ambiguous),
];

/// URL path fragments, ordered from most to least specific.
const PRODUCT_URL_SIGNALS: &[&str] = &[
    "/dp/", // Amazon product pages
    "/product/",
    "/products/",
    "/item/",
    "/items/",
    "/pd/", // Target / some e-commerce
    "/buy/",
    "/gp/product/", // Amazon alternate path
];

const NEWS_URL_SIGNALS: &[&str] = &[
    "/politics/",
    "/world/",
    "/us/",
    "/business/",
    "/health/",
    "/science/",
    "/sports/",
    "/entertainment/",
    "/tech/",
    "/technology/",
    "/national/",
    "/international/",
    "/news/",
    "/breaking/",
    "/latest/",
];

const BLOG_URL_SIGNALS: &[&str] = &[
    "/blog/",
    "/blogs/",
    "/post/",
    "/posts/",
    "/how-to/",
    "/howto/",
    "/guide/",
    "/guides/",
    "/tips/",
    "/tutorial/",
    "/camp/", // REI Co-op blog
    "/adventure/",
    "/outdoor/",
];

/// Paths that are effectively the site root.
const INDEX_PATHS: &[&str] = &["/index.html", "/index.php", "/home"];

/// Date-based URL pattern, common in news (e.g. /2013/06/10/).
static DATE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d{4}/\d{2}/\d{2}/").expect("date url regex"));

/// Content keyword signals, used only when the URL gives no signal.
const PRODUCT_CONTENT: &[&str] = &[
    "add to cart",
    "buy now",
    "in stock",
    "out of stock",
    "free shipping",
    "price",
    "rating",
    "stars out of",
];
const NEWS_CONTENT: &[&str] = &[
    "breaking news",
    "exclusive",
    "investigation",
    "leaked",
    "officials said",
    "according to",
    "press release",
];
const BLOG_CONTENT: &[&str] = &[
    "how to",
    "step by step",
    "in this guide",
    "tips for",
    "here's why",
    "let's look at",
];

/// Classify a crawled page into one of the five page types.
///
/// Priority order:
///   1. og:type (unambiguous values)
///   2. URL path patterns (structural, reliable)
///   3. Homepage detection (trivially short path)
///   4. og:type = "article" disambiguated by URL
///   5. URL path signals without og:type help
///   6. Content keyword scoring (weakest signal, last resort)
///
/// Total and deterministic: the same (record, URL) pair always yields the
/// same label, and anything unrecognized ends up as `Other`.
pub fn classify(record: &FieldRecord, url: &str) -> PageType {
    let url_lower = url.to_lowercase();
    let og_type = record
        .og_type
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    // 1. og:type with an unambiguous mapping
    if let Some(OgTypeSignal::Label(label)) = og_type_signal(&og_type) {
        return label;
    }

    // 2. URL path - product patterns are very reliable
    for signal in PRODUCT_URL_SIGNALS {
        if url_lower.contains(signal) {
            return PageType::Product;
        }
    }

    // 3. Homepage - path is "/" or effectively empty
    let path = url_path(url);
    let path = path.trim_end_matches('/');
    if path.is_empty() || INDEX_PATHS.contains(&path) {
        return PageType::Homepage;
    }

    // 4. og:type = "article" - written content for sure, but the URL decides
    //    whether it reads as news or a blog post
    if og_type == "article" {
        for signal in NEWS_URL_SIGNALS {
            if url_lower.contains(signal) {
                return PageType::NewsArticle;
            }
        }
        // a date-based URL is a strong news signal (e.g. cnn.com/2013/06/10/...)
        if DATE_URL_RE.is_match(&url_lower) {
            return PageType::NewsArticle;
        }
        for signal in BLOG_URL_SIGNALS {
            if url_lower.contains(signal) {
                return PageType::BlogPost;
            }
        }
        // og:type = "article" with no further URL signal → treat as blog post
        return PageType::BlogPost;
    }

    // 5. URL path signals without og:type help
    for signal in NEWS_URL_SIGNALS {
        if url_lower.contains(signal) {
            return PageType::NewsArticle;
        }
    }
    if DATE_URL_RE.is_match(&url_lower) {
        return PageType::NewsArticle;
    }
    for signal in BLOG_URL_SIGNALS {
        if url_lower.contains(signal) {
            return PageType::BlogPost;
        }
    }

    // 6. Content keyword scoring - last resort before giving up
    let content = content_blob(record);
    let product_score = signal_hits(PRODUCT_CONTENT, &content);
    let news_score = signal_hits(NEWS_CONTENT, &content);
    let blog_score = signal_hits(BLOG_CONTENT, &content);

    let top = product_score.max(news_score).max(blog_score);
    if top > 0 {
        // ties resolve product → news → blog
        if product_score == top {
            return PageType::Product;
        }
        if news_score == top {
            return PageType::NewsArticle;
        }
        if blog_score == top {
            return PageType::BlogPost;
        }
    }

    PageType::Other
}

fn og_type_signal(og_type: &str) -> Option<OgTypeSignal> {
    OG_TYPE_TABLE
        .iter()
        .find(|(value, _)| *value == og_type)
        .map(|(_, signal)| *signal)
}

/// URL path component; an unparseable URL contributes the raw string, which
/// keeps the homepage check meaningful for scheme-less input.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    }
}

/// Lower-cased concatenation of the fields the keyword tables score against.
fn content_blob(record: &FieldRecord) -> String {
    let title = record.title.as_deref().unwrap_or("").to_lowercase();
    let h1_text = record.h1_tags.join(" ").to_lowercase();
    let description = record.description.as_deref().unwrap_or("").to_lowercase();
    format!("{title} {h1_text} {description}")
}

/// How many signals from the list occur in the content blob.
fn signal_hits(signals: &[&str], content: &str) -> usize {
    signals.iter().filter(|s| content.contains(*s)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_og_type(og_type: &str) -> FieldRecord {
        FieldRecord {
            og_type: Some(og_type.to_string()),
            ..FieldRecord::default()
        }
    }

    #[test]
    fn amazon_toaster_page_is_product() {
        let record = FieldRecord {
            title: Some("Cuisinart 2-Slice Toaster, Compact, White: Home & Kitchen".to_string()),
            ..FieldRecord::default()
        };
        assert_eq!(
            classify(
                &record,
                "https://www.amazon.com/Cuisinart-CPT-122-Compact-2-Slice-Toaster/dp/B009GQ034C/"
            ),
            PageType::Product
        );
    }

    #[test]
    fn rei_camp_article_is_blog_post() {
        let record = record_with_og_type("article");
        assert_eq!(
            classify(
                &record,
                "https://www.rei.com/blog/camp/how-to-introduce-your-indoorsy-friend-to-the-outdoors"
            ),
            PageType::BlogPost
        );
    }

    #[test]
    fn cnn_dated_politics_article_is_news() {
        let record = record_with_og_type("article");
        assert_eq!(
            classify(
                &record,
                "https://edition.cnn.com/2013/06/10/politics/edward-snowden-profile/"
            ),
            PageType::NewsArticle
        );
    }

    #[test]
    fn bare_domain_is_homepage() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://www.amazon.com"),
            PageType::Homepage
        );
    }

    #[test]
    fn og_type_product_wins_immediately() {
        let record = record_with_og_type("product");
        assert_eq!(
            classify(&record, "https://example.com/some/page"),
            PageType::Product
        );
    }

    #[test]
    fn og_type_is_case_insensitive_and_trimmed() {
        let record = record_with_og_type("  Product ");
        assert_eq!(classify(&record, "https://example.com/x"), PageType::Product);
    }

    #[test]
    fn og_type_book_maps_to_other() {
        let record = record_with_og_type("book");
        assert_eq!(
            classify(&record, "https://example.com/blog/reading-list"),
            PageType::Other
        );
    }

    #[test]
    fn product_url_signal_overrides_missing_og_type() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://www.amazon.com/Name/dp/B001/"),
            PageType::Product
        );
    }

    #[test]
    fn homepage_from_bare_domain() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://www.amazon.com/"),
            PageType::Homepage
        );
    }

    #[test]
    fn homepage_from_index_file() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://example.com/index.html"),
            PageType::Homepage
        );
        assert_eq!(
            classify(&record, "https://example.com/home/"),
            PageType::Homepage
        );
    }

    #[test]
    fn og_type_website_falls_through_to_homepage() {
        let record = record_with_og_type("website");
        assert_eq!(classify(&record, "https://example.com/"), PageType::Homepage);
    }

    #[test]
    fn article_with_news_path_is_news() {
        let record = record_with_og_type("article");
        assert_eq!(
            classify(&record, "https://cnn.com/2013/06/10/politics/story"),
            PageType::NewsArticle
        );
    }

    #[test]
    fn article_with_date_url_is_news() {
        let record = record_with_og_type("article");
        assert_eq!(
            classify(&record, "https://example.com/2021/03/14/pi-day-report/"),
            PageType::NewsArticle
        );
    }

    #[test]
    fn article_without_url_signal_defaults_to_blog() {
        let record = record_with_og_type("article");
        assert_eq!(
            classify(&record, "https://example.com/some-page/"),
            PageType::BlogPost
        );
    }

    #[test]
    fn bare_news_path_is_news() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://example.com/news/local-election"),
            PageType::NewsArticle
        );
    }

    #[test]
    fn bare_blog_path_is_blog() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://example.com/blog/rust-tips"),
            PageType::BlogPost
        );
    }

    #[test]
    fn news_signals_checked_before_blog_signals() {
        // both lists match; news wins because its pass runs first
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://example.com/news/blog/mixed"),
            PageType::NewsArticle
        );
    }

    #[test]
    fn content_keywords_pick_product() {
        let record = FieldRecord {
            title: Some("Buy now with free shipping — in stock today".to_string()),
            ..FieldRecord::default()
        };
        assert_eq!(
            classify(&record, "https://example.com/widget-page"),
            PageType::Product
        );
    }

    #[test]
    fn content_keyword_tie_resolves_product_first() {
        // one product signal and one news signal: equal scores, product wins
        let record = FieldRecord {
            title: Some("buy now".to_string()),
            description: Some("exclusive".to_string()),
            ..FieldRecord::default()
        };
        assert_eq!(
            classify(&record, "https://example.com/mixed-signals"),
            PageType::Product
        );
    }

    #[test]
    fn empty_record_and_plain_url_is_other() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://example.com/something-unremarkable"),
            PageType::Other
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let record = record_with_og_type("article");
        let url = "https://example.com/2020/01/02/story/";
        let first = classify(&record, url);
        for _ in 0..3 {
            assert_eq!(classify(&record, url), first);
        }
    }

    #[test]
    fn url_matching_is_case_insensitive() {
        let record = FieldRecord::default();
        assert_eq!(
            classify(&record, "https://example.com/PRODUCTS/shiny"),
            PageType::Product
        );
    }
}
