//! HTML → `FieldRecord` extraction.
//!
//! Produces the flat set of signals the classifier and topic extractor
//! consume. Parsing is total: malformed markup never fails, and any tag or
//! attribute that cannot be found is simply absent from the record.

pub mod language;
pub mod model;

pub use model::FieldRecord;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector"));
static HTML_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("html").expect("html selector"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[rel='canonical']").expect("canonical selector"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("h1 selector"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("h2 selector"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector"));

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t]+").expect("line break regex"));
static EXTRA_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("extra space regex"));

/// Containers whose text is boilerplate rather than page content.
const SKIPPED_CONTAINERS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript",
];

/// Parse raw HTML into the flat record of extractable signals.
pub fn parse_html(html: &str) -> FieldRecord {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty());

    let canonical_url = doc
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string);

    let h1_tags = heading_texts(&doc, &H1_SELECTOR);
    let h2_tags = heading_texts(&doc, &H2_SELECTOR);

    let body_text = match doc.select(&BODY_SELECTOR).next() {
        Some(body) => clean_text(&visible_text(body)),
        None => clean_text(&visible_text(doc.root_element())),
    };

    // <html lang> wins; otherwise fall back to statistical detection
    let language = doc
        .select(&HTML_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .map(str::to_string)
        .filter(|l| !l.is_empty())
        .or_else(|| language::detect_language(&body_text));

    FieldRecord {
        title,
        description: meta_content(&doc, "meta[name='description']"),
        keywords: meta_content(&doc, "meta[name='keywords']"),
        author: meta_content(&doc, "meta[name='author']"),
        robots: meta_content(&doc, "meta[name='robots']"),
        language,
        og_title: meta_content(&doc, "meta[property='og:title']"),
        og_description: meta_content(&doc, "meta[property='og:description']"),
        og_image: meta_content(&doc, "meta[property='og:image']"),
        og_type: meta_content(&doc, "meta[property='og:type']"),
        twitter_title: meta_content(&doc, "meta[name='twitter:title']"),
        twitter_description: meta_content(&doc, "meta[name='twitter:description']"),
        canonical_url,
        h1_tags,
        h2_tags,
        body_text,
    }
}

/// Content of the first matching `<meta>` tag, trimmed; empty content counts
/// as absent.
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let content = doc
        .select(&selector)
        .next()?
        .value()
        .attr("content")?
        .trim();
    (!content.is_empty()).then(|| content.to_string())
}

fn heading_texts(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| clean_text(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Text of an element subtree with boilerplate containers skipped.
fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_visible_text(el, &mut out);
    out
}

fn collect_visible_text(el: ElementRef<'_>, out: &mut String) {
    if SKIPPED_CONTAINERS.contains(&el.value().name()) {
        return;
    }
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            collect_visible_text(child_el, out);
        }
    }
}

/// Collapse whitespace and strip control characters from extracted text.
fn clean_text(raw: &str) -> String {
    let text = LINE_BREAKS.replace_all(raw, " ");
    let text = EXTRA_SPACES.replace_all(&text, " ");
    text.trim().to_string()
}
