//! Charset resolution and decoding for fetched bodies.
//!
//! Resolution order: `charset=` in the Content-Type header, then a
//! `charset=` declaration in the first 4 KB of the body (covers both
//! `<meta charset>` and the http-equiv form), then statistical detection.
//! Decoding is lossy, so a page with stray bytes still produces text.

use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

static CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("charset regex"));

const SNIFF_WINDOW: usize = 4096;

/// Decode a fetched body to UTF-8 using the best available charset signal.
pub fn decode_body(content_type: &str, body: &[u8]) -> String {
    let encoding = sniff_encoding(content_type, body);
    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn sniff_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = charset_label(content_type) {
        return encoding;
    }

    let window = &body[..body.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(window);
    if let Some(encoding) = charset_label(&head) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, false);
    detector.guess(None, true)
}

fn charset_label(haystack: &str) -> Option<&'static Encoding> {
    let label = CHARSET_RE.captures(haystack)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_from_content_type_header() {
        let body = b"<html><head><title>Test</title></head></html>";
        let decoded = decode_body("text/html; charset=utf-8", body);
        assert!(decoded.contains("Test"));
    }

    #[test]
    fn charset_from_meta_tag() {
        // 0xE9 is é in windows-1252 and invalid UTF-8
        let mut body = b"<html><head><meta charset=\"windows-1252\"></head><body>caf".to_vec();
        body.push(0xE9);
        body.extend_from_slice(b"</body></html>");
        let decoded = decode_body("text/html", &body);
        assert!(decoded.contains("café"));
    }

    #[test]
    fn charset_from_http_equiv_meta() {
        let mut body =
            b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head><body>r"
                .to_vec();
        body.push(0xE9);
        body.extend_from_slice(b"sum</body></html>");
        let decoded = decode_body("text/html", &body);
        assert!(decoded.contains("résum"));
    }

    #[test]
    fn utf8_detected_without_declarations() {
        let body = "<html><body>Hello, 世界!</body></html>".as_bytes();
        let decoded = decode_body("text/html", body);
        assert!(decoded.contains("世界"));
    }

    #[test]
    fn stray_bytes_decode_lossily() {
        let mut body = b"<html><body>ok".to_vec();
        body.push(0xFF);
        body.extend_from_slice(b"</body></html>");
        let decoded = decode_body("text/html; charset=utf-8", &body);
        assert!(decoded.contains("ok"));
    }
}
