/// Flat bag of signals extracted from one HTML document.
///
/// Every field defaults to absent/empty when the source HTML does not carry
/// it; absence is never an error. The record is read-only input to the
/// classifier and the topic extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub robots: Option<String>,
    pub language: Option<String>,

    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,

    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,

    pub canonical_url: Option<String>,

    /// Headings in document order; may repeat.
    pub h1_tags: Vec<String>,
    pub h2_tags: Vec<String>,

    /// Whitespace-collapsed plain text of the page body, boilerplate
    /// containers removed. Empty when the page has no visible text.
    pub body_text: String,
}
