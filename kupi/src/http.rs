use crate::{Error, Result};
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

pub const PAGE_URL: &str = "https://www.kupi.cz/sleva/energeticky-napoj-monster-energy";

const LD_JSON_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the promotion page and pulls out its JSON-LD block.
    ///
    /// Returns `Ok(None)` when the page carries no such block; a page
    /// without structured data is not an error. Transport failures and
    /// non-success statuses are, as is a block that isn't valid JSON.
    pub async fn fetch_structured_data(&self) -> Result<Option<Value>> {
        let response = self.client.get(PAGE_URL).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.text().await?;
        let Some(raw) = extract_ld_json(&body) else {
            return Ok(None);
        };

        let data: Value = serde_json::from_str(&raw)?;
        debug!("Structured data from {PAGE_URL}:\n{data:#}");

        Ok(Some(data))
    }
}

/// Returns the contents of the first `<script type="application/ld+json">`
/// element of the document, if any.
fn extract_ld_json(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LD_JSON_SELECTOR).unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ld_json_block() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">{"offers": []}</script>
            </head><body></body></html>
        "#;

        assert_eq!(extract_ld_json(html).as_deref(), Some(r#"{"offers": []}"#));
    }

    #[test]
    fn takes_first_block_when_several_are_present() {
        let html = concat!(
            r#"<script type="application/ld+json">{"first": 1}</script>"#,
            r#"<script type="application/ld+json">{"second": 2}</script>"#,
        );

        assert_eq!(extract_ld_json(html).as_deref(), Some(r#"{"first": 1}"#));
    }

    #[test]
    fn missing_block_yields_none() {
        let html = "<html><body><script>var x = 1;</script></body></html>";

        assert_eq!(extract_ld_json(html), None);
    }
}
