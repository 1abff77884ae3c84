use crate::configuration::Configuration;
use crate::utils::fetch_page_html;
use url::Url;

/// Represent a page fetched. This page holds the raw markup exactly as
/// the external fetcher captured it.
#[derive(Debug, Clone)]
pub struct Page {
    /// Raw markup for the page. Empty when the fetch failed.
    html: String,
    /// Base absolute url for page.
    base: Url,
}

/// Instanciate a new page without fetching it (used for testing purposes).
pub fn build(url: &str, html: &str) -> Page {
    Page {
        html: html.into(),
        base: Url::parse(url).expect("Invalid page URL"),
    }
}

impl Page {
    /// Instantiate a new page and fetch its raw markup. The html is left
    /// empty when the fetch failed.
    pub async fn new(url: &str, configuration: &Configuration) -> Self {
        let html = fetch_page_html(url, configuration).await;

        build(url, html.as_deref().unwrap_or_default())
    }

    /// URL getter for page.
    pub fn get_url(&self) -> String {
        self.base.to_string()
    }

    /// Html getter for page.
    pub fn get_html(&self) -> &String {
        &self.html
    }

    /// Determine if the fetch produced any markup at all.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::build;

    #[test]
    fn build_page() {
        let page = build("https://example.com", "<html><p>Hi</p></html>");

        assert_eq!(page.get_url(), "https://example.com/");
        assert_eq!(page.get_html(), "<html><p>Hi</p></html>");
        assert!(!page.is_empty());
    }

    #[test]
    fn empty_page_marks_failed_fetch() {
        let page = build("https://example.com", "");

        assert!(page.is_empty());
    }
}
