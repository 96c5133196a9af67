//! The Wikipedia API client and its four lookup operations.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::ImagePair;

/// Client for the MediaWiki query API.
///
/// Every operation is a blocking call performing one HTTP round-trip
/// ([`search`](Self::search)) or two ([`article`](Self::article),
/// [`extract`](Self::extract), [`images`](Self::images), which each resolve
/// the term via a fresh search before fetching). The client holds no
/// mutable state; clones share the underlying connection pool and the
/// client is safe to use from multiple threads.
///
/// No retries are performed at any layer. A transient network failure
/// surfaces immediately as [`Error::Http`].
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl WikipediaClient {
    /// Create a client against the production English Wikipedia endpoint.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Resolve a free-text term to the canonical title of the best match.
    ///
    /// The first hit in the API's own ranking wins; there is no local
    /// re-ranking. An empty hit list is the [`Error::NoTitleFound`]
    /// negative, not a fault — empty or nonsensical input is legal.
    pub fn search(&self, term: &str) -> Result<String, Error> {
        let params = format!(
            "&list=search&srprop=&srinfo=&srsearch={}",
            urlencoding::encode(term)
        );
        let query = self.query(&params)?;
        let results: SearchResults = serde_json::from_value(query)?;

        match results.search.into_iter().next() {
            Some(hit) => Ok(hit.title),
            None => Err(Error::NoTitleFound),
        }
    }

    /// Fetch the raw revision content for the article best matching `term`.
    ///
    /// The term is resolved with [`search`](Self::search) first; a search
    /// failure is returned unchanged without a second request. The success
    /// value is the undecoded query object, since revision payloads vary
    /// too much across pages to be worth typing.
    pub fn article(&self, term: &str) -> Result<Value, Error> {
        let title = self.search(term)?;
        self.query(&format!(
            "&prop=revisions&rvprop=content&titles={}",
            urlencoding::encode(&title)
        ))
    }

    /// Fetch a short plain-text summary for the article best matching
    /// `term` — up to four sentences of the intro section.
    ///
    /// A search failure is returned unchanged without a second request.
    /// A response without a usable page or extract text is the
    /// [`Error::NoExtractFound`] negative.
    pub fn extract(&self, term: &str) -> Result<String, Error> {
        let title = self.search(term)?;
        let params = format!(
            "&prop=extracts&exsectionformat=plain&exsentences=4&exintro=&explaintext=&titles={}",
            urlencoding::encode(&title)
        );
        let query = self.query(&params)?;
        let results: PageMap<ExtractPage> = serde_json::from_value(query)?;

        single_page(results.pages, &title)
            .and_then(|page| page.extract)
            .ok_or(Error::NoExtractFound)
    }

    /// Fetch the representative image of the article best matching `term`,
    /// as a thumbnail/original URL pair.
    ///
    /// A search failure is returned unchanged without a second request.
    /// A page carrying neither image size is the [`Error::NoImages`]
    /// negative; a page carrying one size yields a half-filled
    /// [`ImagePair`].
    pub fn images(&self, term: &str) -> Result<ImagePair, Error> {
        let title = self.search(term)?;
        let params = format!(
            "&prop=pageimages&piprop=name|original|thumbnail&titles={}",
            urlencoding::encode(&title)
        );
        let query = self.query(&params)?;
        let results: PageMap<ImagePage> = serde_json::from_value(query)?;

        match single_page(results.pages, &title).and_then(|page| page.thumbnail) {
            Some(Thumbnail {
                source: None,
                original: None,
            })
            | None => Err(Error::NoImages),
            Some(Thumbnail { source, original }) => Ok(ImagePair {
                thumbnail: source,
                original,
            }),
        }
    }

    /// Run one query-API request and return the decoded top-level `query`
    /// object. All other top-level fields (`continue`, `batchcomplete`,
    /// ...) are discarded.
    fn query(&self, params: &str) -> Result<Value, Error> {
        let url = format!("{}?format=json&action=query{}", self.base_url, params);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let mut body: Value = serde_json::from_str(&response.text()?)?;
        match body.get_mut("query") {
            Some(query) => Ok(query.take()),
            None => Err(Error::Shape("response has no `query` field".to_string())),
        }
    }
}

/// Collapse the `pages` map of a single-title lookup into its one entry.
///
/// A single-title query yields exactly one page; more than one means the
/// API did something unexpected, which is logged and tolerated by taking
/// an arbitrary entry.
fn single_page<T>(pages: HashMap<String, T>, title: &str) -> Option<T> {
    if pages.len() > 1 {
        tracing::warn!(
            title,
            count = pages.len(),
            "expected exactly one page in response"
        );
    }
    pages.into_iter().next().map(|(_, page)| page)
}

// ===== Wikipedia query-API response types =====

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageMap<T> {
    #[serde(default)]
    pages: HashMap<String, T>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractPage {
    extract: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ImagePage {
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
    original: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_results_decode() {
        let query = json!({
            "search": [
                {"title": "Robert Downey, Jr.", "ns": 0, "pageid": 26151},
                {"title": "Robert Downey, Sr.", "ns": 0, "pageid": 1216235},
            ],
            "searchinfo": {"totalhits": 2},
        });
        let results: SearchResults = serde_json::from_value(query).unwrap();
        assert_eq!(results.search.len(), 2);
        assert_eq!(results.search[0].title, "Robert Downey, Jr.");
    }

    #[test]
    fn search_results_decode_without_hits_field() {
        let results: SearchResults = serde_json::from_value(json!({})).unwrap();
        assert!(results.search.is_empty());
    }

    #[test]
    fn extract_pages_decode() {
        let query = json!({
            "pages": {"123": {"pageid": 123, "extract": "Some text."}},
        });
        let results: PageMap<ExtractPage> = serde_json::from_value(query).unwrap();
        let page = single_page(results.pages, "ignored").unwrap();
        assert_eq!(page.extract.as_deref(), Some("Some text."));
    }

    #[test]
    fn missing_pages_decodes_to_empty_map() {
        let results: PageMap<ExtractPage> = serde_json::from_value(json!({})).unwrap();
        assert!(single_page(results.pages, "ignored").is_none());
    }

    #[test]
    fn thumbnail_decode_tolerates_missing_sizes() {
        let query = json!({
            "pages": {"7": {"pageimage": "X.jpg", "thumbnail": {"original": "http://x/full.jpg"}}},
        });
        let results: PageMap<ImagePage> = serde_json::from_value(query).unwrap();
        let thumb = single_page(results.pages, "X").unwrap().thumbnail.unwrap();
        assert_eq!(thumb.source, None);
        assert_eq!(thumb.original.as_deref(), Some("http://x/full.jpg"));
    }

    #[test]
    fn single_page_takes_the_only_entry() {
        let mut pages = HashMap::new();
        pages.insert("1".to_string(), "only");
        assert_eq!(single_page(pages, "T"), Some("only"));
        assert_eq!(single_page(HashMap::<String, &str>::new(), "T"), None);
    }
}
