//! Error types for Wikipedia lookups.

/// Errors produced by [`WikipediaClient`](crate::WikipediaClient) operations.
///
/// Two classes share this enum. Domain negatives ([`NoTitleFound`],
/// [`NoExtractFound`], [`NoImages`]) are ordinary lookup outcomes that
/// callers branch on. Transport and decode faults are propagated verbatim
/// from the HTTP/JSON layer, with no translation into the negative
/// vocabulary. [`Error::is_negative`] distinguishes the two.
///
/// [`NoTitleFound`]: Error::NoTitleFound
/// [`NoExtractFound`]: Error::NoExtractFound
/// [`NoImages`]: Error::NoImages
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search returned no candidate articles for the term
    #[error("no title found")]
    NoTitleFound,

    /// The extract lookup returned no usable page or extract text
    #[error("title and extract not found")]
    NoExtractFound,

    /// The page carries no representative image
    #[error("no images")]
    NoImages,

    /// Network or HTTP-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API returned status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not valid JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was valid JSON but not a shape this endpoint produces
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl Error {
    /// Whether this is a domain negative (a normal "not found" outcome)
    /// rather than a transport or decode fault.
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Error::NoTitleFound | Error::NoExtractFound | Error::NoImages
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_explanations() {
        assert_eq!(Error::NoTitleFound.to_string(), "no title found");
        assert_eq!(
            Error::NoExtractFound.to_string(),
            "title and extract not found"
        );
        assert_eq!(Error::NoImages.to_string(), "no images");
    }

    #[test]
    fn negatives_are_not_faults() {
        assert!(Error::NoTitleFound.is_negative());
        assert!(Error::NoExtractFound.is_negative());
        assert!(Error::NoImages.is_negative());

        let decode = Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(!decode.is_negative());
        assert!(!Error::Shape("missing `query`".to_string()).is_negative());
        assert!(!Error::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE).is_negative());
    }
}
