//! Public data types returned by lookups.

/// Thumbnail and original URLs of a page's representative image.
///
/// `None` marks a size the API did not provide; a page with neither size
/// is reported as [`Error::NoImages`](crate::Error::NoImages) rather than
/// as an empty pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImagePair {
    /// Resized thumbnail URL
    pub thumbnail: Option<String>,

    /// Full-resolution URL
    pub original: Option<String>,
}
