//! Endpoint URL construction and request-context tags.
//!
//! URLs are built with the fixed parameter set the plugin always uses: search
//! is restricted to embeddable videos and capped at [`MAX_RESULTS`] items, and
//! detail lookups request the snippet and statistics parts. Caller-supplied
//! values (the query string, the video id, the API keys) are percent-encoded.

use std::collections::BTreeMap;

/// Fixed result cap for search requests.
pub const MAX_RESULTS: u8 = 20;

/// YouTube Data API v3 search endpoint.
const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// YouTube Data API v3 video list endpoint.
const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Embeddable player base URL.
const EMBED_ENDPOINT: &str = "https://www.youtube.com/embed";

/// Context key holding the request kind tag.
pub const CONTEXT_KIND: &str = "kind";

/// Context key holding the search generation counter.
pub const CONTEXT_GENERATION: &str = "generation";

/// Context key holding the requested video id.
pub const CONTEXT_VIDEO_ID: &str = "video_id";

/// The two request kinds the plugin issues.
///
/// Serialized into the `web_request` context map so that the corresponding
/// `WebRequestResult` event can be routed back to the right completion
/// handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// A search request; the context also carries the search generation.
    Search,
    /// A detail lookup; the context also carries the video id.
    Detail,
}

impl RequestKind {
    /// Returns the tag stored in the request context.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Detail => "detail",
        }
    }

    /// Parses a context tag back into a request kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "search" => Some(Self::Search),
            "detail" => Some(Self::Detail),
            _ => None,
        }
    }
}

/// Builds the search endpoint URL for a query.
///
/// Fixed parameters: `part=snippet`, `type=video`, `videoEmbeddable=true`,
/// `maxResults=20`. The query and the key are percent-encoded.
#[must_use]
pub fn search_url(query: &str, api_key: &str) -> String {
    format!(
        "{SEARCH_ENDPOINT}?part=snippet&type=video&videoEmbeddable=true&maxResults={MAX_RESULTS}&q={}&key={}",
        urlencoding::encode(query),
        urlencoding::encode(api_key),
    )
}

/// Builds the detail endpoint URL for exactly one video id.
///
/// Requests the `snippet` and `statistics` parts.
#[must_use]
pub fn video_details_url(video_id: &str, api_key: &str) -> String {
    format!(
        "{VIDEOS_ENDPOINT}?part=snippet,statistics&id={}&key={}",
        urlencoding::encode(video_id),
        urlencoding::encode(api_key),
    )
}

/// Builds the embeddable player URL for a video id, with autoplay enabled.
#[must_use]
pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_ENDPOINT}/{}?autoplay=1", urlencoding::encode(video_id))
}

/// Builds the request context for a search request.
#[must_use]
pub fn search_context(generation: u64) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    context.insert(CONTEXT_KIND.to_string(), RequestKind::Search.tag().to_string());
    context.insert(CONTEXT_GENERATION.to_string(), generation.to_string());
    context
}

/// Builds the request context for a detail request.
#[must_use]
pub fn detail_context(video_id: &str) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    context.insert(CONTEXT_KIND.to_string(), RequestKind::Detail.tag().to_string());
    context.insert(CONTEXT_VIDEO_ID.to_string(), video_id.to_string());
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_carries_fixed_parameters_and_query() {
        let url = search_url("cats", "KEY");
        assert!(url.starts_with("https://www.googleapis.com/youtube/v3/search?"));
        assert!(url.contains("part=snippet"));
        assert!(url.contains("type=video"));
        assert!(url.contains("videoEmbeddable=true"));
        assert!(url.contains("maxResults=20"));
        assert!(url.contains("q=cats"));
        assert!(url.contains("key=KEY"));
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let url = search_url("lofi hip hop", "KEY");
        assert!(url.contains("q=lofi%20hip%20hop"));
    }

    #[test]
    fn video_details_url_requests_snippet_and_statistics() {
        let url = video_details_url("abc123", "KEY");
        assert!(url.starts_with("https://www.googleapis.com/youtube/v3/videos?"));
        assert!(url.contains("part=snippet,statistics"));
        assert!(url.contains("id=abc123"));
    }

    #[test]
    fn embed_url_enables_autoplay() {
        assert_eq!(
            embed_url("abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1"
        );
    }

    #[test]
    fn request_kind_round_trips_through_context_tag() {
        assert_eq!(RequestKind::from_tag(RequestKind::Search.tag()), Some(RequestKind::Search));
        assert_eq!(RequestKind::from_tag(RequestKind::Detail.tag()), Some(RequestKind::Detail));
        assert_eq!(RequestKind::from_tag("other"), None);
    }

    #[test]
    fn contexts_carry_request_identity() {
        let search = search_context(7);
        assert_eq!(search.get(CONTEXT_KIND).map(String::as_str), Some("search"));
        assert_eq!(search.get(CONTEXT_GENERATION).map(String::as_str), Some("7"));

        let detail = detail_context("abc123");
        assert_eq!(detail.get(CONTEXT_KIND).map(String::as_str), Some("detail"));
        assert_eq!(detail.get(CONTEXT_VIDEO_ID).map(String::as_str), Some("abc123"));
    }
}
