//! Wire-format models and response decoding.
//!
//! The structs here mirror the JSON shapes the two endpoints actually send;
//! the decode functions reduce them to the domain records the rest of the
//! plugin works with. Per the flat error taxonomy, a search response that is
//! well-formed but lacks the `items` field decodes to `None` rather than an
//! error, so the caller can empty the list without treating it as a
//! completed search; anything that fails to parse is an error, which the
//! caller logs and degrades from.

use crate::domain::{Result, VideoDetail, VideoSummary};
use serde::Deserialize;

/// Search endpoint response envelope.
///
/// `items` is optional: the API omits it for queries with no results, and the
/// original contract treats that as the non-error empty case.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

/// One raw search result.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

/// Search result id wrapper (`{"kind": ..., "videoId": ...}`).
#[derive(Debug, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Search result snippet: the subset of fields the grid projects.
#[derive(Debug, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    pub thumbnails: Thumbnails,
}

/// Thumbnail set; only the high-resolution variant is used.
#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub high: Thumbnail,
}

/// A single thumbnail entry.
#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Video list (detail) endpoint response envelope.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

/// One raw detail item with the requested snippet and statistics parts.
#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
}

/// Detail snippet fields the panel renders.
#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

/// Detail statistics part.
#[derive(Debug, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: String,
}

impl From<SearchItem> for VideoSummary {
    fn from(item: SearchItem) -> Self {
        Self {
            id: item.id.video_id,
            title: item.snippet.title,
            channel: item.snippet.channel_title,
            thumbnail: item.snippet.thumbnails.high.url,
        }
    }
}

impl From<VideoItem> for VideoDetail {
    fn from(item: VideoItem) -> Self {
        Self {
            title: item.snippet.title,
            description: item.snippet.description,
            published_at: item.snippet.published_at,
            view_count: item.statistics.view_count,
        }
    }
}

/// Decodes a search response body into video summaries.
///
/// A response without the `items` field yields `Ok(None)`, not an error: the
/// caller empties the list without treating the response as a completed
/// search. A present-but-empty `items` array is an ordinary success,
/// `Ok(Some(vec![]))`.
///
/// # Errors
///
/// Returns a decode error when the body is not valid JSON or an item does not
/// match the expected shape.
pub fn decode_search(body: &[u8]) -> Result<Option<Vec<VideoSummary>>> {
    let response: SearchResponse = serde_json::from_slice(body)?;

    let Some(items) = response.items else {
        tracing::debug!("search response has no items field");
        return Ok(None);
    };

    Ok(Some(items.into_iter().map(VideoSummary::from).collect()))
}

/// Decodes a detail response body into a video detail record.
///
/// Returns `Ok(None)` when the response carries no items; the caller leaves
/// the current detail state unchanged in that case.
///
/// # Errors
///
/// Returns a decode error when the body is not valid JSON or does not match
/// the expected shape.
pub fn decode_video_details(body: &[u8]) -> Result<Option<VideoDetail>> {
    let response: VideoListResponse = serde_json::from_slice(body)?;
    Ok(response.items.into_iter().next().map(VideoDetail::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_item(id: &str, title: &str, channel: &str) -> String {
        format!(
            r#"{{"id": {{"kind": "youtube#video", "videoId": "{id}"}},
                 "snippet": {{"title": "{title}",
                              "channelTitle": "{channel}",
                              "thumbnails": {{"high": {{"url": "https://i.ytimg.com/vi/{id}/hqdefault.jpg"}}}}}}}}"#
        )
    }

    #[test]
    fn search_items_project_into_summaries() {
        let body = format!(
            r#"{{"items": [{}, {}, {}]}}"#,
            search_item("a1", "First", "Chan A"),
            search_item("b2", "Second", "Chan B"),
            search_item("c3", "Third", "Chan C"),
        );

        let summaries = decode_search(body.as_bytes()).unwrap().unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].id, "a1");
        assert_eq!(summaries[0].title, "First");
        assert_eq!(summaries[0].channel, "Chan A");
        assert_eq!(summaries[0].thumbnail, "https://i.ytimg.com/vi/a1/hqdefault.jpg");
        assert_eq!(summaries[2].title, "Third");
    }

    #[test]
    fn missing_items_field_is_distinct_from_a_success() {
        let decoded = decode_search(br#"{"kind": "youtube#searchListResponse"}"#).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn empty_items_decode_to_an_empty_success() {
        let decoded = decode_search(br#"{"items": []}"#).unwrap();
        assert_eq!(decoded, Some(vec![]));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(decode_search(b"not json").is_err());
    }

    #[test]
    fn detail_response_yields_the_first_item() {
        let body = br#"{"items": [{
            "snippet": {"title": "Video", "description": "Words.", "publishedAt": "2023-11-20T08:00:00Z"},
            "statistics": {"viewCount": "1234567"}
        }]}"#;

        let detail = decode_video_details(body).unwrap().unwrap();

        assert_eq!(detail.title, "Video");
        assert_eq!(detail.description, "Words.");
        assert_eq!(detail.published_at, "2023-11-20T08:00:00Z");
        assert_eq!(detail.view_count, "1234567");
    }

    #[test]
    fn empty_detail_response_yields_none() {
        assert!(decode_video_details(br#"{"items": []}"#).unwrap().is_none());
        assert!(decode_video_details(br#"{}"#).unwrap().is_none());
    }

    #[test]
    fn detail_description_defaults_when_absent() {
        let body = br#"{"items": [{
            "snippet": {"title": "Video", "publishedAt": "2023-11-20T08:00:00Z"},
            "statistics": {"viewCount": "9"}
        }]}"#;

        let detail = decode_video_details(body).unwrap().unwrap();
        assert_eq!(detail.description, "");
    }
}
