//! Video display records.
//!
//! This module defines the two records the UI works with: [`VideoSummary`],
//! the minimal per-video projection shown in the results grid and sidebar, and
//! [`VideoDetail`], the full metadata record shown in the detail panel.
//! Summaries are created fresh on every search and replaced wholesale; no
//! identity persists across searches.

use serde::{Deserialize, Serialize};

/// Minimal per-video display record.
///
/// Projected out of each raw search-result item: the video id, the title, the
/// channel title, and the high-resolution thumbnail URL. The full list of
/// summaries is replaced (not merged) on each new search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    /// YouTube video id (`id.videoId` of the search item).
    pub id: String,
    /// Video title (`snippet.title`).
    pub title: String,
    /// Channel title (`snippet.channelTitle`).
    pub channel: String,
    /// High-resolution thumbnail URL (`snippet.thumbnails.high.url`).
    pub thumbnail: String,
}

/// Full per-video metadata record.
///
/// The first item of the detail endpoint response, reduced to the fields the
/// detail panel renders. `view_count` and `published_at` are kept as the raw
/// strings the API sends; formatting is a display concern handled by
/// [`VideoDetail::formatted_views`] and [`VideoDetail::formatted_publish_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetail {
    /// Video title (`snippet.title`).
    pub title: String,
    /// Full video description (`snippet.description`).
    pub description: String,
    /// RFC 3339 publish timestamp (`snippet.publishedAt`).
    pub published_at: String,
    /// View count as a decimal string (`statistics.viewCount`).
    pub view_count: String,
}

impl VideoDetail {
    /// Returns the view count with thousands grouping, e.g. `1,234,567 views`.
    ///
    /// Falls back to the raw string when the API sends something that is not
    /// a decimal number.
    ///
    /// # Examples
    ///
    /// ```
    /// use ztube::domain::VideoDetail;
    ///
    /// let detail = VideoDetail {
    ///     title: String::new(),
    ///     description: String::new(),
    ///     published_at: "2023-11-20T08:00:00Z".to_string(),
    ///     view_count: "1234567".to_string(),
    /// };
    /// assert_eq!(detail.formatted_views(), "1,234,567 views");
    /// ```
    #[must_use]
    pub fn formatted_views(&self) -> String {
        match self.view_count.parse::<u64>() {
            Ok(count) => format!("{} views", group_thousands(count)),
            Err(_) => format!("{} views", self.view_count),
        }
    }

    /// Returns the publish date formatted for display, e.g. `Nov 20, 2023`.
    ///
    /// Falls back to the raw timestamp string when it is not valid RFC 3339.
    #[must_use]
    pub fn formatted_publish_date(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.published_at).map_or_else(
            |_| self.published_at.clone(),
            |date| date.format("%b %-d, %Y").to_string(),
        )
    }
}

/// Groups a number into comma-separated thousands, e.g. `1234567` → `1,234,567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(view_count: &str, published_at: &str) -> VideoDetail {
        VideoDetail {
            title: "title".to_string(),
            description: "description".to_string(),
            published_at: published_at.to_string(),
            view_count: view_count.to_string(),
        }
    }

    #[test]
    fn views_are_grouped_by_thousands() {
        assert_eq!(
            detail("1234567", "2023-11-20T08:00:00Z").formatted_views(),
            "1,234,567 views"
        );
        assert_eq!(detail("999", "2023-11-20T08:00:00Z").formatted_views(), "999 views");
        assert_eq!(detail("1000", "2023-11-20T08:00:00Z").formatted_views(), "1,000 views");
        assert_eq!(detail("0", "2023-11-20T08:00:00Z").formatted_views(), "0 views");
    }

    #[test]
    fn non_numeric_view_count_falls_back_to_raw_string() {
        assert_eq!(detail("many", "2023-11-20T08:00:00Z").formatted_views(), "many views");
    }

    #[test]
    fn publish_date_is_formatted() {
        assert_eq!(
            detail("1", "2023-11-20T08:00:00Z").formatted_publish_date(),
            "Nov 20, 2023"
        );
    }

    #[test]
    fn invalid_publish_date_falls_back_to_raw_string() {
        assert_eq!(detail("1", "soon").formatted_publish_date(), "soon");
    }
}
