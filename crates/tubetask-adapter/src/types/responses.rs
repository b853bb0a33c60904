/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs for deserialization
[POS]:    Data layer - upstream wire formats
[UPDATE]: When API schema changes or new types added
*/

use serde::Deserialize;

/// Top-level search.list response. Every field the mapping touches is
/// optional so a sparse payload degrades to omitted items, not an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchItem {
    pub id: Option<ResourceId>,
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchSnippet {
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<ThumbnailSet>,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThumbnailSet {
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

/// Error payload returned by the upstream API on non-success statuses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorResponse {
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
