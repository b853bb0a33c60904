/*
[INPUT]:  Search query and API key
[OUTPUT]: Normalized video results (at most 20)
[POS]:    HTTP layer - video search endpoint
[UPDATE]: When the upstream search contract or mapping rules change
*/

use crate::http::client::VideoApiClient;
use crate::http::error::{Result, SearchError};
use crate::types::{SearchItem, SearchListResponse, Video};
use chrono::{DateTime, Utc};
use reqwest::Method;
use tracing::debug;

/// Endpoint path for video search
const SEARCH_ENDPOINT: &str = "/youtube/v3/search";

/// Result cap, requested from the upstream and enforced again locally
const MAX_RESULTS: usize = 20;

impl VideoApiClient {
    /// Search for videos matching a query.
    ///
    /// GET /youtube/v3/search?part=snippet&maxResults=20&q={query}&type=video&key={key}
    ///
    /// Returns at most 20 normalized results. Items missing a video id,
    /// title, medium thumbnail, channel title, or parseable publish
    /// timestamp are dropped individually instead of failing the call.
    pub async fn search(&self, query: &str, api_key: &str) -> Result<Vec<Video>> {
        if query.is_empty() || api_key.is_empty() {
            return Err(SearchError::InvalidInput("query and API key are required"));
        }

        let max_results = MAX_RESULTS.to_string();
        let builder = self.api_request(Method::GET, SEARCH_ENDPOINT)?.query(&[
            ("part", "snippet"),
            ("maxResults", max_results.as_str()),
            ("q", query),
            ("type", "video"),
            ("key", api_key),
        ]);

        let response: SearchListResponse = self.send_json(builder).await?;
        let received = response.items.len();
        let videos: Vec<Video> = response
            .items
            .into_iter()
            .filter_map(map_item)
            .take(MAX_RESULTS)
            .collect();

        debug!(
            query = %query,
            received,
            mapped = videos.len(),
            "search results mapped"
        );
        Ok(videos)
    }
}

/// Map one raw upstream item to a normalized video, or drop it
fn map_item(item: SearchItem) -> Option<Video> {
    let id = item.id?.video_id.filter(|id| !id.is_empty())?;
    let snippet = item.snippet?;
    let published_at = snippet
        .published_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())?
        .with_timezone(&Utc);

    Some(Video {
        id,
        title: snippet.title?,
        thumbnail: snippet.thumbnails?.medium?.url?,
        channel_title: snippet.channel_title?,
        published_at,
        description: snippet.description.unwrap_or_default(),
    })
}
