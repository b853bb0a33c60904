/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - normalized domain models
[UPDATE]: When the normalized video shape changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized video search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub description: String,
}
