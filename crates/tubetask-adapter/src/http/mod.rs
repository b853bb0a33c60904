/*
[INPUT]:  HTTP client configuration and search endpoint
[OUTPUT]: HTTP responses and typed search results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod search;

pub use error::{Result, SearchError};

pub use client::{ClientConfig, VideoApiClient};
