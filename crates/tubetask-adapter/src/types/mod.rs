/*
[INPUT]:  Raw JSON payloads from the video data API
[OUTPUT]: Typed models and response structures
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod models;
pub mod responses;

pub use models::*;
pub use responses::*;
