//! # Quill Shared
//!
//! Wire types shared by the server and its clients: request bodies, query
//! strings and the response envelopes.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
