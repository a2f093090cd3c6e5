//! HTTP response domain types

mod raw;

pub use raw::{RawResponse, StatusCode};
