//! PubChem Application - search facade and ports
//!
//! This crate defines the application layer with:
//! - The `HttpClient` port the transport adapter implements
//! - The search facade (render, send, classify, retry on 503)
//! - The PubChem HTTP error taxonomy

pub mod error;
pub mod ports;
pub mod retry;
pub mod search;

pub use error::{PubChemHttpError, SearchError, SearchResult};
pub use ports::{CancellationReceiver, CancellationToken, HttpClient, HttpClientError};
pub use retry::{RetryPolicy, retry};
pub use search::{PubChemSearch, classify};
