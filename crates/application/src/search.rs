//! Search facade
//!
//! Renders a validated search, POSTs it through the `HttpClient` port and
//! classifies the answer. Requests answered with 503 are retried under the
//! configured `RetryPolicy`; every other failure is returned at once.

use std::sync::Arc;

use pubchem_domain::{
    AssayQuery, CompoundQuery, PROLOG, RawResponse, RenderedRequest, SearchRequest, SubstanceQuery,
};

use crate::error::{PubChemHttpError, SearchError, SearchResult};
use crate::ports::{CancellationReceiver, HttpClient};
use crate::retry::{RetryPolicy, retry};

/// Client facade for the three PubChem search domains.
///
/// # Example
///
/// ```ignore
/// let search = PubChemSearch::new(Arc::new(ReqwestHttpClient::new()));
/// let query = CompoundQuery::new(CompoundNamespace::Name, ["aspirin"], OutputFormat::Json);
/// let response = search.search_compound(query).await?;
/// ```
pub struct PubChemSearch<C: HttpClient> {
    client: Arc<C>,
    prolog: String,
    retry: RetryPolicy,
}

impl<C: HttpClient> PubChemSearch<C> {
    /// Creates a facade against the public PubChem endpoint with the default retry policy.
    #[must_use]
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            prolog: PROLOG.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Targets another base URL (a mirror, or a local fake server).
    #[must_use]
    pub fn with_prolog(mut self, prolog: impl Into<String>) -> Self {
        self.prolog = prolog.into();
        self
    }

    /// Replaces the retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the base URL requests are rendered against.
    #[must_use]
    pub fn prolog(&self) -> &str {
        &self.prolog
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Renders a search against this facade's prolog without sending it.
    #[must_use]
    pub fn render(&self, request: &impl SearchRequest) -> RenderedRequest {
        request.render(&self.prolog)
    }

    /// Validates and sends a substance query.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Validation` before any network call if the query
    /// breaks a field rule, otherwise see [`Self::search`].
    pub async fn search_substance(&self, query: SubstanceQuery) -> SearchResult<RawResponse> {
        let search = query.validate()?;
        self.search(&search).await
    }

    /// Validates and sends a compound query.
    ///
    /// # Errors
    ///
    /// See [`Self::search_substance`].
    pub async fn search_compound(&self, query: CompoundQuery) -> SearchResult<RawResponse> {
        let search = query.validate()?;
        self.search(&search).await
    }

    /// Validates and sends an assay query.
    ///
    /// # Errors
    ///
    /// See [`Self::search_substance`].
    pub async fn search_assay(&self, query: AssayQuery) -> SearchResult<RawResponse> {
        let search = query.validate()?;
        self.search(&search).await
    }

    /// Sends an already validated search and returns the raw 2xx response.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Http` for a non-2xx answer (after retries for 503),
    /// or `SearchError::Transport` when no response could be obtained.
    pub async fn search(&self, request: &impl SearchRequest) -> SearchResult<RawResponse> {
        let rendered = self.render(request);
        tracing::debug!(
            uri = rendered.uri(),
            body_fields = rendered.body().len(),
            "sending PubChem search"
        );

        retry(&self.retry, SearchError::is_retryable, |attempt| {
            self.attempt(&rendered, attempt)
        })
        .await
    }

    /// Sends a search that can be aborted through `cancel`.
    ///
    /// Cancellation interrupts both an in-flight request and a retry wait.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Cancelled` if cancellation wins the race,
    /// otherwise see [`Self::search`].
    pub async fn search_with_cancellation(
        &self,
        request: &impl SearchRequest,
        mut cancel: CancellationReceiver,
    ) -> SearchResult<RawResponse> {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        tokio::select! {
            result = self.search(request) => result,
            () = cancel.cancelled() => {
                tracing::debug!("PubChem search cancelled");
                Err(SearchError::Cancelled)
            }
        }
    }

    async fn attempt(&self, request: &RenderedRequest, attempt: u32) -> SearchResult<RawResponse> {
        let response = self.client.execute(request).await?;
        tracing::debug!(
            attempt,
            status = response.status.as_u16(),
            duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            bytes = response.body.len(),
            "PubChem response received"
        );
        classify(response).map_err(SearchError::from)
    }
}

/// Passes 2xx responses through and maps every other status to its error kind.
///
/// # Errors
///
/// Returns the `PubChemHttpError` matching a non-2xx status.
pub fn classify(response: RawResponse) -> Result<RawResponse, PubChemHttpError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(PubChemHttpError::from_response(&response))
    }
}
