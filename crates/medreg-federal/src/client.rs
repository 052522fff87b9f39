//! # Federal Register Search Client
//!
//! A thin reqwest client for the `documents.json` search endpoint, behind
//! the object-safe [`SearchDocuments`] trait so the aggregation pipeline
//! can run against canned responses in tests.

use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;
use tracing::debug;

use crate::types::DocumentSearchResponse;

/// Production base URL of the Federal Register API.
pub const FEDERAL_REGISTER_API: &str = "https://www.federalregister.gov/api/v1";

/// Per-request timeout. A hung term search becomes that term's failure
/// instead of stalling the whole fetch cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the search client.
#[derive(Error, Debug)]
pub enum FederalError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("federal register returned {status}: {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body, for the log line.
        body: String,
    },
}

/// Knobs for one search request.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Results per page.
    pub per_page: u32,
    /// 1-based page number.
    pub page: u32,
    /// Document type filters, in the API's short codes.
    pub document_types: Vec<&'static str>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            per_page: 20,
            page: 1,
            document_types: vec!["RULE", "PRORULE", "NOTICE"],
        }
    }
}

/// The seam between the aggregation pipeline and the network.
pub trait SearchDocuments: Send + Sync {
    /// Search documents matching `term`, newest first.
    fn search<'a>(
        &'a self,
        term: &'a str,
        options: &'a SearchOptions,
    ) -> BoxFuture<'a, Result<DocumentSearchResponse, FederalError>>;
}

/// HTTP client for the Federal Register document search API.
pub struct FederalRegisterClient {
    client: reqwest::Client,
    base_url: String,
}

impl FederalRegisterClient {
    /// Client against the production API with the default timeout.
    pub fn new() -> Result<Self, FederalError> {
        Self::with_base_url(FEDERAL_REGISTER_API, DEFAULT_TIMEOUT)
    }

    /// Client against an arbitrary base URL (no trailing slash needed).
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, FederalError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue one paginated search request, newest first.
    pub async fn search_documents(
        &self,
        term: &str,
        options: &SearchOptions,
    ) -> Result<DocumentSearchResponse, FederalError> {
        let url = format!("{}/documents.json", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("conditions[term]", term.to_string()),
            ("per_page", options.per_page.to_string()),
            ("page", options.page.to_string()),
            ("order", "newest".to_string()),
        ];
        for doc_type in &options.document_types {
            query.push(("conditions[type][]", doc_type.to_string()));
        }

        debug!(term, page = options.page, "searching federal register");
        let resp = self.client.get(&url).query(&query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FederalError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

impl SearchDocuments for FederalRegisterClient {
    fn search<'a>(
        &'a self,
        term: &'a str,
        options: &'a SearchOptions,
    ) -> BoxFuture<'a, Result<DocumentSearchResponse, FederalError>> {
        Box::pin(self.search_documents(term, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_query_all_three_types() {
        let options = SearchOptions::default();
        assert_eq!(options.document_types, ["RULE", "PRORULE", "NOTICE"]);
        assert_eq!(options.per_page, 20);
        assert_eq!(options.page, 1);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client =
            FederalRegisterClient::with_base_url("http://localhost:8080/", DEFAULT_TIMEOUT)
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
