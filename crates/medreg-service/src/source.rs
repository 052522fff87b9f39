//! # Fetch-Source Seam
//!
//! The service does not know it is talking to the Federal Register; it
//! holds a [`DeadlineSource`] and awaits a list. Tests inject scripted
//! sources to simulate outages and control the fetched data.

use anyhow::Result;
use futures::future::BoxFuture;

use medreg_core::Deadline;
use medreg_federal::{fetch_federal_deadlines, SearchDocuments};

/// An asynchronous producer of deadline records.
///
/// Implementations should recover what they can internally (the federal
/// sweep returns partial results on per-term failure); an `Err` from this
/// trait means the whole source produced nothing usable.
pub trait DeadlineSource: Send + Sync {
    /// Fetch the source's current deadlines, unsorted.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Deadline>>>;
}

/// The production federal source: the healthcare term sweep over a
/// [`SearchDocuments`] backend.
pub struct FederalSource<S> {
    client: S,
}

impl<S: SearchDocuments> FederalSource<S> {
    /// Wrap a search backend as a deadline source.
    pub fn new(client: S) -> Self {
        Self { client }
    }
}

impl<S: SearchDocuments> DeadlineSource for FederalSource<S> {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Deadline>>> {
        // The sweep absorbs per-term failures itself and cannot error;
        // the Result is for sources without that luxury.
        Box::pin(async move { Ok(fetch_federal_deadlines(&self.client).await) })
    }
}
