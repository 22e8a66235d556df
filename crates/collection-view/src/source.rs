//! Remote Collection Source
//!
//! Transport boundary for a collection. Implementations perform the network
//! call and report failure distinctly from success; they hold no local state
//! and never retry.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::record::Record;

/// Read side of a remote collection
///
/// `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait CollectionSource<R: Record> {
    /// Fetch the whole collection in server order
    async fn fetch_all(&self) -> SourceResult<Vec<R>>;
}

/// Extension for collections that accept create and delete
#[async_trait(?Send)]
pub trait MutableSource<R: Record>: CollectionSource<R> {
    /// Body sent on create
    type Payload;

    async fn create(&self, payload: &Self::Payload) -> SourceResult<()>;

    async fn delete(&self, id: &R::Id) -> SourceResult<()>;
}
