//! Collection Store
//!
//! Holds the last fetched collection and its refresh lifecycle:
//!
//! ```text
//! Idle --begin--> Refreshing --ok--> Loaded (collection replaced)
//!                            --err-> Loaded (collection kept, error returned)
//! ```
//!
//! Refreshes may overlap; each completion is applied in arrival order and the
//! last successful response wins.

use crate::error::SourceResult;
use crate::record::Record;
use crate::source::CollectionSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreState {
    #[default]
    Idle,
    Loaded,
    Refreshing,
}

#[derive(Debug, Clone)]
pub struct CollectionStore<R> {
    records: Vec<R>,
    state: StoreState,
    in_flight: usize,
}

impl<R> Default for CollectionStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            state: StoreState::Idle,
            in_flight: 0,
        }
    }
}

impl<R: Record> CollectionStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully loaded collection, in server order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == StoreState::Refreshing
    }

    /// Mark a fetch as in flight. Readers keep seeing the previous collection.
    pub fn begin_refresh(&mut self) {
        self.in_flight += 1;
        self.state = StoreState::Refreshing;
    }

    /// Apply a fetch result. On failure the collection is left untouched and
    /// the error is handed back to the caller.
    pub fn finish_refresh(&mut self, result: SourceResult<Vec<R>>) -> SourceResult<()> {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state = if self.in_flight > 0 {
            StoreState::Refreshing
        } else {
            StoreState::Loaded
        };

        match result {
            Ok(records) => {
                log::debug!("collection replaced: {} records", records.len());
                self.records = records;
                Ok(())
            }
            Err(e) => {
                log::warn!("refresh failed, keeping {} records: {}", self.records.len(), e);
                Err(e)
            }
        }
    }

    /// Fetch from `source` and apply the result
    pub async fn refresh<S>(&mut self, source: &S) -> SourceResult<()>
    where
        S: CollectionSource<R> + ?Sized,
    {
        self.begin_refresh();
        let result = source.fetch_all().await;
        self.finish_refresh(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::record::JsonRecord;
    use serde_json::json;

    fn records(ids: &[u32]) -> Vec<JsonRecord> {
        ids.iter()
            .map(|id| serde_json::from_value(json!({ "id": id })).unwrap())
            .collect()
    }

    #[test]
    fn test_lifecycle() {
        let mut store = CollectionStore::<JsonRecord>::new();
        assert_eq!(store.state(), StoreState::Idle);

        store.begin_refresh();
        assert_eq!(store.state(), StoreState::Refreshing);

        store.finish_refresh(Ok(records(&[1, 2]))).unwrap();
        assert_eq!(store.state(), StoreState::Loaded);
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_collection() {
        let mut store = CollectionStore::<JsonRecord>::new();
        store.begin_refresh();
        store.finish_refresh(Ok(records(&[1, 2, 3]))).unwrap();

        store.begin_refresh();
        let err = store
            .finish_refresh(Err(SourceError::Transport("offline".into())))
            .unwrap_err();
        assert_eq!(err.to_string(), "offline");
        assert_eq!(store.state(), StoreState::Loaded);
        assert_eq!(store.records(), records(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_overlapping_refreshes_last_response_wins() {
        let mut store = CollectionStore::<JsonRecord>::new();
        store.begin_refresh();
        store.begin_refresh();

        store.finish_refresh(Ok(records(&[1]))).unwrap();
        assert!(store.is_refreshing());

        store.finish_refresh(Ok(records(&[1, 2]))).unwrap();
        assert_eq!(store.state(), StoreState::Loaded);
        assert_eq!(store.records().len(), 2);
    }
}
