//! Collection Controller
//!
//! Per-screen view state over a [`CollectionStore`]: filter, sort and page
//! specs, the create form, and error banners. [`CollectionController::view`]
//! derives everything the presentation layer renders.
//!
//! Mutations come in two halves (`begin_*`/`finish_*`) so a UI event loop can
//! apply results when they arrive; the `async` methods chain both halves for
//! callers that can hold the controller across an await.

use std::ops::RangeInclusive;

use crate::error::{SourceError, SourceResult};
use crate::form::CreateForm;
use crate::pipeline;
use crate::query::{FilterSpec, PageSpec, SortIndicator, SortSpec};
use crate::record::Record;
use crate::source::{CollectionSource, MutableSource};
use crate::store::{CollectionStore, StoreState};

/// Everything a screen renders for one collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<R> {
    pub rows: Vec<R>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub sort: SortSpec,
    pub query: String,
    pub state: StoreState,
    pub refresh_error: Option<String>,
    pub mutation_error: Option<String>,
}

impl<R> CollectionView<R> {
    /// Documented empty state, not an error
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn is_loading(&self) -> bool {
        self.state == StoreState::Refreshing
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page controls are only worth showing when there is more than one page
    pub fn show_pagination(&self) -> bool {
        self.filtered_count > self.page_size
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// 1-based inclusive range of the rows shown ("Showing X to Y of Z")
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }

    pub fn sort_indicator(&self, key: &str) -> SortIndicator {
        self.sort.indicator(key)
    }
}

/// Result of a delete intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined the confirmation gate
    Cancelled,
    Deleted,
}

#[derive(Debug, Clone)]
pub struct CollectionController<R, P = ()> {
    store: CollectionStore<R>,
    filter_fields: &'static [&'static str],
    filter: FilterSpec,
    sort: SortSpec,
    page: PageSpec,
    pub form: CreateForm<P>,
    refresh_error: Option<String>,
    mutation_error: Option<String>,
}

impl<R: Record, P: Default> CollectionController<R, P> {
    /// `filter_fields` are the fields the free-text query searches.
    pub fn new(filter_fields: &'static [&'static str], page_size: usize) -> Self {
        Self {
            store: CollectionStore::new(),
            filter_fields,
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
            page: PageSpec::new(page_size),
            form: CreateForm::new(),
            refresh_error: None,
            mutation_error: None,
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    pub fn state(&self) -> StoreState {
        self.store.state()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page(&self) -> PageSpec {
        self.page
    }

    pub fn mutation_error(&self) -> Option<&str> {
        self.mutation_error.as_deref()
    }

    pub fn refresh_error(&self) -> Option<&str> {
        self.refresh_error.as_deref()
    }

    pub fn dismiss_errors(&mut self) {
        self.refresh_error = None;
        self.mutation_error = None;
    }

    // ========================
    // View transforms
    // ========================

    /// A new result set invalidates the page position.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = FilterSpec::new(query);
        self.page = self.page.with_page(1);
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(String::new());
    }

    /// Sort-header click; the page position is kept.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = self.sort.toggled(key);
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Back to page 1, e.g. when the source is re-queried with new filters
    pub fn reset_page(&mut self) {
        self.page = self.page.with_page(1);
    }

    pub fn goto(&mut self, page: usize) {
        self.page = self.page.with_page(page).clamped(self.filtered_count());
    }

    pub fn next_page(&mut self) {
        self.goto(self.page.current_page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.goto(self.page.current_page().saturating_sub(1));
    }

    fn filtered_count(&self) -> usize {
        pipeline::filter(self.store.records(), &self.filter, self.filter_fields).len()
    }

    pub fn view(&self) -> CollectionView<R> {
        let result = pipeline::apply(
            self.store.records(),
            &self.filter,
            self.filter_fields,
            &self.sort,
            &self.page,
        );
        CollectionView {
            rows: result.rows,
            filtered_count: result.filtered_count,
            total_pages: result.total_pages,
            current_page: result.page.current_page(),
            page_size: result.page.page_size(),
            sort: self.sort.clone(),
            query: self.filter.query().to_string(),
            state: self.store.state(),
            refresh_error: self.refresh_error.clone(),
            mutation_error: self.mutation_error.clone(),
        }
    }

    // ========================
    // Refresh
    // ========================

    pub fn begin_refresh(&mut self) {
        self.store.begin_refresh();
    }

    /// Apply a fetch result; the page is clamped to the new collection.
    pub fn finish_refresh(&mut self, result: SourceResult<Vec<R>>) -> SourceResult<()> {
        let outcome = self.store.finish_refresh(result);
        match &outcome {
            Ok(()) => {
                self.refresh_error = None;
                self.page = self.page.clamped(self.filtered_count());
            }
            Err(e) => self.refresh_error = Some(e.to_string()),
        }
        outcome
    }

    pub async fn refresh<S>(&mut self, source: &S) -> SourceResult<()>
    where
        S: CollectionSource<R> + ?Sized,
    {
        self.begin_refresh();
        let result = source.fetch_all().await;
        self.finish_refresh(result)
    }

    // ========================
    // Mutations
    // ========================

    pub fn begin_create(&mut self) {
        self.form.begin_submit();
    }

    /// Returns `true` when the caller should refresh.
    pub fn finish_create(&mut self, result: SourceResult<()>) -> bool {
        match result {
            Ok(()) => {
                log::info!("record created");
                self.form.succeed();
                self.mutation_error = None;
                true
            }
            Err(e) => {
                log::warn!("create failed: {}", e);
                self.form.fail(e.to_string());
                false
            }
        }
    }

    /// Returns `true` when the caller should refresh. The rendered page is
    /// left as is on failure.
    pub fn finish_delete(&mut self, id: &R::Id, result: SourceResult<()>) -> bool {
        match result {
            Ok(()) => {
                log::info!("record {} deleted", id);
                self.mutation_error = None;
                true
            }
            Err(e) => {
                log::warn!("delete of {} failed: {}", id, e);
                self.mutation_error = Some(e.to_string());
                false
            }
        }
    }
}

impl<R: Record, P: Default + Clone> CollectionController<R, P> {
    /// Submit the form values; refresh on success.
    ///
    /// A failed follow-up refresh is reported through `refresh_error`, not
    /// as a create failure.
    pub async fn create<S>(&mut self, source: &S) -> Result<(), SourceError>
    where
        S: MutableSource<R, Payload = P> + ?Sized,
    {
        let payload = self.form.values.clone();
        self.begin_create();
        let result = source.create(&payload).await;
        let outcome = result.clone();
        if self.finish_create(result) {
            let _ = self.refresh(source).await;
        }
        outcome
    }

    /// Delete after `confirm` says yes; refresh on success.
    pub async fn delete<S, F>(&mut self, source: &S, id: R::Id, confirm: F) -> Result<DeleteOutcome, SourceError>
    where
        S: MutableSource<R, Payload = P> + ?Sized,
        F: FnOnce(&R::Id) -> bool,
    {
        if !confirm(&id) {
            return Ok(DeleteOutcome::Cancelled);
        }
        let result = source.delete(&id).await;
        let outcome = result.clone();
        if self.finish_delete(&id, result) {
            let _ = self.refresh(source).await;
        }
        outcome.map(|()| DeleteOutcome::Deleted)
    }
}
