//! Controller Integration Tests
//!
//! Drives a CollectionController against an in-memory source.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use serde_json::json;

use crate::controller::{CollectionController, DeleteOutcome};
use crate::error::{SourceError, SourceResult};
use crate::record::{JsonRecord, Record};
use crate::source::{CollectionSource, MutableSource};
use crate::store::StoreState;

const FIELDS: &[&str] = &["orgName", "description", "orgUrl"];

#[derive(Debug, Clone, Default, PartialEq)]
struct NewOrg {
    org_name: String,
    description: String,
}

#[derive(Default)]
struct FakeSource {
    records: RefCell<Vec<JsonRecord>>,
    next_id: Cell<u32>,
    fetches: Cell<usize>,
    fail_fetch: Cell<bool>,
    create_error: RefCell<Option<SourceError>>,
    delete_error: RefCell<Option<SourceError>>,
}

impl FakeSource {
    fn with_records(records: Vec<JsonRecord>) -> Self {
        let source = Self::default();
        source.next_id.set(records.len() as u32 + 1);
        *source.records.borrow_mut() = records;
        source
    }
}

#[async_trait(?Send)]
impl CollectionSource<JsonRecord> for FakeSource {
    async fn fetch_all(&self) -> SourceResult<Vec<JsonRecord>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail_fetch.get() {
            return Err(SourceError::Transport("connection refused".into()));
        }
        Ok(self.records.borrow().clone())
    }
}

#[async_trait(?Send)]
impl MutableSource<JsonRecord> for FakeSource {
    type Payload = NewOrg;

    async fn create(&self, payload: &NewOrg) -> SourceResult<()> {
        if let Some(err) = self.create_error.borrow().clone() {
            return Err(err);
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.records.borrow_mut().push(org(id, &payload.org_name, Some(&payload.description)));
        Ok(())
    }

    async fn delete(&self, id: &String) -> SourceResult<()> {
        if let Some(err) = self.delete_error.borrow().clone() {
            return Err(err);
        }
        self.records.borrow_mut().retain(|r| &r.id() != id);
        Ok(())
    }
}

fn org(id: u32, name: &str, description: Option<&str>) -> JsonRecord {
    serde_json::from_value(json!({
        "id": id,
        "orgName": name,
        "description": description,
        "orgUrl": null,
    }))
    .unwrap()
}

/// ids 1..=n named "Org A", "Org B", ...
fn alphabet(n: u32) -> Vec<JsonRecord> {
    (1..=n)
        .map(|i| org(i, &format!("Org {}", (b'A' + (i - 1) as u8) as char), None))
        .collect()
}

fn row_ids(ctrl: &CollectionController<JsonRecord, NewOrg>) -> Vec<String> {
    ctrl.view().rows.iter().map(|r| r.id()).collect()
}

async fn loaded(source: &FakeSource) -> CollectionController<JsonRecord, NewOrg> {
    let mut ctrl = CollectionController::new(FIELDS, 10);
    ctrl.refresh(source).await.expect("initial refresh");
    ctrl
}

#[tokio::test]
async fn test_initial_state_is_idle_and_empty() {
    let ctrl = CollectionController::<JsonRecord, NewOrg>::new(FIELDS, 10);
    let view = ctrl.view();
    assert_eq!(view.state, StoreState::Idle);
    assert!(view.is_empty());
    assert!(!view.has_previous());
    assert!(!view.has_next());
    assert_eq!(view.showing(), None);
}

#[tokio::test]
async fn test_twelve_records_paginate_ten_and_two() {
    let source = FakeSource::with_records(alphabet(12));
    let mut ctrl = loaded(&source).await;

    let view = ctrl.view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.showing(), Some((1, 10)));
    assert!(view.show_pagination());
    assert!(!view.has_previous());
    assert!(view.has_next());
    assert_eq!(row_ids(&ctrl), (1..=10).map(|i| i.to_string()).collect::<Vec<_>>());

    ctrl.next_page();
    let view = ctrl.view();
    assert_eq!(row_ids(&ctrl), vec!["11", "12"]);
    assert_eq!(view.showing(), Some((11, 12)));
    assert!(view.has_previous());
    assert!(!view.has_next());

    // next at the last page stays put
    ctrl.next_page();
    assert_eq!(ctrl.page().current_page(), 2);
}

#[tokio::test]
async fn test_filter_resets_page_and_clamps() {
    let mut records = alphabet(12);
    records.push(org(13, "Acme Labs", None));
    records.push(org(14, "Widgets", Some("an ACME subsidiary")));
    records.push(org(15, "Roadrunner", Some("rival of acme")));
    let source = FakeSource::with_records(records);
    let mut ctrl = loaded(&source).await;

    ctrl.goto(2);
    assert_eq!(ctrl.page().current_page(), 2);

    ctrl.set_filter("acme");
    let view = ctrl.view();
    assert_eq!(view.filtered_count, 3);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(!view.show_pagination());
    assert_eq!(row_ids(&ctrl), vec!["13", "14", "15"]);

    ctrl.clear_filter();
    assert_eq!(ctrl.view().filtered_count, 15);
}

#[tokio::test]
async fn test_sort_keeps_page_position() {
    let source = FakeSource::with_records(alphabet(12));
    let mut ctrl = loaded(&source).await;
    ctrl.goto(2);

    ctrl.toggle_sort("id");
    assert_eq!(ctrl.page().current_page(), 2);
    // descending by id: page 2 holds the two smallest ids
    assert_eq!(row_ids(&ctrl), vec!["2", "1"]);

    ctrl.toggle_sort("orgName");
    assert_eq!(ctrl.page().current_page(), 2);
    assert_eq!(row_ids(&ctrl), vec!["11", "12"]);
}

#[tokio::test]
async fn test_goto_is_clamped() {
    let source = FakeSource::with_records(alphabet(12));
    let mut ctrl = loaded(&source).await;
    ctrl.goto(9);
    assert_eq!(ctrl.page().current_page(), 2);
    ctrl.goto(0);
    assert_eq!(ctrl.page().current_page(), 1);
    ctrl.previous_page();
    assert_eq!(ctrl.page().current_page(), 1);
}

#[tokio::test]
async fn test_delete_refreshes_and_clamps_to_new_last_page() {
    let source = FakeSource::with_records(alphabet(11));
    let mut ctrl = loaded(&source).await;
    ctrl.goto(2);
    assert_eq!(row_ids(&ctrl), vec!["11"]);

    let outcome = ctrl.delete(&source, "5".to_string(), |_| true).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(source.fetches.get(), 2);
    assert!(ctrl.records().iter().all(|r| r.id() != "5"));

    let view = ctrl.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert_eq!(ctrl.page().current_page(), 1);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let source = FakeSource::with_records(alphabet(3));
    let mut ctrl = loaded(&source).await;

    let mut asked = None;
    let outcome = ctrl
        .delete(&source, "2".to_string(), |id| {
            asked = Some(id.clone());
            false
        })
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(asked.as_deref(), Some("2"));
    assert_eq!(source.records.borrow().len(), 3);
    assert_eq!(source.fetches.get(), 1);
}

#[tokio::test]
async fn test_delete_failure_keeps_page() {
    let source = FakeSource::with_records(alphabet(12));
    let mut ctrl = loaded(&source).await;
    ctrl.goto(2);
    let before = ctrl.view().rows;

    *source.delete_error.borrow_mut() = Some(SourceError::server(403, "forbidden"));
    let err = ctrl.delete(&source, "11".to_string(), |_| true).await.unwrap_err();
    assert_eq!(err.status(), Some(403));

    let view = ctrl.view();
    assert_eq!(view.rows, before);
    assert_eq!(view.mutation_error.as_deref(), Some("forbidden"));
    assert_eq!(source.fetches.get(), 1);
}

#[tokio::test]
async fn test_create_failure_shows_message_and_keeps_input() {
    let source = FakeSource::with_records(alphabet(2));
    let mut ctrl = loaded(&source).await;

    ctrl.form.open();
    ctrl.form.values = NewOrg {
        org_name: "Org A".into(),
        description: "again".into(),
    };
    *source.create_error.borrow_mut() = Some(SourceError::server(400, "duplicate name"));

    let err = ctrl.create(&source).await.unwrap_err();
    assert_eq!(err.to_string(), "duplicate name");
    assert_eq!(ctrl.form.error(), Some("duplicate name"));
    assert!(ctrl.form.is_open());
    assert!(!ctrl.form.is_submitting());
    assert_eq!(ctrl.form.values.org_name, "Org A");
    assert_eq!(source.fetches.get(), 1);
}

#[tokio::test]
async fn test_create_success_closes_form_and_refreshes() {
    let source = FakeSource::with_records(alphabet(2));
    let mut ctrl = loaded(&source).await;

    ctrl.form.open();
    ctrl.form.values.org_name = "Newco".into();
    ctrl.create(&source).await.unwrap();

    assert!(!ctrl.form.is_open());
    assert_eq!(ctrl.form.values, NewOrg::default());
    assert_eq!(source.fetches.get(), 2);
    assert_eq!(ctrl.view().filtered_count, 3);
}

#[tokio::test]
async fn test_failed_refresh_is_stale_but_available() {
    let source = FakeSource::with_records(alphabet(4));
    let mut ctrl = loaded(&source).await;

    source.fail_fetch.set(true);
    assert!(ctrl.refresh(&source).await.is_err());
    let view = ctrl.view();
    assert_eq!(view.state, StoreState::Loaded);
    assert_eq!(view.filtered_count, 4);
    assert_eq!(view.refresh_error.as_deref(), Some("connection refused"));

    source.fail_fetch.set(false);
    ctrl.refresh(&source).await.unwrap();
    assert_eq!(ctrl.view().refresh_error, None);
}

#[tokio::test]
async fn test_refresh_after_shrink_clamps_page() {
    let source = FakeSource::with_records(alphabet(25));
    let mut ctrl = loaded(&source).await;
    ctrl.goto(3);

    *source.records.borrow_mut() = alphabet(8);
    ctrl.refresh(&source).await.unwrap();
    assert_eq!(ctrl.page().current_page(), 1);
}

#[tokio::test]
async fn test_requeried_source_starts_at_first_page() {
    let source = FakeSource::with_records(alphabet(25));
    let mut ctrl = loaded(&source).await;
    ctrl.goto(2);

    // New server-side filters still yield more than one page
    let requeried = FakeSource::with_records(alphabet(22));
    ctrl.reset_page();
    ctrl.refresh(&requeried).await.unwrap();
    assert_eq!(ctrl.page().current_page(), 1);
    assert_eq!(ctrl.view().showing(), Some((1, 10)));
}
