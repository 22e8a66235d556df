//! Transform Pipeline
//!
//! Pure functions composed in a fixed order:
//! filter -> sort -> paginate. None of them can fail.

use crate::query::{FilterSpec, PageSpec, SortDirection, SortSpec};
use crate::record::{compare_optional, Record};

/// Keep records where any of `fields` contains the query (case-insensitive).
/// A missing field never matches.
pub fn filter<R: Record>(records: &[R], spec: &FilterSpec, fields: &[&str]) -> Vec<R> {
    if spec.is_empty() {
        return records.to_vec();
    }
    let needle = spec.query().to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields.iter().any(|key| {
                record
                    .field(key)
                    .map(|value| value.to_lowercase_string().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Stable sort by `spec.key`; equal keys keep their input order in both directions.
pub fn sort<R: Record>(mut records: Vec<R>, spec: &SortSpec) -> Vec<R> {
    records.sort_by(|a, b| {
        let ord = compare_optional(a.field(&spec.key).as_ref(), b.field(&spec.key).as_ref());
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    records
}

/// Slice `[(page-1)*size, page*size)`. Out-of-range pages yield an empty slice;
/// callers clamp with [`PageSpec::clamped`] first.
pub fn paginate<R: Clone>(records: &[R], spec: &PageSpec) -> Vec<R> {
    let start = spec.current_page().saturating_sub(1).saturating_mul(spec.page_size());
    if start >= records.len() {
        return Vec::new();
    }
    let end = (start + spec.page_size()).min(records.len());
    records[start..end].to_vec()
}

/// Result of running the whole pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<R> {
    pub rows: Vec<R>,
    pub filtered_count: usize,
    pub total_pages: usize,
    /// Page actually shown, after clamping
    pub page: PageSpec,
}

/// filter -> sort -> clamp -> paginate
pub fn apply<R: Record>(
    records: &[R],
    filter_spec: &FilterSpec,
    fields: &[&str],
    sort_spec: &SortSpec,
    page_spec: &PageSpec,
) -> PageView<R> {
    let sorted = sort(filter(records, filter_spec, fields), sort_spec);
    let page = page_spec.clamped(sorted.len());
    PageView {
        rows: paginate(&sorted, &page),
        filtered_count: sorted.len(),
        total_pages: page.total_pages(sorted.len()),
        page,
    }
}
