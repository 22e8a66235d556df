//! Sortable Column Header

use collection_view::SortIndicator;
use leptos::prelude::*;

/// Table header cell; clicking toggles the sort on `key`
#[component]
pub fn SortHeader(
    label: &'static str,
    key: &'static str,
    #[prop(into)] indicator: Signal<SortIndicator>,
    #[prop(into)] on_sort: Callback<&'static str>,
) -> impl IntoView {
    let arrow = move || match indicator.get() {
        SortIndicator::Unsorted => "↕",
        SortIndicator::Ascending => "↑",
        SortIndicator::Descending => "↓",
    };

    view! {
        <th
            class=move || if indicator.get() == SortIndicator::Unsorted { "sortable" } else { "sortable sorted" }
            on:click=move |_| on_sort.run(key)
        >
            {label}
            <span class="sort-arrow">{arrow}</span>
        </th>
    }
}
