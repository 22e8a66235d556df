//! Pagination Component
//!
//! "Showing X to Y of Z results", page-number buttons and prev/next. Hidden
//! while everything fits on one page.

use collection_view::CollectionView;
use leptos::prelude::*;

#[component]
pub fn Pagination<R>(
    listing: Memo<CollectionView<R>>,
    #[prop(into)] on_goto: Callback<usize>,
) -> impl IntoView
where
    R: Clone + PartialEq + Send + Sync + 'static,
{
    let current = move || listing.with(|v| v.current_page);

    view! {
        <Show when=move || listing.with(|v| v.show_pagination())>
            <div class="pagination">
                <span class="pagination-summary">
                    {move || listing.with(|v| match v.showing() {
                        Some((first, last)) => {
                            format!("Showing {} to {} of {} results", first, last, v.filtered_count)
                        }
                        None => String::new(),
                    })}
                </span>
                <div class="pagination-controls">
                    <button
                        class="page-btn"
                        prop:disabled=move || !listing.with(|v| v.has_previous())
                        on:click=move |_| on_goto.run(current() - 1)
                    >
                        "Previous"
                    </button>
                    {move || listing.with(|v| v.page_numbers()).map(|page| {
                        view! {
                            <button
                                class=move || if current() == page { "page-btn active" } else { "page-btn" }
                                on:click=move |_| on_goto.run(page)
                            >
                                {page}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="page-btn"
                        prop:disabled=move || !listing.with(|v| v.has_next())
                        on:click=move |_| on_goto.run(current() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}
