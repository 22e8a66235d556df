//! Search Box Component
//!
//! Free-text filter input with a clear button. Every edit, including
//! clearing, is reported through `on_search`.

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <Show when=move || !value.with(String::is_empty)>
                <button
                    type="button"
                    class="search-clear"
                    title="Clear search"
                    on:click=move |_| on_search.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
