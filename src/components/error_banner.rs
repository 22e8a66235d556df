//! Error Banner Component

use leptos::prelude::*;

/// Dismissable error line; renders nothing while `message` is `None`
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{text}</span>
                    <button class="error-dismiss" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
