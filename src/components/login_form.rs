//! Login Form Component

use collection_view::{Credentials, NavLink};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = Credentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(message) = credentials.validate() {
            set_error.set(Some(message.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::sign_in(&config, &credentials).await {
                Ok(session) => {
                    ctx.sign_in(session);
                    ctx.navigate(NavLink::Explore);
                }
                Err(e) => {
                    log::warn!("sign-in failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="page auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Sign In"</h1>
                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                <label class="form-field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn primary" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-switch">
                    "No account? "
                    <button type="button" class="link" on:click=move |_| ctx.navigate(NavLink::Register)>
                        "Register"
                    </button>
                </p>
            </form>
        </section>
    }
}
