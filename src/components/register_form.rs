//! Register Form Component
//!
//! Registration answers with no session; on success the user is sent to
//! the login screen.

use collection_view::{Credentials, NavLink};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
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
        if let Err(message) = credentials.validate_registration(&confirm.get_untracked()) {
            set_error.set(Some(message.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::sign_up(&config, &credentials).await {
                Ok(()) => {
                    log::info!("registered {}", credentials.username);
                    ctx.navigate(NavLink::Login);
                }
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    let field = move |label: &'static str, input_type: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=input_type
                    prop:value=move || value.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="page auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Create Account"</h1>
                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                {field("Username", "text", username, set_username)}
                {field("Password", "password", password, set_password)}
                {field("Confirm Password", "password", confirm, set_confirm)}
                <button type="submit" class="btn primary" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already registered? "
                    <button type="button" class="link" on:click=move |_| ctx.navigate(NavLink::Login)>
                        "Sign In"
                    </button>
                </p>
            </form>
        </section>
    }
}
