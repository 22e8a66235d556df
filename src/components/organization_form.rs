//! Organization Form Component
//!
//! Modal create form. Values live in the controller's `CreateForm`, so a
//! failed submit keeps what the user typed.

use leptos::prelude::*;

use crate::components::organizations_page::OrganizationsHandle;
use crate::models::NewOrganization;

#[component]
pub fn OrganizationForm(handle: OrganizationsHandle) -> impl IntoView {
    let controller = handle.controller;
    let submitting = move || controller.with(|c| c.form.is_submitting());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_missing = controller.with_untracked(|c| c.form.values.org_name.trim().is_empty());
        if name_missing {
            controller.update(|c| c.form.fail("Organization name is required"));
            return;
        }
        handle.create();
    };

    let field = move |label: &'static str, input_type: &'static str, get: fn(&NewOrganization) -> &String, set: fn(&mut NewOrganization) -> &mut String| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=input_type
                    prop:value=move || controller.with(|c| get(&c.form.values).clone())
                    prop:disabled=submitting
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        controller.update(|c| *set(&mut c.form.values) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <Show when=move || controller.with(|c| c.form.is_open())>
            <div class="modal-backdrop">
                <form class="modal org-form" on:submit=submit>
                    <h2>"New Organization"</h2>
                    {move || controller.with(|c| c.form.error().map(str::to_string)).map(|error| view! {
                        <div class="form-error">{error}</div>
                    })}
                    {field("Name", "text", |o| &o.org_name, |o| &mut o.org_name)}
                    {field("Description", "text", |o| &o.description, |o| &mut o.description)}
                    {field("Website", "url", |o| &o.org_url, |o| &mut o.org_url)}
                    {field("Secret", "password", |o| &o.org_secret, |o| &mut o.org_secret)}
                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn"
                            prop:disabled=submitting
                            on:click=move |_| controller.update(|c| c.form.cancel())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary" prop:disabled=submitting>
                            {move || if submitting() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
