//! Organizations Screen
//!
//! Searchable, sortable, paginated table with a create modal and confirmed
//! delete.

use collection_view::{CollectionController, CollectionView};
use leptos::prelude::*;

use crate::api::{organization_source, OrganizationSource};
use crate::components::{ErrorBanner, OrganizationForm, Pagination, SearchBox, SortHeader};
use crate::context::use_app_context;
use crate::formatters::format_timestamp;
use crate::hooks::{confirm_dialog, use_collection, CollectionHandle};
use crate::models::{NewOrganization, Organization, ORGANIZATION_SEARCH_FIELDS};

pub type OrganizationsHandle = CollectionHandle<Organization, NewOrganization, OrganizationSource>;

const DELETE_PROMPT: &str = "Are you sure you want to delete this organization?";

#[component]
pub fn OrganizationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let handle: OrganizationsHandle = use_collection(
        CollectionController::new(ORGANIZATION_SEARCH_FIELDS, config.organizations_page_size),
        organization_source(&config, ctx.token().as_deref()),
    );
    let listing: Memo<CollectionView<Organization>> = Memo::new(move |_| handle.view());

    let on_sort = Callback::new(move |key: &'static str| handle.toggle_sort(key));
    let indicator = move |key: &'static str| Signal::derive(move || listing.with(|v| v.sort_indicator(key)));

    let empty_message = move || {
        listing.with(|v| {
            if v.query.is_empty() {
                "No organizations yet.".to_string()
            } else {
                format!("No organizations match \"{}\".", v.query)
            }
        })
    };

    view! {
        <section class="page organizations-page">
            <div class="page-header">
                <h1>"Organizations"</h1>
                <button class="btn primary" on:click=move |_| handle.controller.update(|c| c.form.open())>
                    "+ New Organization"
                </button>
            </div>

            <SearchBox
                value=Signal::derive(move || listing.with(|v| v.query.clone()))
                on_search=move |query: String| handle.set_filter(query)
                placeholder="Search organizations..."
            />

            <ErrorBanner
                message=Signal::derive(move || listing.with(|v| v.mutation_error.clone().or_else(|| v.refresh_error.clone())))
                on_dismiss=move |_: ()| handle.dismiss_errors()
            />

            <Show
                when=move || !listing.with(|v| v.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        {move || if listing.with(|v| v.is_loading()) { "Loading...".to_string() } else { empty_message() }}
                    </div>
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="ID" key="id" indicator=indicator("id") on_sort=on_sort />
                            <SortHeader label="Name" key="orgName" indicator=indicator("orgName") on_sort=on_sort />
                            <th>"Description"</th>
                            <SortHeader label="Website" key="orgUrl" indicator=indicator("orgUrl") on_sort=on_sort />
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || listing.with(|v| v.rows.clone())
                            key=|org| org.id
                            let:org
                        >
                            <OrganizationRow org=org handle=handle />
                        </For>
                    </tbody>
                </table>
            </Show>

            <Pagination listing=listing on_goto=move |page: usize| handle.goto(page) />

            <OrganizationForm handle=handle />
        </section>
    }
}

#[component]
fn OrganizationRow(org: Organization, handle: OrganizationsHandle) -> impl IntoView {
    let id = org.id;
    let website = org.org_url.clone().filter(|url| !url.is_empty());

    view! {
        <tr>
            <td>{org.id}</td>
            <td class="org-name">{org.org_name}</td>
            <td class="org-description">{org.description.unwrap_or_default()}</td>
            <td>
                {website.map(|url| view! {
                    <a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a>
                })}
            </td>
            <td>
                <span class=if org.is_active { "status active" } else { "status inactive" }>
                    {if org.is_active { "Active" } else { "Inactive" }}
                </span>
            </td>
            <td>{format_timestamp(org.created_at.as_deref())}</td>
            <td>
                <button
                    class="btn danger small"
                    on:click=move |_| handle.delete(id, |_| confirm_dialog(DELETE_PROMPT))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
