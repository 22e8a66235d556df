//! Notifications Screen
//!
//! Lists the signed-in user's notifications and publishes the unread count
//! to the session context after every successful load.

use collection_view::{CollectionController, CollectionView, SortSpec, StoreState};
use leptos::prelude::*;

use crate::api::{notification_source, NotificationSource};
use crate::components::{ErrorBanner, Pagination, SearchBox};
use crate::context::use_app_context;
use crate::formatters::format_timestamp;
use crate::hooks::{use_collection, CollectionHandle};
use crate::models::{Notification, NOTIFICATION_SEARCH_FIELDS};

type NotificationsHandle = CollectionHandle<Notification, (), NotificationSource>;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.user_id() {
        Some(user_id) => view! { <NotificationList user_id=user_id /> }.into_any(),
        None => view! {
            <section class="page notifications-page">
                <div class="empty-state">"Sign in to see your notifications."</div>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn NotificationList(user_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let handle: NotificationsHandle = use_collection(
        CollectionController::new(NOTIFICATION_SEARCH_FIELDS, config.notifications_page_size)
            .with_sort(SortSpec::descending("createdAt")),
        notification_source(&config, user_id, ctx.token().as_deref()),
    );
    let listing: Memo<CollectionView<Notification>> = Memo::new(move |_| handle.view());

    Effect::new(move |_| {
        let unread = handle.controller.with(|c| {
            (c.state() == StoreState::Loaded && c.refresh_error().is_none())
                .then(|| c.records().iter().filter(|n| !n.is_read).count())
        });
        if let Some(count) = unread {
            ctx.set_unread_count(count);
        }
    });

    view! {
        <section class="page notifications-page">
            <div class="page-header">
                <h1>"Notifications"</h1>
                <button class="btn" on:click=move |_| handle.refresh()>"Refresh"</button>
            </div>

            <SearchBox
                value=Signal::derive(move || listing.with(|v| v.query.clone()))
                on_search=move |query: String| handle.set_filter(query)
                placeholder="Search notifications..."
            />

            <ErrorBanner
                message=Signal::derive(move || listing.with(|v| v.refresh_error.clone()))
                on_dismiss=move |_: ()| handle.dismiss_errors()
            />

            <Show
                when=move || !listing.with(|v| v.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        {move || if listing.with(|v| v.is_loading()) { "Loading..." } else { "You're all caught up." }}
                    </div>
                }
            >
                <ul class="notification-list">
                    <For
                        each=move || listing.with(|v| v.rows.clone())
                        key=|n| (n.id, n.is_read)
                        let:notification
                    >
                        <li class=if notification.is_read { "notification" } else { "notification unread" }>
                            <div class="notification-title">{notification.title}</div>
                            <div class="notification-message">{notification.message.unwrap_or_default()}</div>
                            <time class="notification-time">
                                {format_timestamp(notification.created_at.as_deref())}
                            </time>
                        </li>
                    </For>
                </ul>
            </Show>

            <Pagination listing=listing on_goto=move |page: usize| handle.goto(page) />
        </section>
    }
}
