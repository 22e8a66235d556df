//! Navigation Bar Component
//!
//! Role-gated links, theme toggle and the unread-notification badge.

use collection_view::{account_links, nav_links, NavLink};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::Theme;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let link_button = move |link: NavLink| {
        let on_click = move |_| {
            if link == NavLink::Logout {
                ctx.sign_out();
            } else {
                ctx.navigate(link);
            }
        };
        let badge = (link == NavLink::Notifications).then(|| {
            view! {
                <Show when=move || { ctx.unread_count() > 0 }>
                    <span class="nav-badge">{move || ctx.unread_count()}</span>
                </Show>
            }
        });
        view! {
            <button
                class=move || if ctx.page() == link { "nav-link active" } else { "nav-link" }
                title=link.path()
                on:click=on_click
            >
                {link.label()}
                {badge}
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <button class="navbar-brand" on:click=move |_| ctx.navigate(NavLink::Explore)>
                "ToolsAI"
            </button>
            <div class="navbar-links">
                {move || nav_links(ctx.role()).iter().map(|&link| link_button(link)).collect_view()}
            </div>
            <div class="navbar-account">
                {move || ctx.session().map(|s| view! { <span class="navbar-user">{s.username}</span> })}
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || match ctx.theme() {
                        Theme::Light => "☾",
                        Theme::Dark => "☀",
                    }}
                </button>
                {move || account_links(ctx.role()).iter().map(|&link| link_button(link)).collect_view()}
            </div>
        </nav>
    }
}
