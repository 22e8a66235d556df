//! ToolsAI Frontend App
//!
//! Provides the session context and switches screens on the current page.

use collection_view::{nav_links, ApiConfig, NavLink};
use leptos::prelude::*;

use crate::components::{LoginForm, ModelsPage, NavBar, NotificationsPage, OrganizationsPage, RegisterForm};
use crate::context::AppContext;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    ctx.init();
    provide_context(ctx);

    // Drop back to Explore when the role no longer grants the current page
    Effect::new(move |_| {
        let page = ctx.page();
        let reachable = nav_links(ctx.role()).contains(&page)
            || matches!(page, NavLink::Login | NavLink::Register)
            || (page == NavLink::Profile && ctx.role().is_signed_in());
        if !reachable {
            log::debug!("{:?} not available, showing Explore", page);
            ctx.navigate(NavLink::Explore);
        }
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match ctx.page() {
                    NavLink::Explore => view! { <ModelsPage /> }.into_any(),
                    NavLink::Organizations => view! { <OrganizationsPage /> }.into_any(),
                    NavLink::Notifications => view! { <NotificationsPage /> }.into_any(),
                    NavLink::Login => view! { <LoginForm /> }.into_any(),
                    NavLink::Register => view! { <RegisterForm /> }.into_any(),
                    NavLink::Profile => view! { <ProfilePage /> }.into_any(),
                    other => view! { <ComingSoon title=other.label() /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ProfilePage() -> impl IntoView {
    let ctx = crate::context::use_app_context();
    move || {
        ctx.session().map(|s| {
            view! {
                <section class="page profile-page">
                    <h1>{s.username}</h1>
                    <p>"Role: " {format!("{:?}", s.role)}</p>
                    <p>{s.email.unwrap_or_default()}</p>
                </section>
            }
        })
    }
}

#[component]
fn ComingSoon(title: &'static str) -> impl IntoView {
    view! {
        <section class="page">
            <h1>{title}</h1>
            <div class="empty-state">"This section is not available yet."</div>
        </section>
    }
}
