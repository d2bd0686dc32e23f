//! Admin navigation sidebar and the shared logout button.
//!
//! Collapses off-canvas on narrow screens; `open` is owned by the page so the
//! header's menu button can toggle it.

use leptos::prelude::*;

use crate::state::draft::DASHBOARD_ROUTE;
use crate::util::guard::use_logout;

pub const CREATE_ARTICLE_ROUTE: &str = "/article/create";

#[component]
pub fn AdminSidebar(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__head">
                <span class="sidebar__brand">"Newsdesk"</span>
                <button class="sidebar__close" aria-label="Close menu" on:click=move |_| open.set(false)>
                    "✕"
                </button>
            </div>
            <nav class="sidebar__nav">
                <a class="sidebar__link" href=DASHBOARD_ROUTE>"Articles"</a>
                <a class="sidebar__link" href=CREATE_ARTICLE_ROUTE>"Create article"</a>
                <LogoutButton class="btn sidebar__logout"/>
            </nav>
        </aside>
        <Show when=move || open.get()>
            <div class="sidebar__scrim" on:click=move |_| open.set(false)></div>
        </Show>
    }
}

/// Clears the session and returns to the login page.
#[component]
pub fn LogoutButton(#[prop(into)] class: String) -> impl IntoView {
    let logout = use_logout();

    view! {
        <button class=class on:click=move |_| logout()>
            "Logout"
        </button>
    }
}
