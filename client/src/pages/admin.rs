//! Admin dashboard: searchable, page-numbered article table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminOnly` route, mounted at both `/admin` and `/admin/dashboard`. Every
//! fetch goes through [`ArticleTableState::begin_fetch`], so a slow response
//! for an abandoned page or query is dropped instead of overwriting the
//! table.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::article_table::ArticleTable;
use crate::components::checking_session::CheckingSession;
use crate::components::pagination_bar::PaginationBar;
use crate::components::sidebar::{AdminSidebar, CREATE_ARTICLE_ROUTE};
use crate::config::ApiConfig;
use crate::state::listing::{
    ArticleTableState, FetchTicket, ListingState, ListingView, LoadStatus, PageNumberPaging,
};
use crate::state::session::SessionContext;
use crate::util::debounce::{SEARCH_DEBOUNCE, debounced};
use crate::util::format::avatar_initial;
use crate::util::guard::{PageAccess, use_route_guard};

fn total_label(loading: bool, total_found: u64) -> String {
    if loading { "Loading...".to_owned() } else { total_found.to_string() }
}

fn load_page(config: ApiConfig, table: RwSignal<ArticleTableState>, ticket: FetchTicket<u32>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::news::fetch_top_news(&config, ticket.position, &ticket.query).await;
        table.try_update(|t| t.complete(&ticket, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, table, ticket);
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let guard = use_route_guard(PageAccess::AdminOnly);
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ApiConfig>();

    let table = RwSignal::new(ListingState::new(PageNumberPaging::new(config.admin_page_size)));
    let query = RwSignal::new(String::new());
    let sidebar_open = RwSignal::new(false);

    Effect::new(move || {
        if guard.with(|g| g.is_allowed()) && table.with_untracked(|t| t.status == LoadStatus::Idle) {
            if let Some(ticket) = table.try_update(|t| t.begin_search("")) {
                load_page(config, table, ticket);
            }
        }
    });

    let on_search = debounced(
        SEARCH_DEBOUNCE,
        Callback::new(move |text: String| {
            if let Some(ticket) = table.try_update(|t| t.begin_search(&text)) {
                load_page(config, table, ticket);
            }
        }),
    );

    let on_select_page = Callback::new(move |page: u32| {
        if let Some(ticket) = table.try_update(|t| {
            let query = t.query.clone();
            t.begin_fetch(page, &query)
        }) {
            load_page(config, table, ticket);
        }
    });

    let display_name = move || session.username().unwrap_or_else(|| "Admin".to_owned());
    let paging = Signal::derive(move || table.with(|t| t.paging.clone()));
    let loading = Signal::derive(move || table.with(ListingState::is_loading));

    view! {
        <Show when=move || guard.with(|g| g.is_allowed()) fallback=|| view! { <CheckingSession/> }>
            <div class="admin-layout">
                <AdminSidebar open=sidebar_open/>
                <div class="admin-main">
                    <header class="admin-header">
                        <button class="admin-header__menu" aria-label="Open menu" on:click=move |_| sidebar_open.set(true)>
                            "☰"
                        </button>
                        <h1 class="admin-header__title">"Articles"</h1>
                        <span class="admin-header__user">
                            <span class="admin-header__name">{display_name}</span>
                            <span class="avatar">{move || avatar_initial(&display_name())}</span>
                        </span>
                    </header>
                    <section class="admin-panel">
                        <div class="admin-panel__head">
                            <h2>
                                "Total Articles: "
                                {move || total_label(loading.get(), table.with(|t| t.paging.total_found))}
                            </h2>
                            <a class="btn" href=CREATE_ARTICLE_ROUTE>"+ Add Articles"</a>
                        </div>
                        <div class="admin-panel__filters">
                            <input
                                class="search-input"
                                type="search"
                                placeholder="Search by title"
                                prop:value=move || query.get()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    query.set(value.clone());
                                    on_search.run(value);
                                }
                            />
                        </div>
                        {move || match table.with(ListingState::view) {
                            ListingView::Loading => view! { <p class="admin-panel__status">"Loading articles..."</p> }.into_any(),
                            ListingView::Error(message) => {
                                view! { <p class="admin-panel__status admin-panel__status--error">{format!("Error: {message}")}</p> }
                                    .into_any()
                            }
                            ListingView::Empty => view! { <p class="admin-panel__status">"No articles found."</p> }.into_any(),
                            ListingView::Items => view! { <ArticleTable articles=table.with(|t| t.items.clone())/> }.into_any(),
                        }}
                        <PaginationBar paging loading on_select=on_select_page/>
                    </section>
                </div>
            </div>
        </Show>
    }
}
