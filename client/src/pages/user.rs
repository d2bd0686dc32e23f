//! Reader home: banner, cursor-paged news feed, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! `UserOnly` route. The feed starts on the default topic once the guard
//! allows the visit; typing in the banner search re-queries from the first
//! page after the debounce window, and `Next` follows the upstream cursor.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::checking_session::CheckingSession;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::sidebar::LogoutButton;
use crate::config::ApiConfig;
use crate::state::listing::{CursorPaging, FeedState, FetchTicket, ListingState, ListingView, LoadStatus};
use crate::util::debounce::{SEARCH_DEBOUNCE, debounced};
use crate::util::guard::{PageAccess, use_route_guard};

fn next_label(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Next" }
}

/// Issue a feed fetch and apply the result if it is still the latest.
fn load_feed(config: ApiConfig, feed: RwSignal<FeedState>, ticket: FetchTicket<Option<String>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::news::fetch_feed(&config, ticket.position.as_deref(), &ticket.query).await;
        feed.try_update(|f| f.complete(&ticket, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, feed, ticket);
    }
}

#[component]
pub fn UserHomePage() -> impl IntoView {
    let guard = use_route_guard(PageAccess::UserOnly);
    let config = expect_context::<ApiConfig>();

    let feed = RwSignal::new(ListingState::new(CursorPaging::default()));
    let query = RwSignal::new(String::new());

    Effect::new(move || {
        if guard.with(|g| g.is_allowed()) && feed.with_untracked(|f| f.status == LoadStatus::Idle) {
            if let Some(ticket) = feed.try_update(|f| f.begin_search("")) {
                load_feed(config, feed, ticket);
            }
        }
    });

    let on_search = debounced(
        SEARCH_DEBOUNCE,
        Callback::new(move |text: String| {
            if let Some(ticket) = feed.try_update(|f| f.begin_search(&text)) {
                load_feed(config, feed, ticket);
            }
        }),
    );

    let on_next = move |_| {
        let Some(position) = feed.with(|f| f.paging.next_position()) else {
            return;
        };
        if let Some(ticket) = feed.try_update(|f| {
            let query = f.query.clone();
            f.begin_fetch(position, &query)
        }) {
            load_feed(config, feed, ticket);
        }
    };

    view! {
        <Show when=move || guard.with(|g| g.is_allowed()) fallback=|| view! { <CheckingSession/> }>
            <Hero query on_search/>
            <section class="feed">
                {move || match feed.with(ListingState::view) {
                    ListingView::Loading => view! { <p class="feed__status">"Loading articles..."</p> }.into_any(),
                    ListingView::Error(message) => view! {
                        <div class="feed__status feed__status--error">
                            <p>{format!("Error: {message}")}</p>
                            <p class="feed__hint">"Check that the API key is valid and the daily request limit has not been reached."</p>
                        </div>
                    }
                    .into_any(),
                    ListingView::Empty => view! { <p class="feed__status">"No articles found."</p> }.into_any(),
                    ListingView::Items => view! {
                        <div class="feed__grid">
                            {feed
                                .with(|f| f.items.clone())
                                .into_iter()
                                .map(|article| view! { <ArticleCard article/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }}
                <div class="feed__more">
                    <button
                        class="btn"
                        disabled=move || feed.with(|f| f.is_loading() || !f.paging.has_more())
                        on:click=on_next
                    >
                        {move || next_label(feed.with(ListingState::is_loading))}
                    </button>
                </div>
            </section>
            <Footer/>
            <LogoutButton class="btn btn--danger logout-fab"/>
        </Show>
    }
}
