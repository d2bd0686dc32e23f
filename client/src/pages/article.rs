//! Article detail page with "other articles" below.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::RelatedArticleCard;
use crate::components::checking_session::CheckingSession;
use crate::components::footer::Footer;
use crate::config::ApiConfig;
use crate::net::types::ArticleDetail;
use crate::state::detail::{DetailState, DetailStatus, DetailTicket};
use crate::state::session::SessionContext;
use crate::util::format::{avatar_initial, published_date};
use crate::util::guard::{PageAccess, use_route_guard};

fn byline(published_at: &str) -> String {
    format!("{} • Created by Admin", published_date(published_at))
}

fn load_detail(config: ApiConfig, state: RwSignal<DetailState>, ticket: DetailTicket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::news::fetch_article_detail(&config, &ticket.id).await;
        let wants_related = state.try_update(|s| s.complete_detail(&ticket, result)).unwrap_or(false);
        if wants_related {
            let related = crate::net::news::fetch_related(&config, &ticket.id).await;
            state.try_update(|s| s.complete_related(&ticket, related));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, state, ticket);
    }
}

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let guard = use_route_guard(PageAccess::Authenticated);
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let state = RwSignal::new(DetailState::default());
    let article_id = move || params.with(|p| p.get("id").unwrap_or_default());

    // Re-runs when a related link changes the id under the same route.
    Effect::new(move || {
        if !guard.with(|g| g.is_allowed()) {
            return;
        }
        let id = article_id();
        if let Some(ticket) = state.try_update(|s| s.begin(&id)) {
            load_detail(config, state, ticket);
        }
    });

    let initial = move || session.username().map_or_else(|| "?".to_owned(), |u| avatar_initial(&u));

    view! {
        <Show when=move || guard.with(|g| g.is_allowed()) fallback=|| view! { <CheckingSession/> }>
            <div class="article-page">
                <header class="article-page__header">
                    <a class="article-page__brand" href="/">"Newsdesk"</a>
                    <span class="avatar">{initial}</span>
                </header>
                {move || match state.with(|s| s.status.clone()) {
                    DetailStatus::Loading => view! { <p class="article-page__status">"Loading article..."</p> }.into_any(),
                    DetailStatus::Failed(message) => view! {
                        <div class="article-page__status article-page__status--error">
                            <p>{format!("Error: {message}")}</p>
                            <p class="article-page__hint">"Check that the article id is correct and the API key is valid."</p>
                        </div>
                    }
                    .into_any(),
                    DetailStatus::Ready(detail) => view! { <ArticleBody detail/> }.into_any(),
                }}
                <Show when=move || state.with(|s| !s.related.is_empty())>
                    <section class="related">
                        <h2 class="related__title">"Other articles"</h2>
                        <div class="related__grid">
                            {move || {
                                state
                                    .with(|s| s.related.clone())
                                    .into_iter()
                                    .map(|article| view! { <RelatedArticleCard article/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>
                </Show>
                <Footer/>
            </div>
        </Show>
    }
}

#[component]
fn ArticleBody(detail: ArticleDetail) -> impl IntoView {
    let ArticleDetail { article, description, snippet, source_name } = detail;
    let meta = byline(&article.published_at);
    let source_url = article.source_url.clone();
    let link_text = source_url.clone();
    let hero = article.image_url.clone().map(|src| {
        let alt = article.title.clone();
        view! {
            <div class="article-body__hero">
                <img src=src alt=alt/>
            </div>
        }
    });

    view! {
        <main class="article-body">
            <p class="article-body__meta">{meta}</p>
            <h1 class="article-body__title">{article.title}</h1>
            {hero}
            <p class="article-body__description">{description}</p>
            {(!snippet.is_empty()).then(|| view! { <p class="article-body__snippet">{snippet}</p> })}
            <p class="article-body__source">
                {format!("Source: {source_name} | Read full article: ")}
                <a href=source_url target="_blank" rel="noopener noreferrer">{link_text}</a>
            </p>
        </main>
    }
}
