//! Public feed banner with the signed-in user and the search box.

use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::util::format::avatar_initial;

/// Banner for the user home page.
///
/// `on_search` receives every keystroke; callers debounce it.
#[component]
pub fn Hero(query: RwSignal<String>, on_search: Callback<String>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let display_name = move || session.username().unwrap_or_else(|| "Reader".to_owned());

    view! {
        <section class="hero">
            <nav class="hero__nav">
                <span class="hero__brand">"Newsdesk"</span>
                <span class="hero__user">
                    <span class="avatar">{move || avatar_initial(&display_name())}</span>
                    <span class="hero__username">{display_name}</span>
                </span>
            </nav>
            <div class="hero__copy">
                <p class="hero__kicker">"Newsdesk"</p>
                <h1 class="hero__title">"The Journal: Design Resources, Interviews, and Industry News"</h1>
                <p class="hero__subtitle">"Your daily dose of design insights!"</p>
            </div>
            <div class="hero__search">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search article"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.set(value.clone());
                        on_search.run(value);
                    }
                />
            </div>
        </section>
    }
}
