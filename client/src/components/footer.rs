use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">"Newsdesk"</span>
            <p class="site-footer__note">"© 2025 Newsdesk. All rights reserved."</p>
        </footer>
    }
}
