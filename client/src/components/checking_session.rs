//! Placeholder shown while a route guard decides.

use leptos::prelude::*;

#[component]
pub fn CheckingSession() -> impl IntoView {
    view! {
        <div class="checking-session">
            <p>"Checking session..."</p>
        </div>
    }
}
