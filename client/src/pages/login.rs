//! Login page: local validation, identity API sign-in, role-based redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::error::ValidationError;
use crate::net::identity::{LoginFieldErrors, validate_credentials};
use crate::state::session::SessionContext;
use crate::util::guard::signed_in_landing;

fn field_message(error: Option<ValidationError>) -> String {
    error.map(|e| e.to_string()).unwrap_or_default()
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    let api_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        if let Some(route) = signed_in_landing(&session.load()) {
            navigate_signed_in(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        api_error.set(None);
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => {
                field_errors.set(LoginFieldErrors::default());
                credentials
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::login(&config, &credentials).await {
                    Ok(signed_in) => {
                        session.save(&signed_in);
                        crate::util::notify::alert(&crate::net::identity::welcome_message(&signed_in));
                        username.set(String::new());
                        password.set(String::new());
                        navigate(signed_in.role.landing_route(), NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        api_error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, config, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__brand">"Newsdesk"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Input username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.with(|f| f.username.is_some())>
                        <p class="field-error">{move || field_message(field_errors.get().username)}</p>
                    </Show>

                    <label class="login-label" for="password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="password"
                            class="login-input"
                            type=move || password_input_type(show_password.get())
                            placeholder="Input password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="password-field__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || field_errors.with(|f| f.password.is_some())>
                        <p class="field-error">{move || field_message(field_errors.get().password)}</p>
                    </Show>

                    <Show when=move || api_error.with(Option::is_some)>
                        <p class="login-message">{move || api_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
