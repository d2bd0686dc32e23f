//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{
    admin::AdminDashboardPage, article::ArticleDetailPage, article_create::CreateArticlePage, login::LoginPage,
    user::UserHomePage,
};
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and API configuration contexts and sets up
/// client-side routing. `/article/create` is declared before the
/// `/article/{id}` pattern so it is never captured as an id.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionContext::new());
    provide_context(ApiConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/newsdesk.css"/>
        <Title text="Newsdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("user") view=UserHomePage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("article"), StaticSegment("create")) view=CreateArticlePage/>
                <Route path=(StaticSegment("article"), ParamSegment("id")) view=ArticleDetailPage/>
            </Routes>
        </Router>
    }
}
