//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::toast_host::ToastHost;
use crate::pages::about::AboutPage;
use crate::pages::author::{AuthorPage, NewsAuthorPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::news::NewsPage;
use crate::pages::news_detail::NewsDetailPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::oauth2_callback::OAuth2CallbackPage;
use crate::pages::register::RegisterPage;
use crate::state::session;
use crate::state::toasts::ToastState;

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
/// Provides the session and toast contexts, wires the HTTP layer's
/// unauthorized hook to a hard navigation, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_signal = RwSignal::new(session::restore_session());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session_signal);
    provide_context(toasts);

    // A 401 means the persisted token is gone; leave the SPA entirely so
    // every in-memory state resets on the login page.
    #[cfg(feature = "hydrate")]
    crate::net::http::set_unauthorized_handler(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::config::routes::LOGIN);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/newsdesk.css"/>
        <Title text="News Management"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("id")) view=NewsDetailPage/>
                    <Route
                        path=(StaticSegment("news"), ParamSegment("id"), StaticSegment("author"))
                        view=NewsAuthorPage
                    />
                    <Route path=(StaticSegment("authors"), ParamSegment("id")) view=AuthorPage/>
                    <Route
                        path=(StaticSegment("oauth2"), StaticSegment("callback"))
                        view=OAuth2CallbackPage
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
