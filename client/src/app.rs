//! Root application component with routing and the session handle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::pages::{
    admin_appeals::AdminAppealsPage, admin_bundles::AdminBundlesPage, admin_users::AdminUsersPage,
    analytics::AnalyticsPage, banned::BannedPage, dashboard::DashboardPage, google_callback::GoogleCallbackPage,
    login::LoginPage, register::RegisterPage,
};
use crate::state::auth::Session;

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
/// Owns the one [`Session`], starts identity resolution on boot, and hands
/// the session to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session.resolve());

    let guarded = move |page: fn(Session) -> AnyView| {
        move || view! { <RouteGuard session=session>{page(session)}</RouteGuard> }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/linkpage.css"/>
        <Title text="LinkPage"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <LoginPage session=session/> }/>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage session=session/> }/>
                <Route path=StaticSegment("register") view=move || view! { <RegisterPage session=session/> }/>
                <Route
                    path=(StaticSegment("google"), StaticSegment("callback"))
                    view=move || view! { <GoogleCallbackPage session=session/> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=guarded(|s| view! { <DashboardPage session=s/> }.into_any())
                />
                <Route path=StaticSegment("banned") view=guarded(|s| view! { <BannedPage session=s/> }.into_any())/>
                <Route
                    path=StaticSegment("analytics")
                    view=guarded(|s| view! { <AnalyticsPage session=s/> }.into_any())
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=guarded(|s| view! { <AdminUsersPage session=s/> }.into_any())
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("appeals"))
                    view=guarded(|s| view! { <AdminAppealsPage session=s/> }.into_any())
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("bundles"))
                    view=guarded(|s| view! { <AdminBundlesPage session=s/> }.into_any())
                />
            </Routes>
        </Router>
    }
}
