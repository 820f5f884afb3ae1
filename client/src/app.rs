//! Root application component with routing and the app-wide stores.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{busy_overlay::BusyOverlay, nav_bar::NavBar, toast_stack::ToastStack};
use crate::pages::{dashboard::DashboardPage, demo::DemoPage, home::HomePage};
use crate::state::AppStores;
use crate::util::storage::BrowserStorage;

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
/// Builds the session and UI stores, hands them to the chrome and each route
/// as props, and disposes them when the app unmounts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = AppStores::new_deferred(Arc::new(BrowserStorage));
    let AppStores { session, ui } = stores;

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| session.reload());
    on_cleanup(move || stores.dispose());

    view! {
        <Stylesheet id="leptos" href="/pkg/pantry.css"/>
        <Title text="Pantry"/>

        <Router>
            <NavBar session=session ui=ui/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <HomePage session=session/> }/>
                <Route path=StaticSegment("dashboard") view=move || view! { <DashboardPage session=session ui=ui/> }/>
                <Route path=StaticSegment("test") view=move || view! { <DemoPage session=session ui=ui/> }/>
            </Routes>
            <ToastStack ui=ui/>
            <BusyOverlay ui=ui/>
        </Router>
    }
}
