//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::gallery::GalleryState;
use crate::util::theme::{self, Theme};

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
/// Provides the shared theme and gallery contexts and sets up routing for
/// the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    let gallery = RwSignal::new(GalleryState::default());

    provide_context(theme);
    provide_context(gallery);

    // Resolve the stored-or-ambient preference once on the client; after
    // that the attribute just tracks the signal.
    Effect::new(move || {
        theme.set(theme::read_preference());
    });
    Effect::new(move || theme::apply(theme.get()));

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Folio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
