//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, viewer::ViewerPage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Provides the shared `UiState` context, keeps the `<html>` theme in sync
/// with it, and sets up the two routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Load the stored preference once hydrated, then mirror every change.
    Effect::new(move || ui.update(|u| u.dark_mode = dark_mode::read_preference()));
    Effect::new(move || dark_mode::apply(ui.with(|u| u.dark_mode)));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("responsive-viewer") view=ViewerPage/>
                <Route path=(StaticSegment("responsive-viewer"), ParamSegment("url")) view=ViewerPage/>
            </Routes>
        </Router>
    }
}
