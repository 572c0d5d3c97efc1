//! Standalone responsive viewer route (`/responsive-viewer[/:url]`).

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::responsive_viewer::ResponsiveViewer;

#[component]
pub fn ViewerPage() -> impl IntoView {
    view! {
        <Title text="Responsive Design Tester"/>
        <ResponsiveViewer/>
    }
}
