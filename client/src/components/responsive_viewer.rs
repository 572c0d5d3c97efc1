//! Responsive viewer: embeds a URL inside a device-sized frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! The target comes from the `:url` route segment (percent-encoded), then the
//! `display_url` prop, then the default. All state lives in one
//! `RwSignal<ViewerState>`; the route effect and the iframe load handler are
//! its only writers besides the device controls.
//!
//! TRADE-OFFS
//! ==========
//! The iframe is mounted only after hydration. Server-rendered iframes start
//! loading before the WASM bundle attaches `on:load`, and a missed load
//! event would leave the overlay up for a page that actually loaded.
//! An embed that never loads (blocked framing, DNS failure) keeps the
//! overlay up indefinitely; the host gets no error signal.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::device_button::DeviceButton;
use crate::state::viewer::{DeviceProfile, ViewerState};
use crate::util::url::resolve_target_url;

#[component]
pub fn ResponsiveViewer(#[prop(optional, into)] display_url: Option<String>) -> impl IntoView {
    let params = use_params_map();
    let target = Memo::new(move |_| {
        let param = params.read().get("url");
        resolve_target_url(param.as_deref(), display_url.as_deref())
    });

    let viewer = RwSignal::new(ViewerState::new(target.get_untracked()));

    // Re-derive on route changes; a new URL re-enters loading.
    Effect::new(move || {
        let url = target.get();
        viewer.maybe_update(|s| s.set_target_url(url));
    });

    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    let on_select = Callback::new(move |device: DeviceProfile| {
        viewer.maybe_update(|s| s.select_device(device));
    });

    view! {
        <div class="viewer">
            <div class="viewer__panel">
                <header class="viewer__header">
                    <h1 class="viewer__title">
                        "Responsive Design Tester "
                        <span class="viewer__device">{move || format!(": {}", viewer.with(|s| s.device().id()))}</span>
                    </h1>
                    <div class="viewer__devices">
                        {DeviceProfile::ALL
                            .into_iter()
                            .map(|device| {
                                let active = Signal::derive(move || viewer.with(|s| s.device() == device));
                                view! { <DeviceButton device=device active=active on_select=on_select/> }
                            })
                            .collect_view()}
                    </div>
                </header>

                <div class="viewer__stage">
                    <div class="viewer__frame" style=move || viewer.with(ViewerState::frame_style)>
                        <Show when=move || viewer.with(ViewerState::has_target)>
                            <Show when=move || viewer.with(ViewerState::is_loading)>
                                <div class="viewer__loading">
                                    <div class="spinner" aria-hidden="true"></div>
                                    <p class="viewer__loading-text">"Loading..."</p>
                                </div>
                            </Show>
                            <Show when=move || hydrated.get()>
                                <iframe
                                    class="viewer__iframe"
                                    title="Responsive Viewer"
                                    src=move || viewer.with(|s| s.target_url().to_owned())
                                    on:load=move |_| viewer.update(ViewerState::finish_load)
                                ></iframe>
                            </Show>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
