//! Device profile control for the responsive viewer.

use leptos::prelude::*;

use crate::state::viewer::DeviceProfile;

/// The active profile cannot be re-selected.
fn is_selectable(active: bool) -> bool {
    !active
}

fn button_class(active: bool) -> &'static str {
    if active { "device-button device-button--active" } else { "device-button" }
}

/// One device toggle. Disabled while its profile is active so it cannot be
/// re-selected.
#[component]
pub fn DeviceButton(
    device: DeviceProfile,
    #[prop(into)] active: Signal<bool>,
    on_select: Callback<DeviceProfile>,
) -> impl IntoView {
    view! {
        <button
            class=move || button_class(active.get())
            disabled=move || !is_selectable(active.get())
            aria-label=device.label()
            title=device.label()
            on:click=move |_| {
                if is_selectable(active.get_untracked()) {
                    on_select.run(device);
                }
            }
        >
            <span class="device-button__icon">{device.icon()}</span>
        </button>
    }
}
