//! Fixed top navigation bar with section anchors and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `UiState` context: the theme toggle persists
//! the preference through `util::dark_mode`, and the mobile menu closes
//! whenever a link is followed.

use leptos::prelude::*;

use crate::content::BRAND;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::url::VIEWER_PATH;

/// In-page section anchors, in display order.
const SECTION_LINKS: [(&str, &str); 3] = [("#projects", "Proyectos"), ("#about", "Sobre Mí"), ("#contact", "Contacto")];

/// Top navigation bar for the landing page.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close_menu = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_menu);

    let links_class = move || {
        if ui.with(|u| u.menu_open) {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">{BRAND}</a>

                <button
                    class="btn navbar__menu-toggle"
                    aria-label="Menú"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
                </button>

                <ul class=links_class>
                    {SECTION_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li>
                                    <a href=href class="navbar__link" on:click=close_menu>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <a href=VIEWER_PATH class="navbar__link" on:click=close_menu>"Viewer"</a>
                    </li>
                    <li>
                        <button
                            class="btn navbar__theme-toggle"
                            title="Cambiar tema"
                            on:click=move |_| {
                                let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                                ui.update(|u| u.dark_mode = next);
                            }
                        >
                            {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
