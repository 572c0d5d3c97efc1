//! Page footer.

use leptos::prelude::*;

use crate::content::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© " {BRAND} " · Hecho con Rust y Leptos"</p>
        </footer>
    }
}
