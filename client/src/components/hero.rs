//! Landing hero banner.

use leptos::prelude::*;

use crate::content::{HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE};

/// Radial highlight that follows the pointer across the hero.
fn spotlight_style(x: i32, y: i32) -> String {
    format!("background: radial-gradient(600px circle at {x}px {y}px, rgba(14, 165, 233, 0.15), transparent 40%);")
}

/// Full-height hero with title, tagline and a jump to the projects grid.
#[component]
pub fn Hero() -> impl IntoView {
    let pointer = RwSignal::new((0, 0));

    // Track the pointer across the whole window so the glow keeps up after
    // the pointer leaves the hero.
    let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        pointer.set((ev.client_x(), ev.client_y()));
    });
    on_cleanup(move || handle.remove());

    view! {
        <section class="hero">
            <div class="hero__spotlight" style=move || {
                let (x, y) = pointer.get();
                spotlight_style(x, y)
            }></div>

            <div class="section-container hero__content">
                <h1 class="hero__title">
                    <span class="hero__title-gradient">{HERO_TITLE}</span>
                </h1>
                <p class="hero__subtitle">{HERO_SUBTITLE}</p>
                <p class="hero__tagline">{HERO_TAGLINE}</p>
                <a href="#projects" class="btn btn--primary hero__cta">"Ver Proyectos"</a>
            </div>

            <div class="hero__scroll-indicator" aria-hidden="true">
                <div class="hero__scroll-dot"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_style_centers_on_pointer() {
        let style = spotlight_style(120, 48);
        assert!(style.contains("circle at 120px 48px"));
    }

    #[test]
    fn spotlight_style_accepts_pointer_outside_hero() {
        let style = spotlight_style(-40, 2400);
        assert!(style.contains("circle at -40px 2400px"));
    }
}
