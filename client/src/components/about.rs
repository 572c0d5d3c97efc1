//! About section: bio paragraphs and the tech-stack chips.

use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, TECH_STACK};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section-container section--alt">
            <h2 class="section-title">"Sobre Mí"</h2>
            <p class="section-subtitle">"Conoce más sobre mi experiencia y habilidades"</p>

            <div class="about">
                <div class="card about__bio">
                    {ABOUT_PARAGRAPHS.iter().map(|&text| view! { <p class="about__paragraph">{text}</p> }).collect_view()}
                </div>

                <h3 class="about__stack-title">"Stack Tecnológico"</h3>
                <ul class="about__stack">
                    {TECH_STACK.iter().map(|&tech| view! { <li class="chip">{tech}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
