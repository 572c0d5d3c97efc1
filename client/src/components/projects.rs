//! Projects grid.
//!
//! Each card links to the project's source and demo, and opens the demo in
//! the responsive viewer so visitors can check it at phone and tablet widths.

use leptos::prelude::*;

use crate::content::projects::{PROJECTS, Project};
use crate::util::url::viewer_href;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section-container">
            <h2 class="section-title">"Proyectos"</h2>
            <p class="section-subtitle">"Una selección de trabajos recientes"</p>
            <div class="projects-grid">
                {PROJECTS.iter().map(|&project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </section>
    }
}

/// Single project card.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>
            <ul class="project-card__tags">
                {project.technologies.iter().map(|&tech| view! { <li class="chip chip--small">{tech}</li> }).collect_view()}
            </ul>
            <div class="project-card__links">
                {project.github.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="project-card__link">"Código"</a>
                })}
                {project.demo.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="project-card__link">"Demo"</a>
                    <a href=viewer_href(href) class="project-card__link">"Vista responsive"</a>
                })}
            </div>
        </article>
    }
}
