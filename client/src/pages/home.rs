//! Landing page: navbar, hero, projects, about, contact.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::content::SITE_TITLE;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=SITE_TITLE/>
        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <ProjectsSection/>
                <AboutSection/>
                <ContactSection/>
            </main>
            <Footer/>
        </div>
    }
}
