//! Compiled-in site copy: hero text, about paragraphs, tech stack, projects.

pub mod projects;

pub const SITE_TITLE: &str = "Portafolio | Desarrollador Web";
pub const BRAND: &str = "Portfolio";

pub const HERO_TITLE: &str = "Desarrollador Web";
pub const HERO_SUBTITLE: &str = "Creando experiencias digitales modernas y funcionales";
pub const HERO_TAGLINE: &str = "Especializado en React, TypeScript y tecnologías modernas del ecosistema web";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Soy un desarrollador web apasionado por crear experiencias digitales modernas y funcionales. \
     Mi enfoque se centra en escribir código limpio, mantenible y escalable, utilizando las últimas \
     tecnologías y mejores prácticas de la industria.",
    "Me especializo en el desarrollo frontend con React y TypeScript, pero también tengo experiencia \
     trabajando con tecnologías backend y en la creación de aplicaciones full-stack. Siempre estoy \
     aprendiendo nuevas tecnologías y mejorando mis habilidades para ofrecer soluciones de calidad.",
    "Cuando no estoy programando, disfruto explorando nuevas herramientas, contribuyendo a proyectos \
     open source y compartiendo conocimiento con la comunidad de desarrolladores.",
];

pub const TECH_STACK: [&str; 8] =
    ["React", "TypeScript", "Next.js", "Node.js", "Tailwind CSS", "Framer Motion", "Vite", "Git"];
