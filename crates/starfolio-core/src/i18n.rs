//! Translation tables.
//!
//! The one-page variant uses fixed five-item navigation sets; the routed
//! variant looks strings up by key.

use crate::Language;

const NAV_PT: [&str; 5] = ["Home", "Sobre", "Projetos", "Skills", "Contato"];
const NAV_EN: [&str; 5] = ["Home", "About", "Projects", "Skills", "Contact"];
const NAV_ES: [&str; 5] = ["Inicio", "Sobre mí", "Proyectos", "Habilidades", "Contacto"];

/// Navigation labels of the one-page variant, in section order.
pub fn nav_items(lang: Language) -> &'static [&'static str; 5] {
    match lang {
        Language::Pt => &NAV_PT,
        Language::En => &NAV_EN,
        Language::Es => &NAV_ES,
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.work", "Work"),
    ("nav.contact", "Contact"),
    ("home.role", "Software Developer"),
    ("home.explore", "Explore"),
    ("about.title", "About\nMe"),
    (
        "about.p1",
        "I am a Software Developer dedicated to bridging the gap between robust backend logic and fluid mobile experiences.",
    ),
    (
        "about.p2",
        "My passion lies in creating clean, efficient code and scalable architectures within the JavaScript ecosystem, Python, and C#.",
    ),
    (
        "about.p3",
        "Core philosophy: Building software that is not only functional but also maintainable and pleasant to use.",
    ),
    ("about.focus", "Current Focus"),
    (
        "about.focus.text",
        "Deepening expertise in React Native for cross-platform mobile development and developing the 'Verdin' project.",
    ),
    ("about.tech", "Tech Stack"),
    ("work.title", "Selected\nWork"),
    (
        "work.desc1",
        "Modern Game Hub SPA built with React, Vite & TailwindCSS. Implements custom Canvas game engines, global state management with Zustand, and seamless JWT authentication integration.",
    ),
    (
        "work.desc2",
        "A cross-platform mobile application currently in development, focusing on fluid user experiences and robust backend integration.",
    ),
    ("contact.title", "Let's\nConnect"),
    (
        "contact.subtitle",
        "Open to collaboration on innovative mobile apps and Python/C# backend systems.",
    ),
    ("contact.name", "Your name"),
    ("contact.email", "you@email.com"),
    ("contact.message", "Tell me about your project..."),
    ("contact.send", "Send Message"),
    ("contact.sending", "Sending..."),
    ("contact.sent", "Message Sent!"),
    ("contact.sent.text", "I'll get back to you soon."),
    ("contact.socials", "SOCIAL"),
    ("contact.location", "LOCATION"),
    ("contact.available", "Available for Projects"),
    ("home.exp", "1 Yr Exp."),
    ("home.projects", "10+ Projects"),
    ("ui.top", "top"),
];

const PT: &[(&str, &str)] = &[
    ("nav.home", "Início"),
    ("nav.about", "Sobre"),
    ("nav.work", "Projetos"),
    ("nav.contact", "Contato"),
    ("home.role", "Desenvolvedor de Software"),
    ("home.explore", "Explorar"),
    ("about.title", "Sobre\nMim"),
    (
        "about.p1",
        "Sou um Desenvolvedor de Software dedicado a preencher a lacuna entre uma lógica de backend robusta e experiências móveis fluidas.",
    ),
    (
        "about.p2",
        "Minha paixão é criar código limpo e eficiente, além de arquiteturas escaláveis no ecossistema JavaScript, Python e C#.",
    ),
    (
        "about.p3",
        "Filosofia principal: Construir software que não seja apenas funcional, mas também sustentável e agradável de usar.",
    ),
    ("about.focus", "Foco Atual"),
    (
        "about.focus.text",
        "Aprofundando conhecimentos em React Native para desenvolvimento mobile multiplataforma e desenvolvendo o projeto 'Verdin'.",
    ),
    ("about.tech", "Tecnologias"),
    ("work.title", "Projetos em\nDestaque"),
    (
        "work.desc1",
        "Modern Game Hub SPA construído com React, Vite e TailwindCSS. Implementa motores de jogos personalizados em Canvas, gerenciamento de estado global com Zustand e integração perfeita de autenticação JWT.",
    ),
    (
        "work.desc2",
        "Um aplicativo móvel multiplataforma atualmente em desenvolvimento, com foco em experiências de usuário fluidas e integração robusta de backend.",
    ),
    ("contact.title", "Vamos\nConectar"),
    (
        "contact.subtitle",
        "Aberto a colaborações em aplicativos móveis inovadores e sistemas backend em Python/C#.",
    ),
    ("contact.name", "Seu nome"),
    ("contact.email", "seu@email.com"),
    ("contact.message", "Conta-me sobre seu projeto..."),
    ("contact.send", "Enviar Mensagem"),
    ("contact.sending", "Enviando..."),
    ("contact.sent", "Mensagem Enviada!"),
    ("contact.sent.text", "Retorno em breve."),
    ("contact.socials", "REDES SOCIAIS"),
    ("contact.location", "LOCALIZAÇÃO"),
    ("contact.available", "Disponível para Projetos"),
    ("home.exp", "1 Ano Exp."),
    ("home.projects", "10+ Projetos"),
    ("ui.top", "topo"),
];

const ES: &[(&str, &str)] = &[
    ("nav.home", "Inicio"),
    ("nav.about", "Sobre mí"),
    ("nav.work", "Proyectos"),
    ("nav.contact", "Contacto"),
    ("home.role", "Desarrollador de Software"),
    ("home.explore", "Explorar"),
    ("about.title", "Sobre\nMí"),
    (
        "about.p1",
        "Soy un Desarrollador de Software dedicado a cerrar la brecha entre una lógica de backend robusta y experiencias móviles fluidas.",
    ),
    (
        "about.p2",
        "Mi pasión es crear código limpio y eficiente, y arquitecturas escalables dentro del ecosistema JavaScript, Python y C#.",
    ),
    (
        "about.p3",
        "Filosofía principal: Construir software que no solo sea funcional, sino también mantenible y agradable de usar.",
    ),
    ("about.focus", "Enfoque Actual"),
    (
        "about.focus.text",
        "Profundizando conocimientos en React Native para desarrollo móvil multiplataforma y desarrollando el proyecto 'Verdin'.",
    ),
    ("about.tech", "Tecnologías"),
    ("work.title", "Proyectos\nDestacados"),
    (
        "work.desc1",
        "Modern Game Hub SPA construido con React, Vite y TailwindCSS. Implementa motores de juegos personalizados en Canvas, gestión de estado global con Zustand e integración perfecta de autenticación JWT.",
    ),
    (
        "work.desc2",
        "Una aplicación móvil multiplataforma actualmente en desarrollo, centrada en experiencias de usuario fluidas e integración robusta de backend.",
    ),
    ("contact.title", "Vamos a\nConectar"),
    (
        "contact.subtitle",
        "Abierto a colaborar en aplicaciones móviles innovadoras y sistemas backend en Python/C#.",
    ),
    ("contact.name", "Tu nombre"),
    ("contact.email", "tu@email.com"),
    ("contact.message", "Cuéntame sobre tu proyecto..."),
    ("contact.send", "Enviar Mensaje"),
    ("contact.sending", "Enviando..."),
    ("contact.sent", "¡Mensaje Enviado!"),
    ("contact.sent.text", "Te respondo pronto."),
    ("contact.socials", "REDES SOCIALES"),
    ("contact.location", "UBICACIÓN"),
    ("contact.available", "Disponible para Proyectos"),
    ("home.exp", "1 Año Exp."),
    ("home.projects", "10+ Proyectos"),
    ("ui.top", "arriba"),
];

fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::Pt => PT,
        Language::En => EN,
        Language::Es => ES,
    }
}

/// Look up a keyed string. Unknown keys are returned unchanged.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_nav_set() {
        assert_eq!(
            nav_items(Language::Es),
            &["Inicio", "Sobre mí", "Proyectos", "Habilidades", "Contacto"]
        );
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        assert_eq!(translate(Language::En, "nav.work"), "Work");
        assert_eq!(translate(Language::Pt, "home.role"), "Desenvolvedor de Software");
        assert_eq!(translate(Language::Es, "missing.key"), "missing.key");
    }

    #[test]
    fn test_tables_share_keys() {
        for (key, _) in EN {
            assert_ne!(translate(Language::Pt, key), *key, "PT is missing {key}");
            assert_ne!(translate(Language::Es, key), *key, "ES is missing {key}");
        }
    }
}
