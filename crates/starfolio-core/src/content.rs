//! Static portfolio content shared by both variants.

use ratatui::style::Color;

use crate::theme::{ACCENT, PRIMARY, SECONDARY, SILVER};

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub desc: &'static str,
    pub tech: &'static [&'static str],
    pub color: Color,
    pub icon: &'static str,
}

/// A skill with a proficiency level in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: Color,
}

/// A label placed on the skills orbit ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSkill {
    pub label: &'static str,
    /// Angle in degrees.
    pub angle: f32,
    /// Ring radius in logical px.
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

/// A routed-variant work item. The description is a translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub title: &'static str,
    pub description_key: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "ArcadeRank - Plataforma de Jogos",
        desc: "Plataforma para jogar e evoluir com sistema de gamificação",
        tech: &["React Native", "TypeScript", "Vite", "TailwindCSS"],
        color: PRIMARY,
        icon: "◈",
    },
    Project {
        id: 2,
        title: "CryptoVault",
        desc: "Carteira DeFi multi-chain com swap integrado, staking e portfolio tracker com alertas personalizados.",
        tech: &["React Native", "Web3.js", "Solidity", "Node.js"],
        color: SECONDARY,
        icon: "⬡",
    },
    Project {
        id: 3,
        title: "Orbital CMS",
        desc: "Headless CMS com editor visual drag-n-drop, suporte a i18n e deploy automático via CI/CD pipeline.",
        tech: &["Next.js", "GraphQL", "PostgreSQL", "Docker"],
        color: SILVER,
        icon: "◎",
    },
    Project {
        id: 4,
        title: "SynthWave AR",
        desc: "App de realidade aumentada para performances musicais ao vivo. Efeitos visuais sincronizados ao BPM.",
        tech: &["Unity", "ARKit", "C#", "Wasm"],
        color: ACCENT,
        icon: "⬢",
    },
];

pub const SKILLS: [Skill; 8] = [
    Skill { name: "React Native / Expo", level: 95, color: PRIMARY },
    Skill { name: "TypeScript", level: 92, color: PRIMARY },
    Skill { name: "React / Next.js", level: 90, color: SECONDARY },
    Skill { name: "Node.js / GraphQL", level: 85, color: SECONDARY },
    Skill { name: "Python / ML", level: 75, color: SILVER },
    Skill { name: "AWS / DevOps", level: 78, color: SILVER },
    Skill { name: "UI/UX Design", level: 88, color: ACCENT },
    Skill { name: "Web3 / Solidity", level: 65, color: ACCENT },
];

pub const ORBIT_SKILLS: [OrbitSkill; 8] = [
    OrbitSkill { label: "React", angle: 0.0, radius: 90.0 },
    OrbitSkill { label: "TypeScript", angle: 45.0, radius: 90.0 },
    OrbitSkill { label: "Expo", angle: 90.0, radius: 90.0 },
    OrbitSkill { label: "GraphQL", angle: 135.0, radius: 90.0 },
    OrbitSkill { label: "Node.js", angle: 180.0, radius: 90.0 },
    OrbitSkill { label: "Docker", angle: 225.0, radius: 90.0 },
    OrbitSkill { label: "AWS", angle: 270.0, radius: 90.0 },
    OrbitSkill { label: "Python", angle: 315.0, radius: 90.0 },
];

pub const TIMELINE: [TimelineEntry; 2] = [
    TimelineEntry {
        year: "2026",
        title: "Junior Mobile Developer",
        company: "Sitallcom Sistemas Inteligentes",
        desc: "Desenvolvimento em React Native com Expo para dispositivos IOS e Android.",
    },
    TimelineEntry {
        year: "2023",
        title: "Início da Jornada",
        company: "Freelancer",
        desc: "Primeiros projetos: e-commerce, landing pages, apps móveis.",
    },
];

pub const SOCIALS: [Social; 4] = [
    Social { label: "GitHub", icon: "⌥", url: "https://github.com/edukamoz" },
    Social { label: "LinkedIn", icon: "◈", url: "https://linkedin.com/in/eduardo-kamo/" },
    Social { label: "Instagram", icon: "◎", url: "https://instagram.com/kamo_moveis/" },
    Social { label: "Email", icon: "✉", url: "mailto:eduardokamoz@gmail.com" },
];

/// Tech stack listed on the routed About page.
pub const TECH_STACK: [&str; 10] = [
    "React Native",
    "TypeScript",
    "Python",
    "C#",
    "React",
    "Vite",
    "TailwindCSS",
    "Zustand",
    "Clean Code",
    "Software Architecture",
];

pub const WORK_ITEMS: [WorkItem; 2] = [
    WorkItem {
        title: "Arcaderank",
        description_key: "work.desc1",
        tech: &["React", "Vite", "TailwindCSS", "TypeScript", "Zustand"],
        link: "https://github.com/edukamoz/arcaderank-frontend",
    },
    WorkItem {
        title: "DelBicos",
        description_key: "work.desc2",
        tech: &["React Native", "TypeScript", "Node", "Docker", "PostgreeSQL"],
        link: "https://www.delbicos.com.br/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_orbit_skills_evenly_spaced() {
        for (i, skill) in ORBIT_SKILLS.iter().enumerate() {
            assert_eq!(skill.angle, i as f32 * 45.0);
        }
    }
}
