//! Static copy and asset paths for the single page.

pub const BRAND: &str = "Lumen Robotics";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamPhoto {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub thumbnail: &'static str,
    pub certificate: Option<&'static str>,
    pub caption: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Team", href: "#team" },
    NavItem { label: "Achievements", href: "#achievements" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const HERO_CTAS: &[Cta] = &[
    Cta { label: "Meet the team", href: "#team" },
    Cta { label: "Get in touch", href: "#contact" },
];

pub const FEATURES: &[Feature] = &[
    Feature { label: "Autonomous navigation", href: "#about" },
    Feature { label: "Competition record", href: "#achievements" },
    Feature { label: "Workshops", href: "#contact" },
];

pub const TEAM_PHOTOS: &[TeamPhoto] = &[
    TeamPhoto {
        src: "/assets/team/workshop.jpg",
        alt: "Team assembling the drivetrain in the workshop",
        caption: "Build season in the workshop",
    },
    TeamPhoto {
        src: "/assets/team/regionals.jpg",
        alt: "Team on stage at the regional championship",
        caption: "Regional championship",
    },
    TeamPhoto {
        src: "/assets/team/outreach.jpg",
        alt: "Team members running a robotics workshop for kids",
        caption: "Community outreach day",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Regional Champions",
        thumbnail: "/assets/achievements/regional-thumb.jpg",
        certificate: Some("/assets/certificates/regional.jpg"),
        caption: "First place out of 42 teams.",
    },
    Achievement {
        title: "Innovation Award",
        thumbnail: "/assets/achievements/innovation-thumb.jpg",
        certificate: Some("/assets/certificates/innovation.jpg"),
        caption: "For the self-calibrating arm design.",
    },
    Achievement {
        title: "National Finalists",
        thumbnail: "/assets/achievements/nationals-thumb.jpg",
        certificate: None,
        caption: "Certificate on its way.",
    },
];
