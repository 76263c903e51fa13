//! Immutable content records consumed by the engine.
//!
//! Labels, links and the palette are resolved once at startup; no engine
//! invariant depends on their specific values.

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Work",
        href: "#work",
        description: "Selected projects",
    },
    NavLink {
        label: "About",
        href: "#about",
        description: "Who I am",
    },
    NavLink {
        label: "Services",
        href: "#services",
        description: "What I do",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
        description: "Get in touch",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/mohedabbas",
    },
    SocialLink {
        label: "Dribbble",
        href: "https://dribbble.com/mohedabbas",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/mohedabbas",
    },
];

pub const GREETINGS: [&str; 6] = ["Hello", "Bonjour", "Hallo", "Ola", "नमस्ते", "سلام"];

// Ordered accent palette; index 0 is the fresh-session default.
pub const ACCENT_PALETTE: [&str; 4] = ["#62b6cb", "#da3036", "#ff990a", "#93b99e"];

// Trail marker colors, head-outward.
pub const TRAIL_COLORS: [&str; 3] = ["#a052ff", "#ffd700", "#a052ff"];

pub const LOCATION: &str = "Paris, France";
