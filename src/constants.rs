/// Anchor identifiers and signal names shared with the rendering surface.
///
/// The surface publishes elements under these stable ids; the engine only
/// measures and mutates them, it never changes the tree they live in.
// Ambient background
pub const ID_FIELD_CANVAS: &str = "field-canvas";

// Custom cursor
pub const ID_CURSOR_DOT: &str = "cursor-dot";
pub const ID_CURSOR_TRAIL: &str = "cursor-trail";
pub const SELECTOR_INTERACTIVE: &str = "a, button, [role=\"button\"], input, textarea, select";

// Intro overlay
pub const ID_INTRO_OVERLAY: &str = "intro-overlay";
pub const ID_INTRO_INITIALS: &str = "intro-initials";
pub const ID_INTRO_M: &str = "intro-m";
pub const ID_INTRO_A: &str = "intro-a";
pub const SELECTOR_GREETING: &str = ".intro-greeting";

// Hero
pub const ID_HERO: &str = "hero";
pub const ID_HERO_SPACER: &str = "hero-spacer";
pub const ID_HERO_M: &str = "hero-m";
pub const ID_HERO_A: &str = "hero-a";
pub const ID_HERO_TAGLINE: &str = "hero-tagline";
pub const ID_FLY_M: &str = "fly-m";
pub const ID_FLY_A: &str = "fly-a";
pub const SELECTOR_HERO_FIRST_LETTERS: &str = "#hero-first .hero-letter";
pub const SELECTOR_HERO_LAST_LETTERS: &str = "#hero-last .hero-letter";

// Navbar
pub const ID_NAVBAR_LEFT: &str = "navbar-left";
pub const ID_NAVBAR_CONTACT: &str = "navbar-contact";
pub const ID_NAVBAR_BRAND: &str = "navbar-brand";
pub const ID_BRAND_M: &str = "brand-m";
pub const ID_BRAND_A: &str = "brand-a";

// Overlay menu
pub const ID_MENU_TOGGLE: &str = "menu-toggle";
pub const ID_MENU_OVERLAY: &str = "menu-overlay";
pub const ID_MENU_LINKS: &str = "menu-links";
pub const ID_MENU_SOCIAL: &str = "menu-social";

// Statement reveal
pub const ID_STATEMENT: &str = "statement";
pub const SELECTOR_WORD: &str = ".statement-word";
pub const SELECTOR_HIGHLIGHT: &str = ".statement-highlight";

// Project showcases
pub const SELECTOR_PROJECT: &str = ".project-panel";
pub const SELECTOR_PROJECT_STICKY: &str = ".project-sticky";
pub const SELECTOR_PROJECT_TITLE_TOP: &str = ".project-title-top";
pub const SELECTOR_PROJECT_TITLE_BOTTOM: &str = ".project-title-bottom";
pub const SELECTOR_PROJECT_CARD: &str = ".project-card";
pub const SELECTOR_PROJECT_CARD_INNER: &str = ".project-card-inner";
pub const SELECTOR_PROJECT_BADGE: &str = ".project-badge";
pub const SELECTOR_PROJECT_META: &str = ".project-meta";

// Handoff bus signal names (CustomEvents on the window)
pub const SIGNAL_INTRO_HANDOFF: &str = "intro-handoff";
pub const SIGNAL_INTRO_COMPLETE: &str = "intro-complete";
pub const SIGNAL_MENU_CLOSED: &str = "menu-closed";

// Theming / session
pub const CSS_VAR_ACCENT: &str = "--color-accent";
pub const SESSION_KEY: &str = "folio_has_loaded";
