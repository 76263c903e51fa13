/// Engine tuning constants.
///
/// These express intended behavior (time constants, radii, clamp limits) and
/// keep magic numbers out of the simulation code. They are presentation
/// tuning: the mechanisms do not depend on the specific values.
// Particle field (grid of plus glyphs)
pub const FIELD_GRID_SPACING: f32 = 24.0; // px between grid nodes
pub const FIELD_GLYPH_SIZE: f32 = 10.0;
pub const FIELD_STROKE_WIDTH: f32 = 1.0;
pub const FIELD_REPULSION_RADIUS: f32 = 120.0; // px of pointer influence
pub const FIELD_REPULSION_STRENGTH: f32 = 0.6;
pub const FIELD_RETURN_STRENGTH: f32 = 0.06; // spring back to origin
pub const FIELD_FRICTION: f32 = 0.9; // velocity kept per step
pub const FIELD_MAX_VELOCITY: f32 = 8.0; // per-component clamp
pub const FIELD_BASE_OPACITY: f32 = 0.12;
pub const FIELD_GLOW_OPACITY_SPAN: f32 = 0.4; // added at zero distance
pub const FIELD_SETTLE_EPS: f32 = 0.05; // px; at-rest threshold
pub const FIELD_IDLE_SEC: f32 = 0.6; // pointer quiet before static redraw

// Pointer tracking
pub const POINTER_MOVE_THRESHOLD_PX: f32 = 2.0;
pub const POINTER_SMOOTHING: f32 = 0.15; // per-frame lerp toward raw
pub const POINTER_QUIET_SEC: f32 = 0.1; // movement flag decay

// Cursor trail
pub const TRAIL_LERPS: [f32; 3] = [0.12, 0.09, 0.06]; // decreasing along the chain
pub const TRAIL_SIZES_PX: [f32; 3] = [10.0, 8.0, 6.0];
pub const TRAIL_TWEEN_TAU: f32 = 0.09; // scale/opacity approach time constant
pub const TRAIL_QUIET_SEC: f32 = 0.1; // inactivity before the burst fires
pub const TRAIL_BURST_STAGGER: f32 = 0.03; // per-marker delay
pub const TRAIL_BURST_DURATION: f32 = 0.3;
pub const TRAIL_BURST_HEAD_DELAY: f32 = 0.1;
pub const TRAIL_BURST_HEAD_RISE: f32 = 0.15;
pub const TRAIL_BURST_HEAD_SETTLE: f32 = 0.3;
pub const TRAIL_BURST_HEAD_PEAK: f32 = 1.5;
pub const TRAIL_HOVER_HEAD_SCALE: f32 = 2.0;
pub const TRAIL_HOVER_MARKER_SCALE: f32 = 1.5;

// Intro sequence
pub const INTRO_FLASH_SEC: f32 = 0.25; // per greeting word
pub const INTRO_REVEAL_SEC: f32 = 0.5;
pub const INTRO_HOLD_SEC: f32 = 0.1; // beat between reveal and flight
pub const INTRO_FLIGHT_SEC: f32 = 1.2;
pub const INTRO_DISSOLVE_SEC: f32 = 0.3; // cross-dissolve window before landing
pub const INTRO_BG_FADE_SEC: f32 = 0.8;

// Hero entrance
pub const HERO_ENTRANCE_DELAY: f32 = 0.3;
pub const HERO_LETTER_STAGGER: f32 = 0.09;
pub const HERO_LETTER_DUR: f32 = 0.7;
pub const HERO_LETTER_RISE_PX: f32 = 70.0;
pub const HERO_LAST_STAGGER: f32 = 0.08;
pub const HERO_LAST_DUR: f32 = 0.75;
pub const HERO_LAST_RISE_PX: f32 = 100.0;
pub const HERO_TAGLINE_DUR: f32 = 0.8;

// Hero scroll sequence
pub const HERO_SCROLL_VIEWPORTS: f32 = 1.0; // range as a multiple of viewport height
pub const HERO_SCRUB_TAU: f32 = 0.5; // seconds of scrub lag
pub const HERO_PIN_TRAIL_RATE: f32 = 0.3; // slower-than-scroll continuation
pub const HERO_PIN_TRAIL_VIEWPORTS: f32 = 0.5;

// Statement reveal
pub const REVEAL_START_VH: f32 = 0.95; // enters at 95% of viewport height
pub const REVEAL_END_VH: f32 = 0.35;
pub const REVEAL_SCRUB_TAU: f32 = 0.5;
pub const REVEAL_WORD_SPAN: f32 = 0.7; // fraction of the range the stagger fills
pub const REVEAL_WORD_DUR: f32 = 0.3;
pub const REVEAL_HIGHLIGHT_STAGGER: f32 = 0.3;
pub const REVEAL_BASE_COLOR: &str = "#1b2028";

// Project showcases
pub const PROJECT_SCRUB_TAU: f32 = 0.6;

// Menu overlay
pub const MENU_CURTAIN_IN_SEC: f32 = 0.5;
pub const MENU_LINKS_START: f32 = 0.2;
pub const MENU_LINK_DUR: f32 = 0.8;
pub const MENU_LINK_STAGGER: f32 = 0.1;
pub const MENU_CLOSE_SEC: f32 = 0.6;

// Accent cycle
pub const ACCENT_DEFAULT_INDEX: usize = 0;

// Frame scheduling
pub const MAX_FRAME_DT: f32 = 0.1; // clamp dt after a hidden tab catches up
pub const SCRUB_SETTLE_EPS: f32 = 0.0005; // progress convergence threshold
