use log::Level;

// Page offsets
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

// Carousel auto-advance
pub const TEAM_CAROUSEL_INTERVAL_MS: u32 = 8_000;
pub const ACHIEVEMENTS_CAROUSEL_INTERVAL_MS: u32 = 5_000;

// Feature button highlight, staggered per button
pub const HIGHLIGHT_BASE_DELAY_MS: u32 = 1_500;
pub const HIGHLIGHT_STAGGER_MS: u32 = 500;
pub const HIGHLIGHT_DURATION_MS: u32 = 2_000;
pub const HIGHLIGHT_ANIMATION: &str = "highlight 2s ease";

/// Name of the optional global the analytics script installs on `window`.
pub const ANALYTICS_HOOK: &str = "va";

pub const MODAL_FOCUSABLE_SELECTOR: &str =
    r#"button, [href], img, [tabindex]:not([tabindex="-1"])"#;
pub const DEFAULT_CERTIFICATE_TITLE: &str = "Certificate";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
