//! Shared numeric constants and selectors for the site behaviors.

// ── Media queries ───────────────────────────────────────────────

/// Media query matching the user's reduced-motion accessibility preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Media query for the mobile layout breakpoint.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

// ── Carousel ────────────────────────────────────────────────────

/// Autoplay interval between slides, in milliseconds.
pub const CAROUSEL_INTERVAL_MS: u32 = 6000;

/// Lower bound for a configured autoplay interval.
pub const CAROUSEL_MIN_INTERVAL_MS: u32 = 1000;

// ── Puzzle reveal ───────────────────────────────────────────────

/// Fraction of the puzzle element that must be visible before it reveals.
pub const PUZZLE_THRESHOLD: f64 = 0.3;

pub const PUZZLE_DESKTOP_COLS: u32 = 8;
pub const PUZZLE_DESKTOP_ROWS: u32 = 5;
pub const PUZZLE_MOBILE_COLS: u32 = 4;
pub const PUZZLE_MOBILE_ROWS: u32 = 6;

/// Upper bound for either grid dimension read from markup.
pub const PUZZLE_MAX_DIMENSION: u32 = 24;

/// Maximum scatter distance of a piece, in CSS pixels.
pub const PIECE_OFFSET_RANGE_PX: f64 = 28.0;

/// Maximum scatter rotation of a piece, in degrees (either direction).
pub const PIECE_ROTATE_RANGE_DEG: f64 = 9.0;

/// Delay added per diagonal step (`row + col`), in seconds.
pub const PIECE_STAGGER_S: f64 = 0.04;

/// Upper bound of the random delay jitter, in seconds.
pub const PIECE_JITTER_S: f64 = 0.2;

/// Duration of a single piece's CSS animation, in milliseconds.
pub const PIECE_ANIMATION_MS: f64 = 900.0;

// ── Scroll reveal ───────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.15;

// ── Anchors / parallax ──────────────────────────────────────────

/// Extra gap left between the sticky header and a scrolled-to anchor.
pub const ANCHOR_GAP_PX: f64 = 12.0;

/// Multiplier applied to the hero's viewport offset.
pub const PARALLAX_FACTOR: f64 = -0.08;

/// Parallax offset is clamped to ±this many pixels.
pub const PARALLAX_LIMIT_PX: f64 = 60.0;

// ── Typing banner ───────────────────────────────────────────────

pub const TYPING_TYPE_MS: u32 = 70;
pub const TYPING_DELETE_MS: u32 = 40;
pub const TYPING_HOLD_MS: u32 = 1800;
pub const TYPING_GAP_MS: u32 = 400;

// ── Contact form ────────────────────────────────────────────────

/// Maximum accepted message length, in characters.
pub const CONTACT_MESSAGE_MAX_CHARS: usize = 5000;
