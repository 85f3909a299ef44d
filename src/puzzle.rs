//! Puzzle reveal layout.
//!
//! A puzzle element is covered by a grid of absolutely positioned tiles, each
//! showing its slice of the image through `background-position`. Tiles are
//! given a staggered delay plus a random scatter (rotation and offset) that
//! the stylesheet animates away once the element gets `puzzle-revealed`.
//!
//! DESIGN
//! ======
//! Layout is pure arithmetic over a [`GridSpec`] and an injected
//! [`rand::Rng`], so it is unit-testable with a seeded generator. The browser
//! shell (`web::puzzle`) turns [`PieceLayout::style_entries`] into inline
//! styles and owns image-load gating and the cleanup timers.

#[cfg(test)]
#[path = "puzzle_test.rs"]
mod puzzle_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts;

/// Columns and rows of a puzzle overlay. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
}

impl GridSpec {
    #[must_use]
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols: cols.clamp(1, consts::PUZZLE_MAX_DIMENSION),
            rows: rows.clamp(1, consts::PUZZLE_MAX_DIMENSION),
        }
    }

    #[must_use]
    pub fn piece_count(self) -> usize {
        (self.cols * self.rows) as usize
    }
}

/// Raw grid attributes as read from `data-cols`, `data-rows`,
/// `data-cols-mobile` and `data-rows-mobile`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridAttrs {
    pub cols: Option<String>,
    pub rows: Option<String>,
    pub cols_mobile: Option<String>,
    pub rows_mobile: Option<String>,
}

impl GridAttrs {
    /// Pick the grid for the current breakpoint.
    #[must_use]
    pub fn resolve(&self, mobile: bool) -> GridSpec {
        if mobile {
            GridSpec::new(
                parse_dimension(self.cols_mobile.as_deref(), consts::PUZZLE_MOBILE_COLS),
                parse_dimension(self.rows_mobile.as_deref(), consts::PUZZLE_MOBILE_ROWS),
            )
        } else {
            GridSpec::new(
                parse_dimension(self.cols.as_deref(), consts::PUZZLE_DESKTOP_COLS),
                parse_dimension(self.rows.as_deref(), consts::PUZZLE_DESKTOP_ROWS),
            )
        }
    }
}

/// Read a grid dimension attribute the way `Number(raw) || fallback` does:
/// empty, zero, and non-numeric values fall back. Anything else is floored
/// and clamped to `1..=PUZZLE_MAX_DIMENSION`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
pub fn parse_dimension(raw: Option<&str>, fallback: u32) -> u32 {
    let Some(value) = raw.and_then(number_value) else {
        return fallback;
    };
    if value == 0.0 {
        return fallback;
    }
    value.floor().clamp(1.0, f64::from(consts::PUZZLE_MAX_DIMENSION)) as u32
}

/// Numeric value of an attribute string. Only the exact `Infinity`
/// spelling counts as infinite; `inf`, `nan` and friends do not parse.
fn number_value(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let Ok(value) = text.parse::<f64>() else {
        return None;
    };
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() && text.trim_start_matches(['+', '-']) != "Infinity" {
        return None;
    }
    Some(value)
}

/// The image shown by a puzzle: `data-image` wins, then the first `<img>`.
#[must_use]
pub fn resolve_image_source(data_image: Option<&str>, img_src: Option<&str>) -> Option<String> {
    [data_image, img_src]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Which image the reveal has to wait for before animating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageGate {
    /// Preload `data-image`; it is what the tiles show.
    Preload(String),
    /// Wait on the descendant `<img>`.
    Child,
    /// No image at all; reveal straight away.
    Ready,
}

impl ImageGate {
    /// Follows the precedence of [`resolve_image_source`].
    #[must_use]
    pub fn select(data_image: Option<&str>, has_child_img: bool) -> Self {
        match data_image.map(str::trim).filter(|s| !s.is_empty()) {
            Some(source) => Self::Preload(source.to_owned()),
            None if has_child_img => Self::Child,
            None => Self::Ready,
        }
    }
}

/// CSS `url("…")` value for an image source.
#[must_use]
pub fn css_url(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len() + 7);
    escaped.push_str("url(\"");
    for ch in source.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' | '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped.push_str("\")");
    escaped
}

/// Placement and animation parameters of one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceLayout {
    pub row: u32,
    pub col: u32,
    pub width_pct: f64,
    pub height_pct: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub background_x_pct: f64,
    pub background_y_pct: f64,
    pub delay_s: f64,
    pub rotate_deg: f64,
    pub offset_x_px: f64,
    pub offset_y_px: f64,
}

impl PieceLayout {
    /// Inline style properties for the tile element, in application order.
    #[must_use]
    pub fn style_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", format!("{}%", self.width_pct)),
            ("height", format!("{}%", self.height_pct)),
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            (
                "background-position",
                format!("{}% {}%", self.background_x_pct, self.background_y_pct),
            ),
            ("--piece-delay", format!("{:.2}s", self.delay_s)),
            ("--piece-rotate", format!("{:.2}deg", self.rotate_deg)),
            ("--piece-x", format!("{:.2}px", self.offset_x_px)),
            ("--piece-y", format!("{:.2}px", self.offset_y_px)),
        ]
    }
}

/// Lay out every tile of `grid` in row-major order.
pub fn layout_pieces<R: Rng>(grid: GridSpec, rng: &mut R) -> Vec<PieceLayout> {
    let cols = f64::from(grid.cols);
    let rows = f64::from(grid.rows);
    let width_pct = 100.0 / cols;
    let height_pct = 100.0 / rows;

    let mut pieces = Vec::with_capacity(grid.piece_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let delay_s = f64::from(row + col) * consts::PIECE_STAGGER_S
                + rng.random::<f64>() * consts::PIECE_JITTER_S;
            let rotate_deg =
                rng.random_range(-consts::PIECE_ROTATE_RANGE_DEG..consts::PIECE_ROTATE_RANGE_DEG);
            let offset_x_px = rng.random_range(-1.0..1.0) * consts::PIECE_OFFSET_RANGE_PX;
            let offset_y_px = rng.random_range(-1.0..1.0) * consts::PIECE_OFFSET_RANGE_PX;
            pieces.push(PieceLayout {
                row,
                col,
                width_pct,
                height_pct,
                left_pct: width_pct * f64::from(col),
                top_pct: height_pct * f64::from(row),
                background_x_pct: background_percent(col, grid.cols),
                background_y_pct: background_percent(row, grid.rows),
                delay_s,
                rotate_deg,
                offset_x_px,
                offset_y_px,
            });
        }
    }
    pieces
}

/// `background-position` percentage for slot `index` of `count`. With
/// `background-size` equal to the grid, 0% and 100% line up with the edges.
fn background_percent(index: u32, count: u32) -> f64 {
    if count <= 1 {
        50.0
    } else {
        100.0 / f64::from(count - 1) * f64::from(index)
    }
}

/// Milliseconds from `puzzle-revealed` until the last tile finishes.
#[must_use]
pub fn settle_ms(pieces: &[PieceLayout]) -> f64 {
    let longest_delay_s = pieces.iter().map(|p| p.delay_s).fold(0.0, f64::max);
    longest_delay_s * 1000.0 + consts::PIECE_ANIMATION_MS
}

/// Seed a layout generator from two browser entropy sources
/// (e.g. `Date.now()` and `Math.random()`).
#[must_use]
pub fn seeded_rng(now_ms: f64, noise: f64) -> SmallRng {
    let seed = now_ms.to_bits().rotate_left(17) ^ noise.to_bits();
    SmallRng::seed_from_u64(seed)
}

/// Lifecycle of one puzzle element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PuzzlePhase {
    /// Observed, not yet in view.
    #[default]
    Idle,
    /// In view, waiting for the image to load.
    Loading,
    /// Tiles built and `puzzle-revealed` set; cleanup timer pending.
    Revealing,
    /// Overlay removed.
    Complete,
    /// Image failed to load; animation skipped.
    Failed,
}

impl PuzzlePhase {
    /// Whether an intersection should start loading/revealing this element.
    #[must_use]
    pub fn accepts_reveal(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the element still has an overlay or timer to clean up.
    #[must_use]
    pub fn needs_cleanup(self) -> bool {
        matches!(self, Self::Revealing)
    }
}
