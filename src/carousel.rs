//! Hero carousel state.
//!
//! Slides are addressed by index; navigation wraps in both directions. The
//! browser shell in `web::carousel` owns the DOM and the autoplay timer and
//! asks this type which slide to show next.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// A navigation request coming from a button, dot, key, or the autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Prev,
    GoTo(usize),
    /// Autoplay tick. Advances like `Next` but is not user interaction.
    Tick,
}

impl CarouselCommand {
    /// Map a `KeyboardEvent.key` value to a command.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Home" => Some(Self::GoTo(0)),
            _ => None,
        }
    }

    /// Whether the command came from the visitor (and so restarts autoplay).
    #[must_use]
    pub fn is_user_initiated(self) -> bool {
        !matches!(self, Self::Tick)
    }
}

/// Why autoplay is currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoplayHold {
    pub hovered: bool,
    pub focused: bool,
    pub reduced_motion: bool,
}

impl AutoplayHold {
    #[must_use]
    pub fn is_paused(self) -> bool {
        self.hovered || self.focused || self.reduced_motion
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
}

impl CarouselState {
    /// Create a carousel over `len` slides. Returns `None` when there is
    /// nothing to rotate.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn next_index(&self) -> usize {
        (self.index + 1) % self.len
    }

    #[must_use]
    pub fn prev_index(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }

    /// Apply a command and return the slide to show, or `None` if the command
    /// does not address a slide.
    pub fn apply(&mut self, command: CarouselCommand) -> Option<usize> {
        let target = match command {
            CarouselCommand::Next | CarouselCommand::Tick => self.next_index(),
            CarouselCommand::Prev => self.prev_index(),
            CarouselCommand::GoTo(i) if i < self.len => i,
            CarouselCommand::GoTo(i) => {
                log::debug!("carousel: ignoring slide {i} of {}", self.len);
                return None;
            }
        };
        self.index = target;
        Some(target)
    }

    /// Per-slide presentation for the current index, in slide order.
    pub fn slides(&self) -> impl Iterator<Item = SlideView> + '_ {
        (0..self.len).map(move |i| SlideView::for_slide(i == self.index))
    }
}

/// How one slide and its dot should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub active: bool,
    pub display: &'static str,
    pub aria_hidden: &'static str,
}

impl SlideView {
    #[must_use]
    pub fn for_slide(active: bool) -> Self {
        if active {
            Self { active, display: "grid", aria_hidden: "false" }
        } else {
            Self { active, display: "none", aria_hidden: "true" }
        }
    }
}

/// Accessible label for the dot that selects slide `index` (zero-based).
#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}
