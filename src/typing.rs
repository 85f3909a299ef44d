//! Typing-text banner.
//!
//! A small state machine that types a phrase one character at a time, holds
//! it, deletes it, and moves on to the next phrase. The browser shell drives
//! it with one-shot timeouts: each [`TypingState::step`] returns the text to
//! show and how long to wait before the next step.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub gap_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: consts::TYPING_TYPE_MS,
            delete_ms: consts::TYPING_DELETE_MS,
            hold_ms: consts::TYPING_HOLD_MS,
            gap_ms: consts::TYPING_GAP_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

/// Output of one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    /// Delay before the next step; `None` once a non-looping banner finishes.
    pub next_delay_ms: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct TypingState {
    phrases: Vec<Vec<char>>,
    timings: TypingTimings,
    looping: bool,
    phrase: usize,
    visible: usize,
    phase: Phase,
}

impl TypingState {
    /// Returns `None` when no non-empty phrase is given.
    #[must_use]
    pub fn new(phrases: &[String], timings: TypingTimings, looping: bool) -> Option<Self> {
        let phrases = phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, timings, looping, phrase: 0, visible: 0, phase: Phase::Typing })
    }

    /// Text currently on screen.
    #[must_use]
    pub fn text(&self) -> String {
        self.current()[..self.visible].iter().collect()
    }

    /// The first phrase in full, for reduced-motion rendering.
    #[must_use]
    pub fn static_text(&self) -> String {
        self.phrases[0].iter().collect()
    }

    /// Restart from an empty first phrase.
    pub fn reset(&mut self) {
        self.phrase = 0;
        self.visible = 0;
        self.phase = Phase::Typing;
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by one character and report what to show.
    pub fn step(&mut self) -> TypingFrame {
        let next_delay_ms = match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(self.current().len());
                if self.visible < self.current().len() {
                    Some(self.timings.type_ms)
                } else if !self.looping && self.phrase + 1 == self.phrases.len() {
                    self.phase = Phase::Done;
                    None
                } else {
                    self.phase = Phase::Deleting;
                    Some(self.timings.hold_ms)
                }
            }
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible > 0 {
                    Some(self.timings.delete_ms)
                } else {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    Some(self.timings.gap_ms)
                }
            }
            Phase::Done => None,
        };
        TypingFrame { text: self.text(), next_delay_ms }
    }

    /// Accessible label naming every phrase.
    #[must_use]
    pub fn aria_label(&self) -> String {
        self.phrases
            .iter()
            .map(|p| p.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn current(&self) -> &[char] {
        &self.phrases[self.phrase]
    }
}

/// Parse `data-typing-phrases`: a JSON array of strings, or `|`-separated
/// text.
#[must_use]
pub fn parse_phrases(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<String>>(trimmed) {
            Ok(list) => return clean(list.into_iter()),
            Err(err) => log::warn!("typing: phrases are not a JSON string array: {err}"),
        }
    }
    clean(trimmed.split('|').map(str::to_owned))
}

fn clean(phrases: impl Iterator<Item = String>) -> Vec<String> {
    phrases
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Read `data-typing-loop`; anything but `"false"` loops.
#[must_use]
pub fn parse_loop(raw: Option<&str>) -> bool {
    !raw.is_some_and(|v| v.trim().eq_ignore_ascii_case("false"))
}
