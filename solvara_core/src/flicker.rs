// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `MY`/`OUR` glitch cycle.
//!
//! Each cycle runs three [`FlickerStep`]s in order: mark the element as
//! glitching, swap the word, clear the mark. [`FlickerStep::next`] yields the
//! following step and the delay before it, so a timer driver only needs to
//! start the first step once per period and chain the rest.

use crate::config::FlickerConfig;
use crate::time::Millis;

/// Class present on the element while it glitches.
pub const GLITCH_CLASS: &str = "glitching";

/// The two words the flicker text alternates between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlickerWord {
    /// `MY` (initial word).
    #[default]
    My,
    /// `OUR`.
    Our,
}

impl FlickerWord {
    /// Returns the displayed text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::My => "MY",
            Self::Our => "OUR",
        }
    }

    /// Returns the other word.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::My => Self::Our,
            Self::Our => Self::My,
        }
    }
}

/// One step of a glitch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlickerStep {
    /// Add the glitch class.
    BeginGlitch,
    /// Swap the displayed word.
    SwapWord,
    /// Remove the glitch class.
    EndGlitch,
}

impl FlickerStep {
    /// Returns the step that follows `self` within a cycle and the delay
    /// before it runs, or `None` after the last step.
    #[must_use]
    pub const fn next(self, config: &FlickerConfig) -> Option<(Self, Millis)> {
        match self {
            Self::BeginGlitch => Some((Self::SwapWord, config.swap_delay)),
            Self::SwapWord => Some((Self::EndGlitch, config.settle_delay)),
            Self::EndGlitch => None,
        }
    }
}

/// What the DOM has to show after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlickerChange {
    /// Set or clear the glitch class.
    Glitching(bool),
    /// Replace the element text.
    Word(FlickerWord),
}

/// State of the flicker text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlickerText {
    word: FlickerWord,
    glitching: bool,
}

impl FlickerText {
    /// Creates the text showing `MY`, not glitching.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word: FlickerWord::My,
            glitching: false,
        }
    }

    /// Returns the displayed word.
    #[must_use]
    pub const fn word(&self) -> FlickerWord {
        self.word
    }

    /// Returns `true` while the glitch class is applied.
    #[must_use]
    pub const fn is_glitching(&self) -> bool {
        self.glitching
    }

    /// Applies one step and returns the DOM change it implies.
    pub fn apply(&mut self, step: FlickerStep) -> FlickerChange {
        match step {
            FlickerStep::BeginGlitch => {
                self.glitching = true;
                FlickerChange::Glitching(true)
            }
            FlickerStep::SwapWord => {
                self.word = self.word.other();
                FlickerChange::Word(self.word)
            }
            FlickerStep::EndGlitch => {
                self.glitching = false;
                FlickerChange::Glitching(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    #[test]
    fn step_chain_timing() {
        let cfg = PageConfig::landing().flicker;
        assert_eq!(
            FlickerStep::BeginGlitch.next(&cfg),
            Some((FlickerStep::SwapWord, Millis(150)))
        );
        assert_eq!(
            FlickerStep::SwapWord.next(&cfg),
            Some((FlickerStep::EndGlitch, Millis(300)))
        );
        assert_eq!(FlickerStep::EndGlitch.next(&cfg), None);
    }

    #[test]
    fn full_cycle_swaps_word_and_clears_glitch() {
        let cfg = PageConfig::landing().flicker;
        let mut text = FlickerText::new();
        let mut step = Some((FlickerStep::BeginGlitch, Millis::ZERO));
        let mut changes = alloc::vec::Vec::new();
        while let Some((s, _)) = step {
            changes.push(text.apply(s));
            step = s.next(&cfg);
        }
        assert_eq!(
            changes,
            [
                FlickerChange::Glitching(true),
                FlickerChange::Word(FlickerWord::Our),
                FlickerChange::Glitching(false),
            ]
        );
        assert!(!text.is_glitching());
    }

    #[test]
    fn words_alternate_across_cycles() {
        let mut text = FlickerText::new();
        assert_eq!(text.word().as_str(), "MY");
        text.apply(FlickerStep::SwapWord);
        assert_eq!(text.word().as_str(), "OUR");
        text.apply(FlickerStep::SwapWord);
        assert_eq!(text.word().as_str(), "MY");
    }
}
