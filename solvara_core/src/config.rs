// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and geometry constants for every widget.
//!
//! [`PageConfig`] gathers the numbers that shape page behavior so that tests
//! and alternative pages can adjust them in one place. [`PageConfig::landing`]
//! is the configuration the landing page ships with.

use crate::time::Millis;

/// Movement limits and speed for the keyboard-driven sprite.
///
/// Positions are screen percentages: `x` is measured from the left edge and
/// `y` from the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteConfig {
    /// Percentage points moved per frame along the held axis.
    pub speed: f64,
    /// Smallest allowed `x`.
    pub min_x: f64,
    /// Largest allowed `x`.
    pub max_x: f64,
    /// Smallest allowed `y`.
    pub min_y: f64,
    /// Largest allowed `y`.
    pub max_y: f64,
    /// Pixels the page scrolls per frame while the sprite presses against the
    /// top or bottom edge.
    pub scroll_nudge: i32,
    /// Starting `x`.
    pub start_x: f64,
    /// Starting `y`.
    pub start_y: f64,
}

/// Delays and periods of the glitch cycle on the flicker text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlickerConfig {
    /// Time between the starts of two cycles.
    pub period: Millis,
    /// Time from marking the element as glitching to swapping the word.
    pub swap_delay: Millis,
    /// Time from swapping the word to clearing the glitching mark.
    pub settle_delay: Millis,
}

/// Timing of the image feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Time the image stays faded out before the preload starts.
    pub fade_delay: Millis,
    /// Auto-advance period.
    pub advance_period: Millis,
}

/// Timing and levels of the radio tuner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunerConfig {
    /// How long the "no signal" message replaces the station name.
    pub no_signal_hold: Millis,
    /// Volume applied to the radio audio element at setup (0.0–1.0).
    pub initial_volume: f64,
}

/// Configuration for every widget on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Sprite movement.
    pub sprite: SpriteConfig,
    /// Flicker text cycle.
    pub flicker: FlickerConfig,
    /// Mission timer tick.
    pub mission_tick: Millis,
    /// Image feed.
    pub feed: FeedConfig,
    /// Radio tuner.
    pub tuner: TunerConfig,
}

impl PageConfig {
    /// The configuration shipped with the landing page.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            sprite: SpriteConfig {
                speed: 1.25,
                min_x: 5.0,
                max_x: 95.0,
                min_y: 2.0,
                max_y: 98.0,
                scroll_nudge: 5,
                // Readout X: 0, Y: -71.
                start_x: 50.0,
                start_y: 85.5,
            },
            flicker: FlickerConfig {
                period: Millis(4000),
                swap_delay: Millis(150),
                settle_delay: Millis(300),
            },
            mission_tick: Millis(1000),
            feed: FeedConfig {
                fade_delay: Millis(300),
                advance_period: Millis(6000),
            },
            tuner: TunerConfig {
                no_signal_hold: Millis(1000),
                initial_volume: 0.7,
            },
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::landing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_landing() {
        assert_eq!(PageConfig::default(), PageConfig::landing());
    }

    #[test]
    fn landing_timings() {
        let c = PageConfig::landing();
        assert_eq!(c.tuner.no_signal_hold, Millis(1000), "no signal reverts after 1 s");
        assert_eq!(c.feed.fade_delay, Millis(300));
        assert_eq!(c.feed.advance_period, Millis(6000));
        assert_eq!(c.mission_tick, Millis::from_secs(1));
        assert_eq!(c.flicker.period, Millis(4000));
        assert_eq!(c.flicker.swap_delay, Millis(150));
        assert_eq!(c.flicker.settle_delay, Millis(300));
        assert_eq!(c.tuner.initial_volume, 0.7);
    }

    #[test]
    fn flicker_cycle_fits_in_period() {
        let f = PageConfig::landing().flicker;
        assert!(
            f.swap_delay + f.settle_delay < f.period,
            "glitch must settle before the next cycle starts"
        );
    }

    #[test]
    fn sprite_start_is_inside_bounds() {
        let s = PageConfig::landing().sprite;
        assert!((s.min_x..=s.max_x).contains(&s.start_x), "start x in bounds");
        assert!((s.min_y..=s.max_y).contains(&s.start_y), "start y in bounds");
    }
}
