// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-driven sprite movement.
//!
//! [`SpriteNav`] tracks which movement keys are held and integrates the
//! sprite position once per animation frame. Key transitions return a
//! [`LoopCommand`] telling the frame-loop driver when to start and stop; the
//! loop body is [`SpriteNav::step`].
//!
//! Positions are screen percentages with `x` measured from the left edge and
//! `y` from the bottom edge, so "up" increases `y`.
//!
//! # Direction order
//!
//! Each frame checks up, down, left, right in that order. Every held
//! direction moves its axis and overwrites the heading, so when opposing keys
//! are held the later check decides the heading while the axis moves back
//! and forth within the same frame.

use alloc::format;
use alloc::string::String;

use libm::{fmax, fmin};

use crate::config::SpriteConfig;
use crate::coords::{screen_to_game_x, screen_to_game_y};

/// A screen direction and the sprite heading that points there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top of the screen (0°).
    Up,
    /// Toward the bottom (180°).
    Down,
    /// Toward the left edge (270°).
    Left,
    /// Toward the right edge (90°).
    Right,
}

impl Direction {
    /// Evaluation order within a frame.
    pub const ORDER: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the rotation in degrees for a sprite facing this direction.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Up => 0,
            Self::Right => 90,
            Self::Down => 180,
            Self::Left => 270,
        }
    }
}

/// A key that moves the sprite.
///
/// Letter keys and arrow keys are tracked separately, so releasing `w` while
/// `ArrowUp` is still held keeps the sprite moving up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementKey {
    /// `w`
    W,
    /// `s`
    S,
    /// `a`
    A,
    /// `d`
    D,
    /// `ArrowUp`
    ArrowUp,
    /// `ArrowDown`
    ArrowDown,
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowRight`
    ArrowRight,
}

impl MovementKey {
    /// Every movement key.
    pub const ALL: [Self; 8] = [
        Self::W,
        Self::S,
        Self::A,
        Self::D,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ArrowLeft,
        Self::ArrowRight,
    ];

    /// Parses a `KeyboardEvent.key` value. Other keys, including upper-case
    /// letters, are not movement keys.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "w" => Self::W,
            "s" => Self::S,
            "a" => Self::A,
            "d" => Self::D,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => return None,
        })
    }

    /// Returns the direction this key moves the sprite.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::W | Self::ArrowUp => Direction::Up,
            Self::S | Self::ArrowDown => Direction::Down,
            Self::A | Self::ArrowLeft => Direction::Left,
            Self::D | Self::ArrowRight => Direction::Right,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of movement keys currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeldKeys(u8);

impl HeldKeys {
    /// Marks a key as held.
    pub fn press(&mut self, key: MovementKey) {
        self.0 |= key.bit();
    }

    /// Marks a key as released.
    pub fn release(&mut self, key: MovementKey) {
        self.0 &= !key.bit();
    }

    /// Returns `true` if no movement key is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if any key moving in `direction` is held.
    #[must_use]
    pub fn moves(self, direction: Direction) -> bool {
        MovementKey::ALL
            .iter()
            .any(|&key| self.0 & key.bit() != 0 && key.direction() == direction)
    }
}

/// Sprite position and heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Horizontal position, percent from the left edge.
    pub x: f64,
    /// Vertical position, percent from the bottom edge.
    pub y: f64,
    /// Rotation in degrees: one of 0, 90, 180, 270.
    pub rotation: u16,
}

impl Sprite {
    /// Returns the inline style that places the sprite on screen.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; left: {}%; bottom: {}%; transform: translate(-50%, 50%) rotate({}deg); z-index: 9999;",
            self.x, self.y, self.rotation
        )
    }

    /// Returns the readout coordinates for this position.
    #[must_use]
    pub fn grid(&self) -> (i32, i32) {
        (screen_to_game_x(self.x), screen_to_game_y(self.y))
    }

    /// Returns the readout texts, `X: n` and `Y: n`.
    #[must_use]
    pub fn readout(&self) -> (String, String) {
        let (gx, gy) = self.grid();
        (format!("X: {gx}"), format!("Y: {gy}"))
    }
}

/// What the frame-loop driver has to do after a key transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopCommand {
    /// Schedule the frame loop.
    Start,
    /// Cancel the scheduled frame.
    Stop,
    /// Leave the loop as it is.
    Keep,
}

/// Result of one frame of movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// A movement key was processed; the sprite style and readout must be
    /// rewritten.
    pub moved: bool,
    /// Vertical scroll to apply to the page, in pixels, when the sprite is
    /// pressed against the top (negative) or bottom (positive) edge.
    pub scroll: Option<i32>,
}

/// Held keys, sprite position, and frame-loop state.
#[derive(Clone, Debug)]
pub struct SpriteNav {
    config: SpriteConfig,
    sprite: Sprite,
    held: HeldKeys,
    looping: bool,
}

impl SpriteNav {
    /// Creates the sprite at the configured start position, facing up.
    #[must_use]
    pub fn new(config: SpriteConfig) -> Self {
        Self {
            config,
            sprite: Sprite {
                x: config.start_x,
                y: config.start_y,
                rotation: Direction::Up.degrees(),
            },
            held: HeldKeys::default(),
            looping: false,
        }
    }

    /// Returns the current sprite.
    #[must_use]
    pub const fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Returns the currently held keys.
    #[must_use]
    pub const fn held(&self) -> HeldKeys {
        self.held
    }

    /// Returns `true` while the frame loop is scheduled.
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Handles a key press. Starts the loop if it is not already scheduled.
    pub fn key_down(&mut self, key: MovementKey) -> LoopCommand {
        self.held.press(key);
        if self.looping {
            LoopCommand::Keep
        } else {
            self.looping = true;
            LoopCommand::Start
        }
    }

    /// Handles a key release. Stops the loop once no movement key is held.
    pub fn key_up(&mut self, key: MovementKey) -> LoopCommand {
        self.held.release(key);
        if self.held.is_empty() && self.looping {
            self.looping = false;
            LoopCommand::Stop
        } else {
            LoopCommand::Keep
        }
    }

    /// Advances the sprite by one frame.
    pub fn step(&mut self) -> FrameOutcome {
        let cfg = self.config;
        let mut outcome = FrameOutcome::default();
        let mut heading = None;

        for direction in Direction::ORDER {
            if !self.held.moves(direction) {
                continue;
            }
            let s = &mut self.sprite;
            match direction {
                Direction::Up => {
                    s.y += cfg.speed;
                    if s.y > cfg.max_y {
                        s.y = cfg.max_y;
                        outcome.scroll = Some(-cfg.scroll_nudge);
                    }
                }
                Direction::Down => {
                    s.y -= cfg.speed;
                    if s.y < cfg.min_y {
                        s.y = cfg.min_y;
                        outcome.scroll = Some(cfg.scroll_nudge);
                    }
                }
                Direction::Left => s.x = fmax(s.x - cfg.speed, cfg.min_x),
                Direction::Right => s.x = fmin(s.x + cfg.speed, cfg.max_x),
            }
            heading = Some(direction);
            outcome.moved = true;
        }

        if let Some(direction) = heading {
            self.sprite.rotation = direction.degrees();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    fn nav() -> SpriteNav {
        SpriteNav::new(PageConfig::landing().sprite)
    }

    #[test]
    fn initial_position_and_readout() {
        let nav = nav();
        let s = nav.sprite();
        assert_eq!((s.x, s.y, s.rotation), (50.0, 85.5, 0));
        assert_eq!(s.readout(), ("X: 0".into(), "Y: -71".into()));
        assert_eq!(
            s.css_text(),
            "position: fixed; left: 50%; bottom: 85.5%; transform: translate(-50%, 50%) rotate(0deg); z-index: 9999;"
        );
    }

    #[test]
    fn parses_movement_keys_only() {
        assert_eq!(MovementKey::from_key("w"), Some(MovementKey::W));
        assert_eq!(MovementKey::from_key("ArrowLeft"), Some(MovementKey::ArrowLeft));
        assert_eq!(MovementKey::from_key("W"), None);
        assert_eq!(MovementKey::from_key("Enter"), None);
    }

    #[test]
    fn loop_starts_once_and_stops_when_all_released() {
        let mut nav = nav();
        assert_eq!(nav.key_down(MovementKey::W), LoopCommand::Start);
        assert_eq!(nav.key_down(MovementKey::D), LoopCommand::Keep);
        assert_eq!(nav.key_down(MovementKey::W), LoopCommand::Keep);
        assert_eq!(nav.key_up(MovementKey::W), LoopCommand::Keep);
        assert!(nav.is_looping());
        assert_eq!(nav.key_up(MovementKey::D), LoopCommand::Stop);
        assert!(!nav.is_looping());
        assert_eq!(nav.key_up(MovementKey::D), LoopCommand::Keep);
    }

    #[test]
    fn letter_and_arrow_are_tracked_separately() {
        let mut nav = nav();
        nav.key_down(MovementKey::W);
        nav.key_down(MovementKey::ArrowUp);
        assert_eq!(nav.key_up(MovementKey::W), LoopCommand::Keep);
        assert!(nav.held().moves(Direction::Up));
    }

    #[test]
    fn holding_up_climbs_then_clamps_and_scrolls() {
        let mut nav = nav();
        nav.key_down(MovementKey::ArrowUp);

        // 85.5 + 10 * 1.25 = 98.0 exactly, which is not past the edge yet.
        for i in 1..=10 {
            let out = nav.step();
            assert!(out.moved);
            assert_eq!(out.scroll, None, "frame {i} must not scroll");
            assert_eq!(nav.sprite().y, 85.5 + 1.25 * f64::from(i));
        }

        for _ in 0..3 {
            let out = nav.step();
            assert_eq!(nav.sprite().y, 98.0);
            assert_eq!(nav.sprite().rotation, 0);
            assert_eq!(out.scroll, Some(-5));
        }
    }

    #[test]
    fn holding_down_scrolls_at_bottom() {
        let mut nav = nav();
        nav.key_down(MovementKey::S);
        let mut last = FrameOutcome::default();
        for _ in 0..200 {
            last = nav.step();
        }
        assert_eq!(nav.sprite().y, 2.0);
        assert_eq!(nav.sprite().rotation, 180);
        assert_eq!(last.scroll, Some(5));
    }

    #[test]
    fn horizontal_clamps_without_scroll() {
        let mut nav = nav();
        nav.key_down(MovementKey::A);
        for _ in 0..100 {
            assert_eq!(nav.step().scroll, None);
        }
        assert_eq!(nav.sprite().x, 5.0);
        assert_eq!(nav.sprite().rotation, 270);

        nav.key_up(MovementKey::A);
        nav.key_down(MovementKey::ArrowRight);
        for _ in 0..100 {
            nav.step();
        }
        assert_eq!(nav.sprite().x, 95.0);
        assert_eq!(nav.sprite().rotation, 90);
    }

    #[test]
    fn all_four_keys_stay_in_bounds_and_right_wins_heading() {
        let mut nav = nav();
        for key in [MovementKey::W, MovementKey::S, MovementKey::A, MovementKey::D] {
            nav.key_down(key);
        }
        for _ in 0..500 {
            nav.step();
            let s = nav.sprite();
            assert!((5.0..=95.0).contains(&s.x), "x out of bounds: {}", s.x);
            assert!((2.0..=98.0).contains(&s.y), "y out of bounds: {}", s.y);
            assert_eq!(s.rotation, 90);
        }
    }

    #[test]
    fn up_and_down_resolve_to_down_heading() {
        let mut nav = nav();
        nav.key_down(MovementKey::W);
        nav.key_down(MovementKey::S);
        let out = nav.step();
        assert!(out.moved);
        assert_eq!(nav.sprite().rotation, 180);
        assert_eq!(nav.sprite().y, 85.5);
    }

    #[test]
    fn bounded_walk_never_escapes() {
        // Deterministic pseudo-random key sequence.
        let keys = MovementKey::ALL;
        let mut state = 0x2545_f491_u32;
        let mut nav = nav();
        for _ in 0..2000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let key = keys[(state % 8) as usize];
            if state & 0x100 == 0 {
                nav.key_down(key);
            } else {
                nav.key_up(key);
            }
            nav.step();
            let s = nav.sprite();
            assert!((5.0..=95.0).contains(&s.x), "x out of bounds: {}", s.x);
            assert!((2.0..=98.0).contains(&s.y), "y out of bounds: {}", s.y);
            assert!(matches!(s.rotation, 0 | 90 | 180 | 270), "bad heading");
        }
    }

    #[test]
    fn no_keys_no_write() {
        let mut nav = nav();
        assert_eq!(nav.step(), FrameOutcome::default());
    }
}
