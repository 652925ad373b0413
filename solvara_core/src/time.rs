// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Millisecond delays for browser timers.
//!
//! [`Millis`] is the unit every widget timer is expressed in, matching the
//! millisecond argument of `setTimeout` and `setInterval`.

use core::fmt;
use core::ops::Add;

/// A delay or period in whole milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(pub u32);

impl Millis {
    /// Zero delay.
    pub const ZERO: Self = Self(0);

    /// Creates a delay from whole seconds.
    #[inline]
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs * 1000)
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Add for Millis {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Debug for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_scales() {
        assert_eq!(Millis::from_secs(6), Millis(6000));
    }

    #[test]
    fn add_and_debug() {
        let total = Millis(150) + Millis(300);
        assert_eq!(total, Millis(450));
        assert_eq!(alloc::format!("{total:?}"), "450ms");
    }
}
