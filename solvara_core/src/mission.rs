// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mission elapsed-time counter.

use alloc::format;
use alloc::string::String;

/// Counts whole seconds since the page was opened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MissionClock {
    elapsed: u64,
}

impl MissionClock {
    /// Creates a clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0 }
    }

    /// Returns the elapsed seconds.
    #[must_use]
    pub const fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Advances by one second and returns the new text.
    pub fn tick(&mut self) -> String {
        self.elapsed = self.elapsed.saturating_add(1);
        format_elapsed(self.elapsed)
    }
}

/// Renders total seconds as `T+ HH:MM:SS`.
///
/// Every field is padded to at least two digits; hours are not bounded and
/// grow past two digits after 99 hours.
#[must_use]
pub fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("T+ {hours:02}:{minutes:02}:{secs:02}")
}
