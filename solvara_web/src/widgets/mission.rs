// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `T+ HH:MM:SS` counter.

use gloo_timers::callback::Interval;
use solvara_core::mission::MissionClock;
use solvara_core::time::Millis;
use web_sys::Element;

use super::Mount;
use crate::dom;

/// Ticks `#mission-time` once per `tick`.
#[derive(Debug)]
pub struct MissionTimer {
    _tick: Interval,
}

impl MissionTimer {
    /// Starts counting from zero.
    pub fn mount(m: &Mount<'_>, tick: Millis) -> Option<Self> {
        let element: Element = m.by_id("#mission-time")?;
        let mut clock = MissionClock::new();
        let interval = Interval::new(tick.get(), move || {
            dom::set_text(&element, &clock.tick());
        });
        m.mounted();
        Some(Self { _tick: interval })
    }
}
