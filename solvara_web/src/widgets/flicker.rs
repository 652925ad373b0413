// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `MY` / `OUR` glitch text.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use solvara_core::config::FlickerConfig;
use solvara_core::flicker::{FlickerChange, FlickerStep, FlickerText, GLITCH_CLASS};
use web_sys::HtmlElement;

use super::Mount;
use crate::dom;

struct Shared {
    element: HtmlElement,
    config: FlickerConfig,
    text: Cell<FlickerText>,
    /// The next step of the running cycle, if any.
    pending: RefCell<Option<Timeout>>,
}

/// Runs the glitch cycle on `.flicker-text` once per period.
pub struct Flicker {
    shared: Rc<Shared>,
    _period: Interval,
}

impl Flicker {
    /// Starts the cycle on the first `.flicker-text` element.
    pub fn mount(m: &Mount<'_>, config: FlickerConfig) -> Option<Self> {
        let element: HtmlElement = m.query(".flicker-text")?;
        let shared = Rc::new(Shared {
            element,
            config,
            text: Cell::new(FlickerText::new()),
            pending: RefCell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        let period = Interval::new(config.period.get(), move || {
            run_step(&weak, FlickerStep::BeginGlitch);
        });

        m.mounted();
        Some(Self {
            shared,
            _period: period,
        })
    }

    /// Returns the current text state.
    #[must_use]
    pub fn text(&self) -> FlickerText {
        self.shared.text.get()
    }
}

impl core::fmt::Debug for Flicker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Flicker")
            .field("text", &self.shared.text.get())
            .finish_non_exhaustive()
    }
}

/// Applies `step` and schedules the one after it.
fn run_step(weak: &Weak<Shared>, step: FlickerStep) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let mut text = shared.text.get();
    match text.apply(step) {
        FlickerChange::Glitching(on) => dom::set_class(&shared.element, GLITCH_CLASS, on),
        FlickerChange::Word(word) => dom::set_text(&shared.element, word.as_str()),
    }
    shared.text.set(text);

    let next = step.next(&shared.config).map(|(next, delay)| {
        let weak = weak.clone();
        Timeout::new(delay.get(), move || run_step(&weak, next))
    });
    // Replacing the slot may drop the timeout that is running this step;
    // its closure stays alive until the call returns.
    let _finished = shared.pending.replace(next);
}
