// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Main `LISTEN` / `PAUSE` button.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use solvara_core::playback::{LISTEN_LABELS, PlayToggle};
use solvara_core::trace::{PlaybackEvent, WidgetKind};
use web_sys::{HtmlAudioElement, HtmlElement};

use super::{Mount, render_toggle, run_command};
use crate::dom::{self, SharedSink};

/// Play/pause button bound to `#audio-player`.
#[derive(Debug)]
pub struct AudioToggle {
    toggle: Rc<Cell<PlayToggle>>,
    _listeners: [EventListener; 2],
}

impl AudioToggle {
    /// Wires `#play-btn` to `#audio-player`.
    pub fn mount(m: &Mount<'_>) -> Option<Self> {
        let button: HtmlElement = m.by_id("#play-btn")?;
        let audio: HtmlAudioElement = m.by_id("#audio-player")?;
        let toggle = Rc::new(Cell::new(PlayToggle::new(LISTEN_LABELS)));
        let sink = m.sink();

        let click = {
            let toggle = Rc::clone(&toggle);
            let btn = button.clone();
            let audio = audio.clone();
            let sink = sink.clone();
            EventListener::new(&button, "click", move |_| {
                let mut t = toggle.get();
                run_command(&audio, t.toggle());
                toggle.set(t);
                render_toggle(&btn, &t);
                trace_state(&sink, &t);
            })
        };

        let ended = {
            let toggle = Rc::clone(&toggle);
            EventListener::new(&audio, "ended", move |_| {
                let mut t = toggle.get();
                t.ended();
                toggle.set(t);
                render_toggle(&button, &t);
                trace_state(&sink, &t);
            })
        };

        m.mounted();
        Some(Self {
            toggle,
            _listeners: [click, ended],
        })
    }

    /// Returns the current toggle state.
    #[must_use]
    pub fn toggle(&self) -> PlayToggle {
        self.toggle.get()
    }
}

fn trace_state(sink: &SharedSink, toggle: &PlayToggle) {
    let state = toggle.state();
    dom::with_tracer(sink, |t| {
        t.playback(&PlaybackEvent {
            widget: WidgetKind::AudioToggle,
            state,
        });
    });
}
