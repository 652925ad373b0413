// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio tuner.
//!
//! The dial (`#frequency-dial`) is the source of truth for the selected
//! station: clicking a `.station-item` sets the dial value and dispatches an
//! `input` event, so both paths run the same update.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use solvara_core::config::TunerConfig;
use solvara_core::trace::{NoSignalEvent, PlaybackEvent, StationEvent, WidgetKind};
use solvara_core::tuner::{
    ACTIVE_CLASS, NO_SIGNAL, PlayOutcome, TuneChange, Tuner, volume_from_slider,
};
use web_sys::{Element, Event, HtmlAudioElement, HtmlElement, HtmlInputElement};

use super::{Mount, render_toggle, run_command};
use crate::dom::{self, SharedSink};

struct Shared {
    tuner: RefCell<Tuner>,
    config: TunerConfig,
    dial: HtmlInputElement,
    frequency: Element,
    name: Element,
    needle: HtmlElement,
    play: HtmlElement,
    audio: HtmlAudioElement,
    items: Vec<HtmlElement>,
    bars: Vec<HtmlElement>,
    sink: SharedSink,
    /// Restores the station name after a "no signal" flash.
    restore: RefCell<Option<Timeout>>,
}

impl Shared {
    fn dial_index(&self) -> Option<usize> {
        self.dial.value().trim().parse::<usize>().ok()
    }

    /// Reads the element's paused flag back into the toggle, so a `play()`
    /// the browser refused does not leave it marked as playing.
    fn sync_playback(&self) {
        self.tuner.borrow_mut().sync_playback(!self.audio.paused());
    }

    fn tune(&self) {
        let Some(index) = self.dial_index() else {
            return;
        };
        self.sync_playback();
        let change = self.tuner.borrow_mut().select(index);
        self.render(&change);
        dom::with_tracer(&self.sink, |t| {
            t.station(&StationEvent {
                index: change.index,
                stopped_playback: change.stop_playback,
                source_changed: change.new_source.is_some(),
            });
        });
    }

    fn render(&self, change: &TuneChange) {
        dom::set_text(&self.frequency, change.station.freq);
        dom::set_text(&self.name, change.station.name);
        dom::set_style(&self.needle, "left", &format!("{}%", change.needle_percent));
        for (i, bar) in self.bars.iter().enumerate() {
            dom::set_class(bar, ACTIVE_CLASS, change.bar_active(i));
        }
        for (i, item) in self.items.iter().enumerate() {
            dom::set_class(item, ACTIVE_CLASS, change.item_active(i));
        }
        if change.stop_playback {
            let _ = self.audio.pause();
            let toggle = *self.tuner.borrow().playback();
            render_toggle(&self.play, &toggle);
        }
        if let Some(source) = change.new_source {
            self.audio.set_src(source);
        }
    }

    fn press_play(self: &Rc<Self>) {
        if let Some(index) = self.dial_index() {
            self.tuner.borrow_mut().sync_index(index);
        }
        self.sync_playback();
        let outcome = self.tuner.borrow_mut().press_play();
        match outcome {
            PlayOutcome::NoSignal { name } => {
                dom::set_text(&self.name, NO_SIGNAL);
                let weak = Rc::downgrade(self);
                let restore = Timeout::new(self.config.no_signal_hold.get(), move || {
                    restore_name(&weak, name);
                });
                let _previous = self.restore.replace(Some(restore));
                let index = self.tuner.borrow().index();
                dom::with_tracer(&self.sink, |t| t.no_signal(&NoSignalEvent { index }));
            }
            PlayOutcome::Toggled(command) => {
                run_command(&self.audio, command);
                self.render_playback();
            }
        }
    }

    fn ended(&self) {
        self.tuner.borrow_mut().ended();
        self.render_playback();
    }

    fn render_playback(&self) {
        let toggle = *self.tuner.borrow().playback();
        render_toggle(&self.play, &toggle);
        let state = toggle.state();
        dom::with_tracer(&self.sink, |t| {
            t.playback(&PlaybackEvent {
                widget: WidgetKind::RadioTuner,
                state,
            });
        });
    }
}

fn restore_name(weak: &Weak<Shared>, name: &str) {
    if let Some(shared) = weak.upgrade() {
        dom::set_text(&shared.name, name);
    }
}

/// Dial, station list, play button and volume slider of the radio.
pub struct RadioTuner {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl RadioTuner {
    /// Wires the tuner. The station list, signal bars and `#volume` are
    /// optional; everything else is required.
    pub fn mount(m: &Mount<'_>, config: TunerConfig) -> Option<Self> {
        let dial: HtmlInputElement = m.by_id("#frequency-dial")?;
        let frequency: Element = m.by_id("#frequency-display")?;
        let name: Element = m.by_id("#station-name")?;
        let needle: HtmlElement = m.by_id("#tuner-needle")?;
        let play: HtmlElement = m.by_id("#radio-play")?;
        let audio: HtmlAudioElement = m.by_id("#radio-audio")?;
        let volume: Option<HtmlInputElement> = m.optional_id("#volume");

        let shared = Rc::new(Shared {
            tuner: RefCell::new(Tuner::landing()),
            config,
            dial,
            frequency,
            name,
            needle,
            play,
            audio,
            items: dom::query_all(m.doc(), ".station-item"),
            bars: dom::query_all(m.doc(), ".signal-bar"),
            sink: m.sink(),
            restore: RefCell::new(None),
        });
        // The selection starts wherever the markup left the dial.
        if let Some(index) = shared.dial_index() {
            shared.tuner.borrow_mut().sync_index(index);
        }

        let mut listeners = Vec::new();
        listeners.push({
            let target = shared.dial.clone();
            let shared = Rc::clone(&shared);
            EventListener::new(&target, "input", move |_| shared.tune())
        });

        for (index, item) in shared.items.iter().enumerate() {
            let dial = shared.dial.clone();
            listeners.push(EventListener::new(item, "click", move |_| {
                dial.set_value(&index.to_string());
                if let Ok(event) = Event::new("input") {
                    let _ = dial.dispatch_event(&event);
                }
            }));
        }

        listeners.push({
            let target = shared.play.clone();
            let shared = Rc::clone(&shared);
            EventListener::new(&target, "click", move |_| shared.press_play())
        });
        listeners.push({
            let target = shared.audio.clone();
            let shared = Rc::clone(&shared);
            EventListener::new(&target, "ended", move |_| shared.ended())
        });

        if let Some(volume) = volume {
            let audio = shared.audio.clone();
            audio.set_volume(config.initial_volume);
            let target = volume.clone();
            listeners.push(EventListener::new(&target, "input", move |_| {
                if let Ok(value) = volume.value().trim().parse::<f64>() {
                    audio.set_volume(volume_from_slider(value));
                }
            }));
        }

        m.mounted();
        Some(Self {
            shared,
            _listeners: listeners,
        })
    }

    /// Returns the selected station index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.shared.tuner.borrow().index()
    }
}

impl core::fmt::Debug for RadioTuner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RadioTuner")
            .field("tuner", &*self.shared.tuner.borrow())
            .finish_non_exhaustive()
    }
}
