// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget owners.
//!
//! Each widget is mounted once from a [`Mount`] context and owns everything it
//! registered with the browser: event listeners, timers and frame loops.
//! Dropping the owner removes all of them. Shared widget state lives behind an
//! `Rc`; timer and frame callbacks hold only a `Weak` to it, so dropping the
//! owner never leaves a reference cycle behind.

pub mod audio;
pub mod cta;
pub mod feed;
pub mod flicker;
pub mod mission;
pub mod popup;
pub mod sprite;
pub mod tuner;

use solvara_core::playback::{PLAYING_CLASS, PlayToggle, PlaybackCommand};
use solvara_core::trace::{WidgetKind, WidgetMountedEvent, WidgetSkippedEvent};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlMediaElement};

use crate::dom::{self, SharedSink};

/// Element lookups for one widget.
///
/// Required lookups trace a "skipped" event naming the missing element, so a
/// widget's `mount` can bail out with `?` on the first absent element.
pub struct Mount<'a> {
    doc: &'a Document,
    sink: &'a SharedSink,
    widget: WidgetKind,
}

impl<'a> Mount<'a> {
    /// Creates the lookup context for `widget`.
    #[must_use]
    pub fn new(doc: &'a Document, sink: &'a SharedSink, widget: WidgetKind) -> Self {
        Self { doc, sink, widget }
    }

    /// Returns the document.
    #[must_use]
    pub fn doc(&self) -> &'a Document {
        self.doc
    }

    /// Returns a handle to the page trace sink.
    #[must_use]
    pub fn sink(&self) -> SharedSink {
        self.sink.clone()
    }

    /// Looks up a required element by `#id`.
    pub fn by_id<T: JsCast>(&self, selector: &'static str) -> Option<T> {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        let found = dom::by_id(self.doc, id);
        if found.is_none() {
            self.skipped(selector);
        }
        found
    }

    /// Looks up a required element by selector.
    pub fn query<T: JsCast>(&self, selector: &'static str) -> Option<T> {
        let found = dom::query(self.doc, selector);
        if found.is_none() {
            self.skipped(selector);
        }
        found
    }

    /// Looks up an element that the widget can do without.
    #[must_use]
    pub fn optional_id<T: JsCast>(&self, selector: &'static str) -> Option<T> {
        dom::by_id(self.doc, selector.strip_prefix('#').unwrap_or(selector))
    }

    /// Traces that the widget is mounted.
    pub fn mounted(&self) {
        let widget = self.widget;
        dom::with_tracer(self.sink, |t| {
            t.widget_mounted(&WidgetMountedEvent { widget });
        });
    }

    /// Traces that the widget was skipped because `missing` is absent.
    pub(crate) fn skipped(&self, missing: &'static str) {
        let widget = self.widget;
        dom::with_tracer(self.sink, |t| {
            t.widget_skipped(&WidgetSkippedEvent { widget, missing });
        });
    }
}

impl core::fmt::Debug for Mount<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mount")
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

/// Writes a play toggle's label and `playing` class to its button.
pub(crate) fn render_toggle(button: &HtmlElement, toggle: &PlayToggle) {
    button.set_inner_html(toggle.label());
    dom::set_class(button, PLAYING_CLASS, toggle.is_playing());
}

/// Starts or pauses `media`. A refused `play()` promise is left to the
/// browser.
pub(crate) fn run_command(media: &HtmlMediaElement, command: PlaybackCommand) {
    match command {
        PlaybackCommand::Play => {
            let _ = media.play();
        }
        PlaybackCommand::Pause => {
            let _ = media.pause();
        }
    }
}
