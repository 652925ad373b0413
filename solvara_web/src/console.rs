// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace sink that logs to the browser console.

use solvara_core::trace::{
    FeedImageEvent, NoSignalEvent, PlaybackEvent, SpriteFrameEvent, StationEvent, TraceSink,
    WidgetMountedEvent, WidgetSkippedEvent,
};
use wasm_bindgen::JsValue;

/// A [`TraceSink`] that writes one `console.debug` line per event.
///
/// Only receives events when the `trace` feature is enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log every sprite frame. Off by default; frames arrive at display
    /// rate while a key is held.
    pub frames: bool,
}

impl ConsoleSink {
    /// Creates a sink that skips per-frame sprite events.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: false }
    }
}

fn emit(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
}

fn mounted_line(e: &WidgetMountedEvent) -> String {
    format!("[solvara] {} mounted", e.widget.name())
}

fn skipped_line(e: &WidgetSkippedEvent) -> String {
    format!("[solvara] {} skipped: {} missing", e.widget.name(), e.missing)
}

fn playback_line(e: &PlaybackEvent) -> String {
    format!("[solvara] {} {:?}", e.widget.name(), e.state)
}

fn sprite_line(e: &SpriteFrameEvent) -> String {
    let mut line = format!(
        "[solvara] sprite #{} x={} y={} rot={}",
        e.frame_index, e.x, e.y, e.rotation
    );
    if let Some(dy) = e.scroll {
        line.push_str(&format!(" scroll={dy}"));
    }
    line
}

fn feed_line(e: &FeedImageEvent) -> String {
    format!("[solvara] feed image {} {:?}", e.index, e.outcome)
}

fn station_line(e: &StationEvent) -> String {
    format!(
        "[solvara] station {} stopped={} new_source={}",
        e.index, e.stopped_playback, e.source_changed
    )
}

impl TraceSink for ConsoleSink {
    fn on_widget_mounted(&mut self, e: &WidgetMountedEvent) {
        emit(&mounted_line(e));
    }

    fn on_widget_skipped(&mut self, e: &WidgetSkippedEvent) {
        emit(&skipped_line(e));
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        emit(&playback_line(e));
    }

    fn on_sprite_frame(&mut self, e: &SpriteFrameEvent) {
        if self.frames {
            emit(&sprite_line(e));
        }
    }

    fn on_feed_image(&mut self, e: &FeedImageEvent) {
        emit(&feed_line(e));
    }

    fn on_station(&mut self, e: &StationEvent) {
        emit(&station_line(e));
    }

    fn on_no_signal(&mut self, e: &NoSignalEvent) {
        emit(&format!("[solvara] station {} no signal", e.index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solvara_core::feed::LoadOutcome;
    use solvara_core::trace::WidgetKind;

    #[test]
    fn skipped_line_names_missing_element() {
        let line = skipped_line(&WidgetSkippedEvent {
            widget: WidgetKind::RadioTuner,
            missing: "#radio-audio",
        });
        assert_eq!(line, "[solvara] tuner skipped: #radio-audio missing");
    }

    #[test]
    fn sprite_line_mentions_scroll_only_when_clamped() {
        let mut e = SpriteFrameEvent {
            frame_index: 7,
            x: 50.0,
            y: 98.0,
            rotation: 0,
            scroll: None,
        };
        assert_eq!(sprite_line(&e), "[solvara] sprite #7 x=50 y=98 rot=0");
        e.scroll = Some(-5);
        assert!(sprite_line(&e).ends_with(" scroll=-5"));
    }

    #[test]
    fn feed_line_shows_outcome() {
        let line = feed_line(&FeedImageEvent {
            index: 4,
            outcome: LoadOutcome::Failed,
        });
        assert_eq!(line, "[solvara] feed image 4 Failed");
    }
}
