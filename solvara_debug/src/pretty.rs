// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Each line is
//! prefixed with the event's sequence number.

use std::io::Write;

use solvara_core::trace::{
    FeedImageEvent, NoSignalEvent, PlaybackEvent, SpriteFrameEvent, StationEvent, TraceSink,
    WidgetMountedEvent, WidgetSkippedEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    seq: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        let seq = self.seq;
        self.seq += 1;
        // Trace output is best-effort.
        let _ = writeln!(self.writer, "[{seq:>5}] {args}");
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_widget_mounted(&mut self, e: &WidgetMountedEvent) {
        self.line(format_args!("{:<10} mounted", e.widget.name()));
    }

    fn on_widget_skipped(&mut self, e: &WidgetSkippedEvent) {
        self.line(format_args!(
            "{:<10} skipped  missing={}",
            e.widget.name(),
            e.missing
        ));
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.line(format_args!("{:<10} {:?}", e.widget.name(), e.state));
    }

    fn on_sprite_frame(&mut self, e: &SpriteFrameEvent) {
        match e.scroll {
            Some(dy) => self.line(format_args!(
                "sprite     frame={} x={:.2} y={:.2} rot={} scroll={dy}",
                e.frame_index, e.x, e.y, e.rotation
            )),
            None => self.line(format_args!(
                "sprite     frame={} x={:.2} y={:.2} rot={}",
                e.frame_index, e.x, e.y, e.rotation
            )),
        }
    }

    fn on_feed_image(&mut self, e: &FeedImageEvent) {
        self.line(format_args!("feed       image={} {:?}", e.index, e.outcome));
    }

    fn on_station(&mut self, e: &StationEvent) {
        self.line(format_args!(
            "tuner      station={} stopped={} new_source={}",
            e.index, e.stopped_playback, e.source_changed
        ));
    }

    fn on_no_signal(&mut self, e: &NoSignalEvent) {
        self.line(format_args!("tuner      station={} no signal", e.index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solvara_core::feed::LoadOutcome;
    use solvara_core::trace::WidgetKind;

    fn output(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_writer()).unwrap()
    }

    #[test]
    fn one_line_per_event_with_sequence() {
        let out = output(|s| {
            s.on_widget_mounted(&WidgetMountedEvent {
                widget: WidgetKind::ImageFeed,
            });
            s.on_feed_image(&FeedImageEvent {
                index: 3,
                outcome: LoadOutcome::Failed,
            });
        });
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[    0] feed       mounted");
        assert_eq!(lines[1], "[    1] feed       image=3 Failed");
    }

    #[test]
    fn sprite_frame_shows_scroll_when_clamped() {
        let out = output(|s| {
            s.on_sprite_frame(&SpriteFrameEvent {
                frame_index: 9,
                x: 50.0,
                y: 98.0,
                rotation: 0,
                scroll: Some(-5),
            });
        });
        assert_eq!(
            out,
            "[    0] sprite     frame=9 x=50.00 y=98.00 rot=0 scroll=-5\n"
        );
    }

    #[test]
    fn skipped_names_the_element() {
        let out = output(|s| {
            s.on_widget_skipped(&WidgetSkippedEvent {
                widget: WidgetKind::Sprite,
                missing: "#player",
            });
        });
        assert!(out.contains("sprite     skipped  missing=#player"));
    }
}
