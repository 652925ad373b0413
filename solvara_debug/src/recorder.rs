// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as a [`RecordedEvent`].

use solvara_core::trace::{
    FeedImageEvent, NoSignalEvent, PlaybackEvent, SpriteFrameEvent, StationEvent, TraceSink,
    WidgetKind, WidgetMountedEvent, WidgetSkippedEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_widget_mounted`].
    WidgetMounted(WidgetMountedEvent),
    /// See [`TraceSink::on_widget_skipped`].
    WidgetSkipped(WidgetSkippedEvent),
    /// See [`TraceSink::on_playback`].
    Playback(PlaybackEvent),
    /// See [`TraceSink::on_sprite_frame`].
    SpriteFrame(SpriteFrameEvent),
    /// See [`TraceSink::on_feed_image`].
    FeedImage(FeedImageEvent),
    /// See [`TraceSink::on_station`].
    Station(StationEvent),
    /// See [`TraceSink::on_no_signal`].
    NoSignal(NoSignalEvent),
}

impl RecordedEvent {
    /// Returns the event's name as used in exports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WidgetMounted(_) => "WidgetMounted",
            Self::WidgetSkipped(_) => "WidgetSkipped",
            Self::Playback(_) => "Playback",
            Self::SpriteFrame(_) => "SpriteFrame",
            Self::FeedImage(_) => "FeedImage",
            Self::Station(_) => "Station",
            Self::NoSignal(_) => "NoSignal",
        }
    }

    /// Returns the widget the event came from.
    #[must_use]
    pub const fn widget(&self) -> WidgetKind {
        match self {
            Self::WidgetMounted(e) => e.widget,
            Self::WidgetSkipped(e) => e.widget,
            Self::Playback(e) => e.widget,
            Self::SpriteFrame(_) => WidgetKind::Sprite,
            Self::FeedImage(_) => WidgetKind::ImageFeed,
            Self::Station(_) | Self::NoSignal(_) => WidgetKind::RadioTuner,
        }
    }
}

/// A [`TraceSink`] that stores every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterates over the events from `widget`.
    pub fn for_widget(&self, widget: WidgetKind) -> impl Iterator<Item = &RecordedEvent> {
        self.events.iter().filter(move |e| e.widget() == widget)
    }
}

impl TraceSink for RecorderSink {
    fn on_widget_mounted(&mut self, e: &WidgetMountedEvent) {
        self.events.push(RecordedEvent::WidgetMounted(*e));
    }

    fn on_widget_skipped(&mut self, e: &WidgetSkippedEvent) {
        self.events.push(RecordedEvent::WidgetSkipped(*e));
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.events.push(RecordedEvent::Playback(*e));
    }

    fn on_sprite_frame(&mut self, e: &SpriteFrameEvent) {
        self.events.push(RecordedEvent::SpriteFrame(*e));
    }

    fn on_feed_image(&mut self, e: &FeedImageEvent) {
        self.events.push(RecordedEvent::FeedImage(*e));
    }

    fn on_station(&mut self, e: &StationEvent) {
        self.events.push(RecordedEvent::Station(*e));
    }

    fn on_no_signal(&mut self, e: &NoSignalEvent) {
        self.events.push(RecordedEvent::NoSignal(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solvara_core::config::PageConfig;
    use solvara_core::playback::PlaybackState;
    use solvara_core::sprite::{MovementKey, SpriteNav};
    use solvara_core::trace::Tracer;

    #[test]
    fn records_in_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_widget_mounted(&WidgetMountedEvent {
            widget: WidgetKind::AudioToggle,
        });
        rec.on_playback(&PlaybackEvent {
            widget: WidgetKind::AudioToggle,
            state: PlaybackState::Playing,
        });
        rec.on_no_signal(&NoSignalEvent { index: 1 });

        let names: Vec<_> = rec.events().iter().map(RecordedEvent::name).collect();
        assert_eq!(names, ["WidgetMounted", "Playback", "NoSignal"]);
        assert_eq!(rec.for_widget(WidgetKind::RadioTuner).count(), 1);
    }

    #[test]
    fn records_through_tracer() {
        let mut rec = RecorderSink::new();
        let mut nav = SpriteNav::new(PageConfig::landing().sprite);
        nav.key_down(MovementKey::ArrowUp);
        {
            let mut tracer = Tracer::new(&mut rec);
            for frame_index in 0..3 {
                let outcome = nav.step();
                let s = *nav.sprite();
                tracer.sprite_frame(&SpriteFrameEvent {
                    frame_index,
                    x: s.x,
                    y: s.y,
                    rotation: s.rotation,
                    scroll: outcome.scroll,
                });
            }
        }
        assert_eq!(rec.events().len(), 3);
        let RecordedEvent::SpriteFrame(last) = rec.events()[2] else {
            panic!("expected a sprite frame");
        };
        assert_eq!(last.frame_index, 2);
        assert_eq!(last.y, 89.25);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut rec = RecorderSink::new();
        rec.on_station(&StationEvent {
            index: 0,
            stopped_playback: false,
            source_changed: true,
        });
        rec.clear();
        assert!(rec.into_events().is_empty());
    }
}
