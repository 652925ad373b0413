// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page widgets.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! widget drivers call when something observable happens. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use crate::feed::LoadOutcome;
use crate::playback::PlaybackState;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which widget an event comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Main audio play/pause button.
    AudioToggle,
    /// `MY`/`OUR` flicker text.
    FlickerText,
    /// Keyboard-driven sprite.
    Sprite,
    /// Newsletter popup.
    Newsletter,
    /// Elapsed-time counter.
    MissionTimer,
    /// Image carousel.
    ImageFeed,
    /// Radio tuner.
    RadioTuner,
    /// Call-to-action buttons.
    CallToAction,
}

impl WidgetKind {
    /// Returns a short, stable name for log lines and exports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AudioToggle => "audio",
            Self::FlickerText => "flicker",
            Self::Sprite => "sprite",
            Self::Newsletter => "newsletter",
            Self::MissionTimer => "mission",
            Self::ImageFeed => "feed",
            Self::RadioTuner => "tuner",
            Self::CallToAction => "cta",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a widget found its elements and attached its listeners.
#[derive(Clone, Copy, Debug)]
pub struct WidgetMountedEvent {
    /// The widget.
    pub widget: WidgetKind,
}

/// Emitted when a widget's setup was skipped because markup is missing.
#[derive(Clone, Copy, Debug)]
pub struct WidgetSkippedEvent {
    /// The widget.
    pub widget: WidgetKind,
    /// Selector of the first missing element.
    pub missing: &'static str,
}

/// Emitted when a play/pause toggle changes state.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackEvent {
    /// The widget owning the toggle.
    pub widget: WidgetKind,
    /// New state.
    pub state: PlaybackState,
}

/// Emitted for each sprite frame that moved the sprite.
#[derive(Clone, Copy, Debug)]
pub struct SpriteFrameEvent {
    /// Frame counter of the animation loop.
    pub frame_index: u64,
    /// New `x` in percent.
    pub x: f64,
    /// New `y` in percent.
    pub y: f64,
    /// New rotation in degrees.
    pub rotation: u16,
    /// Page scroll applied this frame, if any.
    pub scroll: Option<i32>,
}

/// Emitted when a feed preload finished and the image was swapped.
#[derive(Clone, Copy, Debug)]
pub struct FeedImageEvent {
    /// Feed index the preload was for.
    pub index: usize,
    /// How the preload finished.
    pub outcome: LoadOutcome,
}

/// Emitted when the tuner changed station.
#[derive(Clone, Copy, Debug)]
pub struct StationEvent {
    /// Selected station index.
    pub index: usize,
    /// Playback was stopped by the change.
    pub stopped_playback: bool,
    /// A new source was bound to the radio element.
    pub source_changed: bool,
}

/// Emitted when play was pressed on a station without a source.
#[derive(Clone, Copy, Debug)]
pub struct NoSignalEvent {
    /// Selected station index.
    pub index: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from widget drivers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a widget is mounted.
    fn on_widget_mounted(&mut self, e: &WidgetMountedEvent) {
        _ = e;
    }

    /// Called when a widget's setup is skipped.
    fn on_widget_skipped(&mut self, e: &WidgetSkippedEvent) {
        _ = e;
    }

    /// Called when a play/pause toggle changes state.
    fn on_playback(&mut self, e: &PlaybackEvent) {
        _ = e;
    }

    /// Called after a sprite frame that moved the sprite.
    fn on_sprite_frame(&mut self, e: &SpriteFrameEvent) {
        _ = e;
    }

    /// Called when a feed image was swapped.
    fn on_feed_image(&mut self, e: &FeedImageEvent) {
        _ = e;
    }

    /// Called when the tuner changed station.
    fn on_station(&mut self, e: &StationEvent) {
        _ = e;
    }

    /// Called when play was refused for lack of signal.
    fn on_no_signal(&mut self, e: &NoSignalEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Generates a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident, $event:ty, $sink_method:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$sink_method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits a [`WidgetMountedEvent`].
        widget_mounted,
        WidgetMountedEvent,
        on_widget_mounted
    );
    forward!(
        /// Emits a [`WidgetSkippedEvent`].
        widget_skipped,
        WidgetSkippedEvent,
        on_widget_skipped
    );
    forward!(
        /// Emits a [`PlaybackEvent`].
        playback,
        PlaybackEvent,
        on_playback
    );
    forward!(
        /// Emits a [`SpriteFrameEvent`].
        sprite_frame,
        SpriteFrameEvent,
        on_sprite_frame
    );
    forward!(
        /// Emits a [`FeedImageEvent`].
        feed_image,
        FeedImageEvent,
        on_feed_image
    );
    forward!(
        /// Emits a [`StationEvent`].
        station,
        StationEvent,
        on_station
    );
    forward!(
        /// Emits a [`NoSignalEvent`].
        no_signal,
        NoSignalEvent,
        on_no_signal
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_widget_mounted(&WidgetMountedEvent {
            widget: WidgetKind::Sprite,
        });
        sink.on_no_signal(&NoSignalEvent { index: 2 });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.widget_skipped(&WidgetSkippedEvent {
            widget: WidgetKind::ImageFeed,
            missing: "#feed-image",
        });
        tracer.feed_image(&FeedImageEvent {
            index: 0,
            outcome: LoadOutcome::Failed,
        });
    }

    #[test]
    fn widget_names_are_distinct() {
        let kinds = [
            WidgetKind::AudioToggle,
            WidgetKind::FlickerText,
            WidgetKind::Sprite,
            WidgetKind::Newsletter,
            WidgetKind::MissionTimer,
            WidgetKind::ImageFeed,
            WidgetKind::RadioTuner,
            WidgetKind::CallToAction,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            stations: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_station(&mut self, e: &StationEvent) {
                self.stations.push(e.index);
            }
        }

        let mut sink = RecordingSink {
            stations: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.station(&StationEvent {
            index: 3,
            stopped_playback: false,
            source_changed: false,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.stations, &[3]);
    }
}
