// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted landing page.

use solvara_core::config::PageConfig;
use solvara_core::trace::WidgetKind;
use web_sys::Document;

use crate::dom::SharedSink;
use crate::widgets::Mount;
use crate::widgets::audio::AudioToggle;
use crate::widgets::cta::CallToAction;
use crate::widgets::feed::ImageFeed;
use crate::widgets::flicker::Flicker;
use crate::widgets::mission::MissionTimer;
use crate::widgets::popup::{Newsletter, PopupHandle};
use crate::widgets::sprite::SpriteWidget;
use crate::widgets::tuner::RadioTuner;

/// Owner of every widget on the page.
///
/// A widget whose markup is missing is `None`; the others are unaffected.
/// Dropping the page (or calling [`teardown`](Self::teardown)) removes every
/// listener and cancels every timer and frame callback.
#[derive(Debug)]
pub struct Page {
    /// Main audio toggle.
    pub audio: Option<AudioToggle>,
    /// Flicker text.
    pub flicker: Option<Flicker>,
    /// Keyboard sprite.
    pub sprite: Option<SpriteWidget>,
    /// Newsletter popup controls.
    pub newsletter: Option<Newsletter>,
    /// Mission timer.
    pub mission: Option<MissionTimer>,
    /// Image feed.
    pub feed: Option<ImageFeed>,
    /// Radio tuner.
    pub tuner: Option<RadioTuner>,
    /// Call-to-action buttons.
    pub cta: Option<CallToAction>,
}

impl Page {
    /// Mounts every widget found in `doc`.
    #[must_use]
    pub fn mount(doc: &Document, config: &PageConfig, sink: &SharedSink) -> Self {
        let ctx = |widget| Mount::new(doc, sink, widget);

        let newsletter = Newsletter::mount(&ctx(WidgetKind::Newsletter));
        let popup = match &newsletter {
            Some(n) => Some(n.handle().clone()),
            None => PopupHandle::find(doc),
        };

        Self {
            audio: AudioToggle::mount(&ctx(WidgetKind::AudioToggle)),
            flicker: Flicker::mount(&ctx(WidgetKind::FlickerText), config.flicker),
            sprite: SpriteWidget::mount(&ctx(WidgetKind::Sprite), config.sprite),
            newsletter,
            mission: MissionTimer::mount(&ctx(WidgetKind::MissionTimer), config.mission_tick),
            feed: ImageFeed::mount(&ctx(WidgetKind::ImageFeed), config.feed),
            tuner: RadioTuner::mount(&ctx(WidgetKind::RadioTuner), config.tuner),
            cta: CallToAction::mount(&ctx(WidgetKind::CallToAction), popup),
        }
    }

    /// Number of widgets that mounted.
    #[must_use]
    pub fn mounted_count(&self) -> usize {
        [
            self.audio.is_some(),
            self.flicker.is_some(),
            self.sprite.is_some(),
            self.newsletter.is_some(),
            self.mission.is_some(),
            self.feed.is_some(),
            self.tuner.is_some(),
            self.cta.is_some(),
        ]
        .into_iter()
        .filter(|&m| m)
        .count()
    }

    /// Drops every widget.
    pub fn teardown(self) {
        drop(self);
    }
}
