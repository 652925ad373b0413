// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated radio tuner.
//!
//! [`Tuner`] owns the selected station, the radio play toggle, and the audio
//! source currently bound to the radio element. Selecting a station reports a
//! [`TuneChange`] describing every display update; pressing play reports a
//! [`PlayOutcome`].
//!
//! # Stale sources
//!
//! Selecting a station without a source does not clear the bound source; the
//! previous station's audio stays loaded on the element. Playback is still
//! refused because [`Tuner::press_play`] checks the *selected station*, never
//! the bound source.

use crate::playback::{PlayToggle, PlaybackCommand, RADIO_LABELS};

/// Message shown in place of the station name when a station has no signal.
pub const NO_SIGNAL: &str = "NO SIGNAL";

/// Class marking the active signal bars and the active station-list item.
pub const ACTIVE_CLASS: &str = "active";

/// Highest signal strength.
pub const MAX_SIGNAL: u8 = 3;

/// One entry of the station table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Station {
    /// Displayed frequency.
    pub freq: &'static str,
    /// Displayed name.
    pub name: &'static str,
    /// Audio source, if the station broadcasts anything.
    pub source: Option<&'static str>,
    /// Signal strength, `0..=MAX_SIGNAL`.
    pub signal: u8,
}

/// Stations of the landing page tuner, in dial order.
pub const STATIONS: [Station; 5] = [
    Station {
        freq: "88.1",
        name: "THE BED'S TOO BIG",
        source: Some(
            "https://res.cloudinary.com/duynyjs6q/video/upload/v1757220300/01_The_Bed_s_Too_Big_Without_You_h8bssq.m4a",
        ),
        signal: 3,
    },
    Station {
        freq: "91.5",
        name: "SIGNAL LOST",
        source: None,
        signal: 1,
    },
    Station {
        freq: "96.3",
        name: "STATIC",
        source: None,
        signal: 0,
    },
    Station {
        freq: "101.7",
        name: "INTERFERENCE",
        source: None,
        signal: 2,
    },
    Station {
        freq: "107.9",
        name: "DEAD AIR",
        source: None,
        signal: 0,
    },
];

/// Display updates after tuning to a station.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuneChange {
    /// Selected station index.
    pub index: usize,
    /// The selected station.
    pub station: Station,
    /// Needle position in percent of the dial width.
    pub needle_percent: u32,
    /// Radio playback was running and must be paused.
    pub stop_playback: bool,
    /// New source to bind to the radio element, if the station has one.
    pub new_source: Option<&'static str>,
}

impl TuneChange {
    /// Returns whether signal bar `bar` is lit for this station.
    #[must_use]
    pub fn bar_active(&self, bar: usize) -> bool {
        bar < usize::from(self.station.signal)
    }

    /// Returns whether station-list item `item` is the active one.
    #[must_use]
    pub fn item_active(&self, item: usize) -> bool {
        item == self.index
    }
}

/// Result of pressing the radio play button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The station has no source. Show [`NO_SIGNAL`] briefly, then restore
    /// `name`. Playback is untouched.
    NoSignal {
        /// Station name to restore.
        name: &'static str,
    },
    /// Playback toggled.
    Toggled(PlaybackCommand),
}

/// Tuner state: selected station, playback, and bound audio source.
#[derive(Clone, Debug)]
pub struct Tuner {
    stations: &'static [Station],
    index: usize,
    playback: PlayToggle,
    bound_source: Option<&'static str>,
}

impl Tuner {
    /// Creates a tuner with nothing bound and playback paused.
    ///
    /// The selection starts at the middle of the table, where a range input
    /// without a `value` attribute rests; call [`sync_index`](Self::sync_index)
    /// with the dial's actual value before relying on it.
    ///
    /// # Panics
    ///
    /// Panics if `stations` is empty.
    #[must_use]
    pub fn new(stations: &'static [Station]) -> Self {
        assert!(!stations.is_empty(), "tuner needs at least one station");
        Self {
            stations,
            index: stations.len() / 2,
            playback: PlayToggle::new(RADIO_LABELS),
            bound_source: None,
        }
    }

    /// Creates the landing page tuner.
    #[must_use]
    pub fn landing() -> Self {
        Self::new(&STATIONS)
    }

    /// Returns the selected station index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the selected station.
    #[must_use]
    pub fn station(&self) -> &Station {
        &self.stations[self.index]
    }

    /// Returns the station table.
    #[must_use]
    pub const fn stations(&self) -> &'static [Station] {
        self.stations
    }

    /// Returns the radio play toggle.
    #[must_use]
    pub const fn playback(&self) -> &PlayToggle {
        &self.playback
    }

    /// Returns the source last bound to the radio element.
    #[must_use]
    pub const fn bound_source(&self) -> Option<&'static str> {
        self.bound_source
    }

    /// Adopts the dial position without any display update, clamped to the
    /// table.
    pub fn sync_index(&mut self, index: usize) {
        self.index = index.min(self.stations.len() - 1);
    }

    /// Adopts the radio element's actual playing state.
    pub fn sync_playback(&mut self, playing: bool) {
        self.playback.sync(playing);
    }

    /// Tunes to station `index`, clamped to the table.
    ///
    /// Stops running playback and binds the station's source if it has one.
    pub fn select(&mut self, index: usize) -> TuneChange {
        self.index = index.min(self.stations.len() - 1);
        let station = self.stations[self.index];
        let stop_playback = self.playback.stop();
        if station.source.is_some() {
            self.bound_source = station.source;
        }
        TuneChange {
            index: self.index,
            station,
            needle_percent: needle_percent(self.index),
            stop_playback,
            new_source: station.source,
        }
    }

    /// Handles the play button.
    pub fn press_play(&mut self) -> PlayOutcome {
        let station = self.station();
        if station.source.is_none() {
            return PlayOutcome::NoSignal { name: station.name };
        }
        PlayOutcome::Toggled(self.playback.toggle())
    }

    /// Handles the end of the radio track.
    pub fn ended(&mut self) {
        self.playback.ended();
    }
}

/// Needle position for station `index`: `10 + index * 20` percent.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "station tables are tiny; the index fits in u32"
)]
pub const fn needle_percent(index: usize) -> u32 {
    10 + index as u32 * 20
}

/// Maps a volume slider value (0–100) to an element volume (0.0–1.0).
#[must_use]
pub fn volume_from_slider(value: f64) -> f64 {
    (value / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackState;

    #[test]
    fn needle_positions() {
        let needles: [u32; 5] = core::array::from_fn(needle_percent);
        assert_eq!(needles, [10, 30, 50, 70, 90]);
    }

    #[test]
    fn select_updates_display_and_bars() {
        let mut tuner = Tuner::landing();
        let change = tuner.select(3);
        assert_eq!(change.station.freq, "101.7");
        assert_eq!(change.station.name, "INTERFERENCE");
        assert_eq!(change.needle_percent, 70);
        let bars: [bool; 3] = core::array::from_fn(|i| change.bar_active(i));
        assert_eq!(bars, [true, true, false]);
        assert!(change.item_active(3));
        assert!(!change.item_active(0));
        assert_eq!(change.new_source, None);
    }

    #[test]
    fn select_clamps_out_of_range() {
        let mut tuner = Tuner::landing();
        assert_eq!(tuner.select(40).index, 4);
    }

    #[test]
    fn select_stops_running_playback() {
        let mut tuner = Tuner::landing();
        tuner.select(0);
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::Toggled(PlaybackCommand::Play)
        );
        let change = tuner.select(0);
        assert!(change.stop_playback);
        assert_eq!(tuner.playback().state(), PlaybackState::Paused);
        assert_eq!(tuner.playback().label(), "\u{25B6} PLAY");

        let change = tuner.select(1);
        assert!(!change.stop_playback, "already paused");
    }

    #[test]
    fn no_source_station_refuses_play() {
        let mut tuner = Tuner::landing();
        tuner.select(2);
        let before = tuner.playback().state();
        assert_eq!(tuner.press_play(), PlayOutcome::NoSignal { name: "STATIC" });
        assert_eq!(tuner.playback().state(), before);
    }

    #[test]
    fn stale_source_stays_bound_but_play_is_refused() {
        let mut tuner = Tuner::landing();
        tuner.select(0);
        let first = STATIONS[0].source;
        assert_eq!(tuner.bound_source(), first);

        tuner.select(1);
        assert_eq!(tuner.bound_source(), first, "source is not cleared");
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::NoSignal {
                name: "SIGNAL LOST"
            }
        );
        assert!(!tuner.playback().is_playing());
    }

    #[test]
    fn play_before_any_input_uses_resting_dial_position() {
        let mut tuner = Tuner::landing();
        assert_eq!(tuner.index(), 2);
        assert_eq!(tuner.press_play(), PlayOutcome::NoSignal { name: "STATIC" });
        assert!(!tuner.playback().is_playing());
    }

    #[test]
    fn sync_index_follows_the_dial_without_binding() {
        let mut tuner = Tuner::landing();
        tuner.sync_index(0);
        assert_eq!(tuner.bound_source(), None);
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::Toggled(PlaybackCommand::Play)
        );
        tuner.sync_index(17);
        assert_eq!(tuner.index(), 4);
    }

    #[test]
    fn refused_play_is_retried_not_paused() {
        let mut tuner = Tuner::landing();
        tuner.select(0);
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::Toggled(PlaybackCommand::Play)
        );
        // The browser rejected play(); the element is still paused.
        tuner.sync_playback(false);
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::Toggled(PlaybackCommand::Play)
        );
    }

    #[test]
    fn select_after_refused_play_does_not_stop() {
        let mut tuner = Tuner::landing();
        tuner.select(0);
        tuner.press_play();
        tuner.sync_playback(false);
        assert!(!tuner.select(1).stop_playback);
    }

    #[test]
    fn no_signal_restores_the_current_station_name() {
        let mut tuner = Tuner::landing();
        tuner.select(3);
        tuner.select(1);
        let PlayOutcome::NoSignal { name } = tuner.press_play() else {
            panic!("station 1 has no source");
        };
        assert_eq!(name, "SIGNAL LOST");
        assert_eq!(name, tuner.station().name);
    }

    #[test]
    fn play_toggles_and_ended_resets() {
        let mut tuner = Tuner::landing();
        tuner.select(0);
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::Toggled(PlaybackCommand::Play)
        );
        assert_eq!(
            tuner.press_play(),
            PlayOutcome::Toggled(PlaybackCommand::Pause)
        );
        tuner.press_play();
        tuner.ended();
        assert!(!tuner.playback().is_playing());
    }

    #[test]
    fn volume_maps_linearly() {
        assert_eq!(volume_from_slider(0.0), 0.0);
        assert_eq!(volume_from_slider(70.0), 0.7);
        assert_eq!(volume_from_slider(100.0), 1.0);
        assert_eq!(volume_from_slider(250.0), 1.0);
    }

    #[test]
    fn signal_levels_are_in_range() {
        assert!(STATIONS.iter().all(|s| s.signal <= MAX_SIGNAL));
    }
}
