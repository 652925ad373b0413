// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Play/pause toggles.
//!
//! [`PlayToggle`] mirrors an audio element's paused/playing state and the
//! label of the button that controls it. The main "listen" button and the
//! radio play button share this model and differ only in their
//! [`ToggleLabels`].

/// Whether an audio element is currently playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// Not playing (initial state, after a pause, or after the track ended).
    #[default]
    Paused,
    /// Playing.
    Playing,
}

/// What the audio element has to do after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackCommand {
    /// Start or resume playback.
    Play,
    /// Pause playback.
    Pause,
}

/// Button labels for the two playback states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLabels {
    /// Shown while paused.
    pub paused: &'static str,
    /// Shown while playing.
    pub playing: &'static str,
}

/// Labels of the main audio button.
pub const LISTEN_LABELS: ToggleLabels = ToggleLabels {
    paused: "\u{25B6} LISTEN",
    playing: "\u{23F8} PAUSE",
};

/// Labels of the radio play button.
pub const RADIO_LABELS: ToggleLabels = ToggleLabels {
    paused: "\u{25B6} PLAY",
    playing: "\u{23F8} PAUSE",
};

/// Class added to a play button while its audio is playing.
pub const PLAYING_CLASS: &str = "playing";

/// A play/pause toggle bound to one audio element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayToggle {
    state: PlaybackState,
    labels: ToggleLabels,
}

impl PlayToggle {
    /// Creates a paused toggle.
    #[must_use]
    pub const fn new(labels: ToggleLabels) -> Self {
        Self {
            state: PlaybackState::Paused,
            labels,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns `true` while playing.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing)
    }

    /// Flips the state and returns what the audio element must do.
    pub fn toggle(&mut self) -> PlaybackCommand {
        match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                PlaybackCommand::Pause
            }
            PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                PlaybackCommand::Play
            }
        }
    }

    /// Moves to the paused state. Returns `true` if playback was running, in
    /// which case the caller must pause the audio element.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.state = PlaybackState::Paused;
        was_playing
    }

    /// Handles the end of the track. The toggle returns to the paused state
    /// unconditionally.
    pub fn ended(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Adopts the audio element's actual state.
    ///
    /// A `play()` the browser refused leaves the element paused while the
    /// toggle still says playing; syncing before the next transition keeps
    /// the toggle from sending a pause to an element that never started.
    pub fn sync(&mut self, playing: bool) {
        self.state = if playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
    }

    /// Returns the button label for the current state.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.state {
            PlaybackState::Paused => self.labels.paused,
            PlaybackState::Playing => self.labels.playing,
        }
    }
}
