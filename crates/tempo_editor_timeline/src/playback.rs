// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback state exposed to an external animation driver.
//!
//! The timeline does not advance time itself. It records the requested state,
//! raises Play/Pause/Stop notifications and keeps the cached state of its
//! transport buttons in sync.

use serde::{Deserialize, Serialize};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Stopped
    #[default]
    Stopped,
    /// Playing forward
    Playing,
    /// Paused
    Paused,
}

impl PlaybackState {
    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Get a status string for display
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

/// Icon shown on the play button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayButtonIcon {
    /// Clicking starts playback
    #[default]
    Play,
    /// Clicking pauses playback
    Pause,
}

/// Cached state of the transport buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackButtons {
    /// Play/pause button icon
    pub play_icon: PlayButtonIcon,
    /// Whether the stop button is enabled
    pub stop_enabled: bool,
    /// Whether the play button is enabled
    pub play_enabled: bool,
}

impl PlaybackButtons {
    /// Button state matching a playback state
    pub fn for_state(state: PlaybackState) -> Self {
        Self {
            play_icon: if state.is_playing() {
                PlayButtonIcon::Pause
            } else {
                PlayButtonIcon::Play
            },
            stop_enabled: state != PlaybackState::Stopped,
            play_enabled: true,
        }
    }

    /// Whether the play button currently means "pause"
    pub fn is_pause(&self) -> bool {
        self.play_icon == PlayButtonIcon::Pause
    }
}

impl Default for PlaybackButtons {
    fn default() -> Self {
        Self::for_state(PlaybackState::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_for_state() {
        let stopped = PlaybackButtons::for_state(PlaybackState::Stopped);
        assert!(!stopped.is_pause());
        assert!(!stopped.stop_enabled);

        let playing = PlaybackButtons::for_state(PlaybackState::Playing);
        assert!(playing.is_pause());
        assert!(playing.stop_enabled);

        let paused = PlaybackButtons::for_state(PlaybackState::Paused);
        assert!(!paused.is_pause());
        assert!(paused.stop_enabled);
    }
}
