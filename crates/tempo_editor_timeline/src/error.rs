// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised by timeline operations.

use crate::media::MediaId;
use crate::track::TrackId;
use std::path::PathBuf;

/// Error when editing a timeline or loading its settings
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// Track is not part of this timeline
    #[error("Track not found: {0:?}")]
    TrackNotFound(TrackId),

    /// Media is not owned by any track of this timeline
    #[error("Media not found: {0:?}")]
    MediaNotFound(MediaId),

    /// Name is empty or already taken
    #[error("Invalid track name: {0:?}")]
    InvalidTrackName(String),

    /// Re-parenting would make a track its own ancestor
    #[error("Track {track:?} cannot be parented under {parent:?}")]
    ParentCycle {
        /// Track being re-parented
        track: TrackId,
        /// Requested parent
        parent: TrackId,
    },

    /// Deleting selected media is not supported
    #[error("Deleting selected media is not implemented")]
    MediaDeletionNotImplemented,

    /// Settings file could not be read or written
    #[error("Settings I/O error at {path:?}: {source}")]
    SettingsIo {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings values are out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file is not valid RON
    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] ron::error::SpannedError),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] ron::Error),
}

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
