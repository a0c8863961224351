// SPDX-License-Identifier: MIT OR Apache-2.0
//! Track definitions for the timeline.

use crate::media::{Media, MediaId};
use crate::timeline::TimelineId;
use egui::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    /// Create a new random track ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

/// Placement of a track row computed by the layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    /// Indent from the left edge of the track list
    pub x_offset: f32,
    /// Whether the row is shown
    pub visible: bool,
    /// Row bounds in the track list
    pub bounds: Rect,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            visible: false,
            bounds: Rect::NOTHING,
        }
    }
}

/// A named row in the timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: TrackId,
    /// Track name, unique within its timeline
    pub(crate) name: String,
    /// Name of the archetype that created this track
    pub archetype: String,
    /// Parent track, if nested
    pub(crate) parent: Option<TrackId>,
    /// Media items in display order
    pub(crate) media: Vec<Media>,
    /// Whether child tracks are shown
    pub(crate) expanded: bool,
    /// Whether the track is muted
    pub(crate) muted: bool,
    /// Whether the track loops its media
    pub(crate) looping: bool,
    /// Row height
    pub height: f32,
    /// Track color
    pub color: [u8; 3],
    /// Timeline that currently owns this track
    #[serde(skip)]
    pub(crate) timeline: Option<TimelineId>,
    #[serde(skip)]
    pub(crate) layout: TrackLayout,
}

impl Track {
    /// Create a new track
    pub fn new(name: impl Into<String>, height: f32) -> Self {
        Self {
            id: TrackId::new(),
            name: name.into(),
            archetype: String::new(),
            parent: None,
            media: Vec::new(),
            expanded: true,
            muted: false,
            looping: false,
            height,
            color: [150, 150, 150],
            timeline: None,
            layout: TrackLayout::default(),
        }
    }

    /// Set the parent before the track is added to a timeline
    pub fn with_parent(mut self, parent: TrackId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Add media before the track is added to a timeline
    pub fn with_media(mut self, media: Media) -> Self {
        self.media.push(media);
        self
    }

    /// Track name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent track
    pub fn parent(&self) -> Option<TrackId> {
        self.parent
    }

    /// Media items in order
    pub fn media(&self) -> &[Media] {
        &self.media
    }

    /// Find a media item on this track
    pub fn media_item(&self, media_id: MediaId) -> Option<&Media> {
        self.media.iter().find(|m| m.id == media_id)
    }

    pub(crate) fn media_item_mut(&mut self, media_id: MediaId) -> Option<&mut Media> {
        self.media.iter_mut().find(|m| m.id == media_id)
    }

    /// Whether this track owns the media item
    pub fn contains_media(&self, media_id: MediaId) -> bool {
        self.media.iter().any(|m| m.id == media_id)
    }

    /// Whether child tracks are shown
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the track is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the track loops
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Owning timeline, if any
    pub fn timeline(&self) -> Option<TimelineId> {
        self.timeline
    }

    /// Layout computed by the last arrange pass
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Frame just past the last media item
    pub fn content_end_frame(&self) -> i32 {
        self.media.iter().map(Media::end_frame).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_creation() {
        let track = Track::new("Camera", 22.0);
        assert_eq!(track.name(), "Camera");
        assert!(track.is_expanded());
        assert!(track.parent().is_none());
        assert!(track.timeline().is_none());
        assert_eq!(track.content_end_frame(), 0);
    }

    #[test]
    fn test_track_media() {
        let clip = Media::new(10, 20);
        let clip_id = clip.id;
        let track = Track::new("Clips", 22.0)
            .with_media(clip)
            .with_media(Media::new(40, 5));

        assert!(track.contains_media(clip_id));
        assert_eq!(track.media_item(clip_id).map(Media::start_frame), Some(10));
        assert_eq!(track.content_end_frame(), 45);
    }
}
