// SPDX-License-Identifier: MIT OR Apache-2.0
//! Track and media selection sets.

use crate::media::MediaId;
use crate::track::TrackId;

/// Something that can be selected in the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionTarget {
    /// A track row
    Track(TrackId),
    /// A media item
    Media(MediaId),
}

/// Selection state: two independent ordered sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    tracks: Vec<TrackId>,
    media: Vec<MediaId>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tracks in selection order
    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Selected media in selection order
    pub fn media(&self) -> &[MediaId] {
        &self.media
    }

    /// Check if a target is selected
    pub fn contains(&self, target: SelectionTarget) -> bool {
        match target {
            SelectionTarget::Track(id) => self.tracks.contains(&id),
            SelectionTarget::Media(id) => self.media.contains(&id),
        }
    }

    /// Whether the target is the only selected item of either kind
    pub fn is_sole(&self, target: SelectionTarget) -> bool {
        match target {
            SelectionTarget::Track(id) => self.media.is_empty() && self.tracks == [id],
            SelectionTarget::Media(id) => self.tracks.is_empty() && self.media == [id],
        }
    }

    /// Add a target; returns false if it was already selected
    pub fn add(&mut self, target: SelectionTarget) -> bool {
        if self.contains(target) {
            return false;
        }
        match target {
            SelectionTarget::Track(id) => self.tracks.push(id),
            SelectionTarget::Media(id) => self.media.push(id),
        }
        true
    }

    /// Remove a target; returns false if it was not selected
    pub fn remove(&mut self, target: SelectionTarget) -> bool {
        let before = self.len();
        match target {
            SelectionTarget::Track(id) => self.tracks.retain(|t| *t != id),
            SelectionTarget::Media(id) => self.media.retain(|m| *m != id),
        }
        self.len() != before
    }

    /// Drop every track for which `keep` returns false
    pub fn retain_tracks(&mut self, mut keep: impl FnMut(TrackId) -> bool) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|id| keep(*id));
        self.tracks.len() != before
    }

    /// Drop every media item for which `keep` returns false
    pub fn retain_media(&mut self, mut keep: impl FnMut(MediaId) -> bool) -> bool {
        let before = self.media.len();
        self.media.retain(|id| keep(*id));
        self.media.len() != before
    }

    /// Clear both sets
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.media.clear();
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.media.is_empty()
    }

    /// Total number of selected items
    pub fn len(&self) -> usize {
        self.tracks.len() + self.media.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut selection = Selection::new();
        let track = TrackId::new();
        let media = MediaId::new();

        assert!(selection.add(SelectionTarget::Track(track)));
        assert!(!selection.add(SelectionTarget::Track(track)));
        assert!(selection.add(SelectionTarget::Media(media)));
        assert_eq!(selection.len(), 2);

        assert!(selection.remove(SelectionTarget::Track(track)));
        assert!(!selection.remove(SelectionTarget::Track(track)));
        assert_eq!(selection.media(), [media]);
    }

    #[test]
    fn test_is_sole() {
        let mut selection = Selection::new();
        let a = TrackId::new();
        let b = TrackId::new();

        selection.add(SelectionTarget::Track(a));
        assert!(selection.is_sole(SelectionTarget::Track(a)));
        assert!(!selection.is_sole(SelectionTarget::Track(b)));

        selection.add(SelectionTarget::Media(MediaId::new()));
        assert!(!selection.is_sole(SelectionTarget::Track(a)));
    }

    #[test]
    fn test_retain_tracks() {
        let mut selection = Selection::new();
        let a = TrackId::new();
        let b = TrackId::new();
        selection.add(SelectionTarget::Track(a));
        selection.add(SelectionTarget::Track(b));

        assert!(selection.retain_tracks(|id| id != a));
        assert_eq!(selection.tracks(), [b]);
        assert!(!selection.retain_tracks(|_| true));
    }
}
