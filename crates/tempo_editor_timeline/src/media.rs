// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-ranged media items placed on tracks.

use crate::units::TimeScale;
use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaId(pub Uuid);

impl MediaId {
    /// Create a new random media ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

/// A time-ranged item on a track, e.g. an animation clip segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Unique media ID
    pub id: MediaId,
    /// First frame covered by this item
    start_frame: i32,
    /// Number of frames covered
    duration_frames: i32,
    /// Horizontal position in pixels
    #[serde(skip)]
    x: f32,
    /// Width in pixels
    #[serde(skip)]
    width: f32,
    /// Visibility from the last layout pass
    #[serde(skip)]
    visible: bool,
    /// Bounds from the last layout pass
    #[serde(skip, default = "empty_rect")]
    bounds: Rect,
}

fn empty_rect() -> Rect {
    Rect::NOTHING
}

impl Media {
    /// Create a media item; start is clamped to `>= 0` and duration to `>= 1`
    pub fn new(start_frame: i32, duration_frames: i32) -> Self {
        Self {
            id: MediaId::new(),
            start_frame: start_frame.max(0),
            duration_frames: duration_frames.max(1),
            x: 0.0,
            width: 0.0,
            visible: false,
            bounds: Rect::NOTHING,
        }
    }

    /// First frame
    pub fn start_frame(&self) -> i32 {
        self.start_frame
    }

    /// Length in frames
    pub fn duration_frames(&self) -> i32 {
        self.duration_frames
    }

    /// Frame just past the end
    pub fn end_frame(&self) -> i32 {
        self.start_frame.saturating_add(self.duration_frames)
    }

    /// Whether the frame lies inside this item
    pub fn contains_frame(&self, frame: i32) -> bool {
        frame >= self.start_frame && frame < self.end_frame()
    }

    /// Horizontal pixel position
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Pixel width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Visibility computed by the last layout pass
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bounds computed by the last layout pass
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn set_range(&mut self, start_frame: i32, duration_frames: i32) {
        self.start_frame = start_frame.max(0);
        self.duration_frames = duration_frames.max(1);
    }

    /// Refresh the pixel position from the frame range
    pub(crate) fn update_position(&mut self, scale: &TimeScale) {
        self.x = scale.frame_to_x(self.start_frame);
        self.width = scale.frames_to_width(self.duration_frames);
    }

    /// Take visibility and vertical extent from the owning track row
    pub(crate) fn apply_row(&mut self, visible: bool, row: Rect) {
        self.visible = visible;
        self.bounds = Rect::from_min_max(
            Pos2::new(self.x, row.min.y),
            Pos2::new(self.x + self.width, row.max.y),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_range_clamped() {
        let media = Media::new(-5, 0);
        assert_eq!(media.start_frame(), 0);
        assert_eq!(media.duration_frames(), 1);

        let media = Media::new(10, 20);
        assert_eq!(media.end_frame(), 30);
        assert!(media.contains_frame(10));
        assert!(media.contains_frame(29));
        assert!(!media.contains_frame(30));
    }

    #[test]
    fn test_end_frame_saturates() {
        let media = Media::new(i32::MAX - 5, 100);
        assert_eq!(media.end_frame(), i32::MAX);
        assert!(media.contains_frame(i32::MAX - 1));
    }

    #[test]
    fn test_media_position() {
        let scale = TimeScale {
            frames_per_second: 30.0,
            units_per_second: 100.0,
            zoom: 1.0,
            start_offset: 50.0,
        };
        let mut media = Media::new(30, 60);
        media.update_position(&scale);
        assert_eq!(media.x(), 150.0);
        assert_eq!(media.width(), 200.0);

        let row = Rect::from_min_max(Pos2::new(24.0, 44.0), Pos2::new(400.0, 66.0));
        media.apply_row(true, row);
        assert!(media.is_visible());
        assert_eq!(media.bounds().min, Pos2::new(150.0, 44.0));
        assert_eq!(media.bounds().max, Pos2::new(350.0, 66.0));
    }
}
