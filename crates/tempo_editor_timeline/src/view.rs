// SPDX-License-Identifier: MIT OR Apache-2.0
//! View adapter receiving layout results.
//!
//! The timeline core never talks to a GUI toolkit. A host implements
//! [`TimelineView`] to apply the visibility and bounds the layout pass computes,
//! and to react to scroll requests. Styling and icons belong to the
//! implementation, not to the core.

use crate::media::MediaId;
use crate::track::{TrackId, TrackLayout};
use egui::{Rect, Vec2};

/// Passive sink for layout results and view requests
pub trait TimelineView {
    /// Show or hide the "no tracks" placeholder
    fn set_placeholder_visible(&mut self, _visible: bool) {}

    /// Apply a track row layout
    fn set_track_layout(&mut self, _track: TrackId, _layout: &TrackLayout) {}

    /// Apply a media item layout
    fn set_media_layout(&mut self, _media: MediaId, _visible: bool, _bounds: Rect) {}

    /// Resize the background and the scrollable content area
    fn set_content_extent(&mut self, _background: Rect, _scroll_size: Vec2) {}

    /// Drop the row widget of a track that left the timeline
    fn track_removed(&mut self, _track: TrackId) {}

    /// Scroll so the track row is visible
    fn scroll_to_track(&mut self, _track: TrackId) {}

    /// Rebuild row widgets in the given order
    fn rebuild_track_order(&mut self, _order: &[TrackId]) {}
}

/// View that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl TimelineView for NullView {}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Calls captured by [`RecordingView`]
    #[derive(Debug, Default)]
    pub(crate) struct ViewLog {
        pub placeholder_visible: Option<bool>,
        pub track_layouts: Vec<(TrackId, TrackLayout)>,
        pub media_layouts: Vec<(MediaId, bool, Rect)>,
        pub extent: Option<(Rect, Vec2)>,
        pub removed: Vec<TrackId>,
        pub scrolled_to: Vec<TrackId>,
        pub rebuilt_orders: Vec<Vec<TrackId>>,
    }

    /// View that records what the timeline pushes into it
    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordingView {
        pub log: Rc<RefCell<ViewLog>>,
    }

    impl TimelineView for RecordingView {
        fn set_placeholder_visible(&mut self, visible: bool) {
            self.log.borrow_mut().placeholder_visible = Some(visible);
        }

        fn set_track_layout(&mut self, track: TrackId, layout: &TrackLayout) {
            self.log.borrow_mut().track_layouts.push((track, *layout));
        }

        fn set_media_layout(&mut self, media: MediaId, visible: bool, bounds: Rect) {
            self.log.borrow_mut().media_layouts.push((media, visible, bounds));
        }

        fn set_content_extent(&mut self, background: Rect, scroll_size: Vec2) {
            self.log.borrow_mut().extent = Some((background, scroll_size));
        }

        fn track_removed(&mut self, track: TrackId) {
            self.log.borrow_mut().removed.push(track);
        }

        fn scroll_to_track(&mut self, track: TrackId) {
            self.log.borrow_mut().scrolled_to.push(track);
        }

        fn rebuild_track_order(&mut self, order: &[TrackId]) {
            self.log.borrow_mut().rebuilt_orders.push(order.to_vec());
        }
    }
}
