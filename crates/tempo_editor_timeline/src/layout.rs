// SPDX-License-Identifier: MIT OR Apache-2.0
//! Track and media layout pass.
//!
//! Tracks are stored flat in display order. A child's indent and visibility
//! depend on its parent's, so each track resolves them by walking up its parent
//! chain, memoizing results. A parent that appears later in the list or is no
//! longer part of the timeline is handled the same way: a missing parent makes
//! the track behave as a root.

use crate::settings::TimelineSettings;
use crate::track::{Track, TrackId, TrackLayout};
use crate::units::TimeScale;
use crate::view::TimelineView;
use egui::{Pos2, Rect, Vec2};
use std::collections::{HashMap, HashSet};

/// Size of the background and of the scrollable content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentExtent {
    /// Background covering the timeline duration
    pub background: Rect,
    /// Size of the scrollable area
    pub scroll_size: Vec2,
}

impl Default for ContentExtent {
    fn default() -> Self {
        Self {
            background: Rect::NOTHING,
            scroll_size: Vec2::ZERO,
        }
    }
}

/// Indent and visibility of a track
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    x_offset: f32,
    visible: bool,
}

const ROOT: Placement = Placement {
    x_offset: 0.0,
    visible: true,
};

/// Resolve placements for every track through its parent chain
fn resolve_placements(tracks: &[Track], indent: f32) -> HashMap<TrackId, Placement> {
    let by_id: HashMap<TrackId, &Track> = tracks.iter().map(|t| (t.id, t)).collect();
    let mut resolved: HashMap<TrackId, Placement> = HashMap::with_capacity(tracks.len());

    for track in tracks {
        if resolved.contains_key(&track.id) {
            continue;
        }

        // Walk up until a resolved ancestor, a root, or a missing parent
        let mut chain = vec![track];
        let mut seen = HashSet::from([track.id]);
        let mut anchor: Option<(Placement, bool)> = None;
        while let Some(parent_id) = chain[chain.len() - 1].parent {
            let Some(parent) = by_id.get(&parent_id).copied() else {
                break;
            };
            if let Some(placement) = resolved.get(&parent_id) {
                anchor = Some((*placement, parent.expanded));
                break;
            }
            if !seen.insert(parent_id) {
                tracing::warn!("Track parent cycle at {:?}, treating as root", parent_id);
                break;
            }
            chain.push(parent);
        }

        let mut above = anchor;
        for link in chain.iter().rev() {
            let placement = match above {
                Some((parent, expanded)) => Placement {
                    x_offset: parent.x_offset + indent,
                    visible: parent.visible && expanded,
                },
                None => ROOT,
            };
            resolved.insert(link.id, placement);
            above = Some((placement, link.expanded));
        }
    }

    resolved
}

/// Run a full layout pass and push the results into the view
pub(crate) fn arrange_tracks(
    tracks: &mut [Track],
    settings: &TimelineSettings,
    scale: &TimeScale,
    duration_seconds: f32,
    view: &mut dyn TimelineView,
) -> ContentExtent {
    view.set_placeholder_visible(tracks.is_empty());

    let placements = resolve_placements(tracks, settings.track_indent);

    let mut y = 0.0;
    let mut visible_rows = 0usize;
    for track in tracks.iter_mut() {
        let placement = placements.get(&track.id).copied().unwrap_or(ROOT);
        let bounds = Rect::from_min_size(
            Pos2::new(placement.x_offset, y),
            Vec2::new((settings.track_list_width - placement.x_offset).max(0.0), track.height),
        );
        if placement.visible {
            y += track.height + settings.track_spacing;
            visible_rows += 1;
        }

        track.layout = TrackLayout {
            x_offset: placement.x_offset,
            visible: placement.visible,
            bounds,
        };
        view.set_track_layout(track.id, &track.layout);

        for media in &mut track.media {
            media.update_position(scale);
            media.apply_row(placement.visible, bounds);
            view.set_media_layout(media.id, media.is_visible(), media.bounds());
        }
    }

    let total_height = if visible_rows > 0 {
        y - settings.track_spacing
    } else {
        0.0
    };
    let background = Rect::from_min_size(
        Pos2::new(settings.start_offset, 0.0),
        Vec2::new(duration_seconds * scale.pixels_per_second(), total_height),
    );
    let extent = ContentExtent {
        background,
        scroll_size: Vec2::new(background.width() + settings.start_offset * 5.0, total_height),
    };
    view.set_content_extent(extent.background, extent.scroll_size);

    tracing::debug!(
        tracks = tracks.len(),
        visible = visible_rows,
        width = extent.scroll_size.x,
        height = extent.scroll_size.y,
        "Arranged timeline tracks"
    );
    extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Media;
    use crate::view::NullView;

    fn scale() -> TimeScale {
        TimeScale {
            frames_per_second: 30.0,
            units_per_second: 100.0,
            zoom: 1.0,
            start_offset: 50.0,
        }
    }

    #[test]
    fn test_child_listed_before_parent() {
        let parent = Track::new("Parent", 22.0);
        let child = Track::new("Child", 22.0).with_parent(parent.id);
        let grandchild = Track::new("Grandchild", 22.0).with_parent(child.id);
        let tracks = vec![grandchild, child, parent];

        let placements = resolve_placements(&tracks, 12.0);
        assert_eq!(placements[&tracks[2].id].x_offset, 0.0);
        assert_eq!(placements[&tracks[1].id].x_offset, 12.0);
        assert_eq!(placements[&tracks[0].id].x_offset, 24.0);
        assert!(placements.values().all(|p| p.visible));
    }

    #[test]
    fn test_collapsed_ancestor_hides_descendants() {
        let mut parent = Track::new("Parent", 22.0);
        parent.expanded = false;
        let child = Track::new("Child", 22.0).with_parent(parent.id);
        let grandchild = Track::new("Grandchild", 22.0).with_parent(child.id);
        let tracks = vec![parent, child, grandchild];

        let placements = resolve_placements(&tracks, 12.0);
        assert!(placements[&tracks[0].id].visible);
        assert!(!placements[&tracks[1].id].visible);
        // Expanded itself, but its parent is hidden
        assert!(!placements[&tracks[2].id].visible);
    }

    #[test]
    fn test_missing_parent_is_root() {
        let orphan = Track::new("Orphan", 22.0).with_parent(TrackId::new());
        let tracks = vec![orphan];
        let placements = resolve_placements(&tracks, 12.0);
        assert_eq!(placements[&tracks[0].id], ROOT);
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let mut a = Track::new("A", 22.0);
        let b = Track::new("B", 22.0).with_parent(a.id);
        a.parent = Some(b.id);
        let tracks = vec![a, b];
        let placements = resolve_placements(&tracks, 12.0);
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn test_rows_and_extent() {
        let settings = TimelineSettings::default();
        let mut parent = Track::new("Parent", 22.0);
        parent.expanded = false;
        let child = Track::new("Child", 22.0)
            .with_parent(parent.id)
            .with_media(Media::new(0, 30));
        let other = Track::new("Other", 30.0).with_media(Media::new(30, 60));
        let mut tracks = vec![parent, child, other];

        let extent = arrange_tracks(&mut tracks, &settings, &scale(), 5.0, &mut NullView);

        // Hidden child takes no vertical space
        assert_eq!(tracks[0].layout.bounds.min.y, 0.0);
        assert_eq!(tracks[2].layout.bounds.min.y, 22.0);
        assert_eq!(tracks[2].layout.bounds.height(), 30.0);
        assert!(!tracks[1].layout.visible);
        assert!(!tracks[1].media[0].is_visible());

        let media = &tracks[2].media[0];
        assert!(media.is_visible());
        assert_eq!(media.x(), 150.0);
        assert_eq!(media.bounds().min.y, 22.0);
        assert_eq!(media.bounds().max.y, 52.0);

        assert_eq!(extent.background.min.x, 50.0);
        assert_eq!(extent.background.width(), 500.0);
        assert_eq!(extent.scroll_size, Vec2::new(750.0, 52.0));
    }

    #[test]
    fn test_media_ignores_track_indent() {
        let settings = TimelineSettings::default();
        let parent = Track::new("Parent", 22.0);
        let child = Track::new("Child", 22.0)
            .with_parent(parent.id)
            .with_media(Media::new(0, 30));
        let mut tracks = vec![parent, child];

        arrange_tracks(&mut tracks, &settings, &scale(), 5.0, &mut NullView);

        assert_eq!(tracks[1].layout.x_offset, 12.0);
        assert_eq!(tracks[1].media[0].x(), 50.0);
    }
}
