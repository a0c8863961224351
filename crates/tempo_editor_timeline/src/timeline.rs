// SPDX-License-Identifier: MIT OR Apache-2.0
//! The timeline aggregate: tracks, media, selection and timing.
//!
//! All state is owned by [`Timeline`] and mutated only through its methods.
//! Every mutation completes synchronously and notifies listeners before
//! returning.

use crate::archetype::{TrackArchetype, TrackCreateOptions};
use crate::error::{Result, TimelineError};
use crate::events::{EventBus, ListenerId, TimelineEvent};
use crate::layout::{self, ContentExtent};
use crate::media::{Media, MediaId};
use crate::playback::{PlaybackButtons, PlaybackState};
use crate::selection::{Selection, SelectionTarget};
use crate::settings::TimelineSettings;
use crate::track::{Track, TrackId};
use crate::units::{TimeDisplayMode, TimeScale};
use crate::view::{NullView, TimelineView};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Lowest accepted frame rate
pub const MIN_FRAMES_PER_SECOND: f32 = 0.1;
/// Highest accepted frame rate
pub const MAX_FRAMES_PER_SECOND: f32 = 1000.0;

/// Unique identifier for a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineId(pub Uuid);

impl TimelineId {
    /// Create a new random timeline ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimelineId {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered collection of tracks with selection, timing and layout
pub struct Timeline {
    id: TimelineId,
    settings: TimelineSettings,
    /// All tracks in display order; hierarchy comes from parent links
    tracks: Vec<Track>,
    /// Parent to children, rebuilt lazily after structural changes
    children_index: OnceCell<HashMap<TrackId, Vec<TrackId>>>,
    selection: Selection,
    frames_per_second: f32,
    duration_frames: i32,
    zoom: f32,
    current_frame: i32,
    time_display: TimeDisplayMode,
    playback_state: PlaybackState,
    buttons: PlaybackButtons,
    modified: bool,
    placeholder_visible: bool,
    extent: ContentExtent,
    events: EventBus,
    view: Box<dyn TimelineView>,
}

impl Timeline {
    /// Create an empty timeline with no view attached
    pub fn new(settings: TimelineSettings) -> Self {
        Self::with_view(settings, Box::new(NullView))
    }

    /// Create an empty timeline that pushes layout into `view`
    pub fn with_view(settings: TimelineSettings, view: Box<dyn TimelineView>) -> Self {
        let frames_per_second = settings
            .default_frames_per_second
            .clamp(MIN_FRAMES_PER_SECOND, MAX_FRAMES_PER_SECOND);
        let duration_frames = settings.default_duration_frames.max(1);
        let zoom = settings.clamp_zoom(1.0);
        let mut timeline = Self {
            id: TimelineId::new(),
            settings,
            tracks: Vec::new(),
            children_index: OnceCell::new(),
            selection: Selection::new(),
            frames_per_second,
            duration_frames,
            zoom,
            current_frame: 0,
            time_display: TimeDisplayMode::default(),
            playback_state: PlaybackState::Stopped,
            buttons: PlaybackButtons::default(),
            modified: false,
            placeholder_visible: true,
            extent: ContentExtent::default(),
            events: EventBus::new(),
            view,
        };
        timeline.arrange_tracks();
        timeline
    }

    /// Timeline ID
    pub fn id(&self) -> TimelineId {
        self.id
    }

    /// Settings used for layout
    pub fn settings(&self) -> &TimelineSettings {
        &self.settings
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&TimelineEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    // ---------------------------------------------------------------------
    // Timing
    // ---------------------------------------------------------------------

    /// Frame rate
    pub fn frames_per_second(&self) -> f32 {
        self.frames_per_second
    }

    /// Set the frame rate, clamped to the supported range
    pub fn set_frames_per_second(&mut self, value: f32) {
        if value.is_nan() {
            tracing::warn!("Ignoring NaN frame rate");
            return;
        }
        let value = value.clamp(MIN_FRAMES_PER_SECOND, MAX_FRAMES_PER_SECOND);
        if value == self.frames_per_second {
            return;
        }
        self.frames_per_second = value;
        self.arrange_tracks();
        self.events.emit(TimelineEvent::FramesPerSecondChanged);
        self.mark_as_edited();
    }

    /// Duration in frames
    pub fn duration_frames(&self) -> i32 {
        self.duration_frames
    }

    /// Set the duration in frames; at least one frame is kept
    pub fn set_duration_frames(&mut self, value: i32) {
        let value = value.max(1);
        if value == self.duration_frames {
            return;
        }
        self.duration_frames = value;
        if self.current_frame > value {
            self.set_current_frame(value);
        }
        self.arrange_tracks();
        self.events.emit(TimelineEvent::DurationChanged);
        self.mark_as_edited();
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration_frames as f32 / self.frames_per_second
    }

    /// Horizontal zoom
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the horizontal zoom, clamped to the configured range
    pub fn set_zoom(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        let value = self.settings.clamp_zoom(value);
        if value == self.zoom {
            return;
        }
        self.zoom = value;
        self.arrange_tracks();
        self.events.emit(TimelineEvent::ZoomChanged);
    }

    /// Current frame/pixel conversion
    pub fn time_scale(&self) -> TimeScale {
        TimeScale {
            frames_per_second: self.frames_per_second,
            units_per_second: self.settings.units_per_second,
            zoom: self.zoom,
            start_offset: self.settings.start_offset,
        }
    }

    /// Playback position in frames
    pub fn current_frame(&self) -> i32 {
        self.current_frame
    }

    /// Move the playback position, clamped to the duration
    pub fn set_current_frame(&mut self, frame: i32) {
        let frame = frame.clamp(0, self.duration_frames);
        if frame == self.current_frame {
            return;
        }
        self.current_frame = frame;
        self.events.emit(TimelineEvent::PositionChanged);
    }

    /// How the position readout is formatted
    pub fn time_display_mode(&self) -> TimeDisplayMode {
        self.time_display
    }

    /// Change how the position readout is formatted
    pub fn set_time_display_mode(&mut self, mode: TimeDisplayMode) {
        self.time_display = mode;
    }

    /// Formatted playback position
    pub fn position_text(&self) -> String {
        self.time_display.format(self.current_frame, self.frames_per_second)
    }

    // ---------------------------------------------------------------------
    // Modified flag
    // ---------------------------------------------------------------------

    /// Whether the timeline has unsaved edits
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Flag the timeline as edited
    pub fn mark_as_edited(&mut self) {
        self.modified = true;
        self.events.emit(TimelineEvent::Modified);
    }

    /// Reset the modified flag after the host saved the timeline
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    // ---------------------------------------------------------------------
    // Track queries
    // ---------------------------------------------------------------------

    /// All tracks in display order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get track count
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Get a track
    pub fn track(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    fn track_mut(&mut self, track_id: TrackId) -> Result<&mut Track> {
        self.tracks
            .iter_mut()
            .find(|t| t.id == track_id)
            .ok_or(TimelineError::TrackNotFound(track_id))
    }

    /// Find a track by its trimmed name
    pub fn track_by_name(&self, name: &str) -> Option<&Track> {
        let name = name.trim();
        self.tracks.iter().find(|t| t.name.trim() == name)
    }

    /// Position of a track in display order
    pub fn track_index(&self, track_id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    /// Tracks without a parent
    pub fn root_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.parent.is_none())
    }

    fn children_index(&self) -> &HashMap<TrackId, Vec<TrackId>> {
        self.children_index.get_or_init(|| {
            let mut index: HashMap<TrackId, Vec<TrackId>> = HashMap::new();
            for track in &self.tracks {
                if let Some(parent) = track.parent {
                    index.entry(parent).or_default().push(track.id);
                }
            }
            index
        })
    }

    fn invalidate_children_index(&mut self) {
        self.children_index.take();
    }

    /// Direct children of a track in display order
    pub fn sub_tracks(&self, track_id: TrackId) -> &[TrackId] {
        self.children_index()
            .get(&track_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All tracks nested under a track, depth first
    pub fn descendants(&self, track_id: TrackId) -> Vec<TrackId> {
        let mut result = Vec::new();
        let mut seen = HashSet::from([track_id]);
        let mut stack: Vec<TrackId> = self.sub_tracks(track_id).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            result.push(id);
            stack.extend(self.sub_tracks(id).iter().rev().copied());
        }
        result
    }

    /// Visibility computed by the last layout pass
    pub fn is_track_visible(&self, track_id: TrackId) -> bool {
        self.track(track_id).is_some_and(|t| t.layout.visible)
    }

    /// Check if a name could be given to a new track
    pub fn is_track_name_valid(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && !self.tracks.iter().any(|t| t.name.trim() == name)
    }

    /// First free name of the form `"{name}"`, `"{name} 1"`, `"{name} 2"`, ...
    pub fn unique_track_name(&self, name: &str) -> String {
        let base = match name.trim() {
            "" => "Track",
            trimmed => trimmed,
        };
        if self.is_track_name_valid(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base} {n}"))
            .find(|candidate| self.is_track_name_valid(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    // ---------------------------------------------------------------------
    // Track lifecycle
    // ---------------------------------------------------------------------

    /// Default options for tracks created through archetypes
    pub fn default_create_options(&self) -> TrackCreateOptions {
        TrackCreateOptions {
            height: self.settings.default_track_height,
            mute: false,
            looping: false,
        }
    }

    /// Create a track with an archetype and add it
    pub fn add_track_from(&mut self, archetype: &TrackArchetype) -> TrackId {
        let options = self.default_create_options();
        self.add_track_with_options(archetype, &options)
    }

    /// Create a track with an archetype using explicit options and add it
    pub fn add_track_with_options(
        &mut self,
        archetype: &TrackArchetype,
        options: &TrackCreateOptions,
    ) -> TrackId {
        let track = archetype.create(options);
        self.insert_track(track, Some(archetype))
    }

    /// Append a track at the end of the list
    ///
    /// A colliding name gets a numeric suffix.
    pub fn add_track(&mut self, track: Track) -> TrackId {
        self.insert_track(track, None)
    }

    fn insert_track(&mut self, mut track: Track, archetype: Option<&TrackArchetype>) -> TrackId {
        let name = self.unique_track_name(&track.name);
        if name != track.name {
            tracing::debug!("Renamed new track {:?} to {:?}", track.name, name);
        }
        track.name = name;
        if self.track(track.id).is_some() {
            tracing::warn!("Track {:?} is already in the timeline, assigning a new ID", track.id);
            track.id = TrackId::new();
        }
        let mut media_ids: HashSet<MediaId> = self
            .tracks
            .iter()
            .flat_map(|t| t.media.iter().map(|m| m.id))
            .collect();
        for media in &mut track.media {
            if !media_ids.insert(media.id) {
                tracing::warn!("Media {:?} is already on the timeline, assigning a new ID", media.id);
                media.id = MediaId::new();
                media_ids.insert(media.id);
            }
        }
        if let Some(parent) = track.parent {
            if self.ancestors_contain(parent, track.id) {
                tracing::warn!("Dropping parent link of {:?} that would form a cycle", track.name);
                track.parent = None;
            }
        }

        let id = track.id;
        track.timeline = Some(self.id);
        tracing::info!("Added track {:?}", track.name);
        self.tracks.push(track);
        self.on_tracks_changed();

        if let Some(archetype) = archetype {
            if let Some(track) = self.tracks.iter_mut().find(|t| t.id == id) {
                archetype.spawned(track);
            }
        }

        self.view.scroll_to_track(id);
        self.mark_as_edited();
        id
    }

    /// Take a track out of the timeline and hand it back
    ///
    /// The track keeps its parent link and the timeline is not marked as
    /// modified; use [`Timeline::delete_track`] to delete a track and its
    /// children as an edit.
    pub fn remove_track(&mut self, track_id: TrackId) -> Option<Track> {
        let index = self.track_index(track_id)?;
        let mut track = self.tracks.remove(index);
        track.timeline = None;
        self.view.track_removed(track_id);
        tracing::info!("Removed track {:?}", track.name);

        let media: HashSet<MediaId> = track.media.iter().map(|m| m.id).collect();
        let tracks_pruned = self.selection.retain_tracks(|id| id != track_id);
        let media_pruned = self.selection.retain_media(|id| !media.contains(&id));

        self.on_tracks_changed();
        if tracks_pruned || media_pruned {
            self.events.emit(TimelineEvent::SelectionChanged);
        }
        Some(track)
    }

    /// Delete a track together with all of its descendants
    pub fn delete_track(&mut self, track_id: TrackId) -> Result<Vec<Track>> {
        self.track_mut(track_id)?.parent = None;
        self.invalidate_children_index();

        let mut doomed = vec![track_id];
        doomed.extend(self.descendants(track_id));

        let removed = self.take_tracks(&doomed);
        tracing::info!("Deleted {} track(s)", removed.len());

        let removed_media: HashSet<MediaId> = removed
            .iter()
            .flat_map(|t| t.media.iter().map(|m| m.id))
            .collect();
        let tracks_pruned = self.selection.retain_tracks(|id| !doomed.contains(&id));
        let media_pruned = self.selection.retain_media(|id| !removed_media.contains(&id));

        self.on_tracks_changed();
        if tracks_pruned || media_pruned {
            self.events.emit(TimelineEvent::SelectionChanged);
        }
        self.mark_as_edited();
        Ok(removed)
    }

    /// Delete every selected track and its descendants
    ///
    /// Deleting selected media is not supported; the call fails without
    /// changing anything when any media is selected.
    pub fn delete_selection(&mut self) -> Result<Vec<Track>> {
        if !self.selection.media().is_empty() {
            return Err(TimelineError::MediaDeletionNotImplemented);
        }
        if self.selection.tracks().is_empty() {
            return Ok(Vec::new());
        }

        let selected = self.selection.tracks().to_vec();
        let mut doomed = Vec::new();
        for track_id in selected {
            if let Ok(track) = self.track_mut(track_id) {
                track.parent = None;
            }
            self.invalidate_children_index();
            if !doomed.contains(&track_id) {
                doomed.push(track_id);
            }
            for id in self.descendants(track_id) {
                if !doomed.contains(&id) {
                    doomed.push(id);
                }
            }
        }

        self.selection.clear();
        let removed = self.take_tracks(&doomed);
        tracing::info!("Deleted {} selected track(s)", removed.len());

        self.on_tracks_changed();
        self.events.emit(TimelineEvent::SelectionChanged);
        self.mark_as_edited();
        Ok(removed)
    }

    /// Remove the listed tracks, keeping the order of the rest
    fn take_tracks(&mut self, ids: &[TrackId]) -> Vec<Track> {
        let (mut removed, kept): (Vec<Track>, Vec<Track>) = std::mem::take(&mut self.tracks)
            .into_iter()
            .partition(|t| ids.contains(&t.id));
        self.tracks = kept;
        for track in &mut removed {
            track.timeline = None;
            self.view.track_removed(track.id);
        }
        removed
    }

    /// Move a track to a new position in the list
    ///
    /// An index outside `0..len` (after taking the track out) appends it.
    /// Layout is not refreshed; call [`Timeline::on_tracks_order_changed`]
    /// once reordering is done.
    pub fn change_track_index(&mut self, track_id: TrackId, new_index: isize) {
        let Some(index) = self.track_index(track_id) else {
            return;
        };
        let track = self.tracks.remove(index);
        match usize::try_from(new_index) {
            Ok(new_index) if new_index < self.tracks.len() => self.tracks.insert(new_index, track),
            _ => self.tracks.push(track),
        }
        self.invalidate_children_index();
    }

    /// Rebuild the view in list order and refresh layout
    pub fn on_tracks_order_changed(&mut self) {
        self.invalidate_children_index();
        let order: Vec<TrackId> = self.tracks.iter().map(|t| t.id).collect();
        self.view.rebuild_track_order(&order);
        self.arrange_tracks();
    }

    // ---------------------------------------------------------------------
    // Track editing
    // ---------------------------------------------------------------------

    /// Rename a track
    pub fn rename_track(&mut self, track_id: TrackId, name: &str) -> Result<()> {
        let name = name.trim();
        let current = self.track(track_id).ok_or(TimelineError::TrackNotFound(track_id))?;
        if current.name.trim() == name {
            return Ok(());
        }
        if !self.is_track_name_valid(name) {
            tracing::warn!("Rejected track name {:?}", name);
            return Err(TimelineError::InvalidTrackName(name.to_string()));
        }
        self.track_mut(track_id)?.name = name.to_string();
        self.events.emit(TimelineEvent::TracksChanged);
        self.mark_as_edited();
        Ok(())
    }

    /// Check whether `ancestor` is `track_id` or one of its ancestors
    fn ancestors_contain(&self, track_id: TrackId, ancestor: TrackId) -> bool {
        let mut seen = HashSet::new();
        let mut current = Some(track_id);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            if !seen.insert(id) {
                return false;
            }
            current = self.track(id).and_then(|t| t.parent);
        }
        false
    }

    /// Nest a track under another track, or make it a root
    pub fn set_track_parent(&mut self, track_id: TrackId, parent: Option<TrackId>) -> Result<()> {
        let current = self.track(track_id).ok_or(TimelineError::TrackNotFound(track_id))?.parent;
        if current == parent {
            return Ok(());
        }
        if let Some(parent_id) = parent {
            if self.track(parent_id).is_none() {
                return Err(TimelineError::TrackNotFound(parent_id));
            }
            if self.ancestors_contain(parent_id, track_id) {
                return Err(TimelineError::ParentCycle {
                    track: track_id,
                    parent: parent_id,
                });
            }
        }
        self.track_mut(track_id)?.parent = parent;
        self.on_tracks_changed();
        self.mark_as_edited();
        Ok(())
    }

    /// Show or hide the children of a track
    pub fn set_track_expanded(&mut self, track_id: TrackId, expanded: bool) -> Result<()> {
        let track = self.track_mut(track_id)?;
        if track.expanded != expanded {
            track.expanded = expanded;
            self.arrange_tracks();
        }
        Ok(())
    }

    /// Expand every track
    pub fn expand_all(&mut self) {
        self.set_all_expanded(true);
    }

    /// Collapse every track
    pub fn collapse_all(&mut self) {
        self.set_all_expanded(false);
    }

    fn set_all_expanded(&mut self, expanded: bool) {
        let mut changed = false;
        for track in &mut self.tracks {
            changed |= track.expanded != expanded;
            track.expanded = expanded;
        }
        if changed {
            self.arrange_tracks();
        }
    }

    /// Mute or unmute a track
    pub fn set_track_muted(&mut self, track_id: TrackId, muted: bool) -> Result<()> {
        let track = self.track_mut(track_id)?;
        if track.muted != muted {
            track.muted = muted;
            self.mark_as_edited();
        }
        Ok(())
    }

    /// Enable or disable looping on a track
    pub fn set_track_looping(&mut self, track_id: TrackId, looping: bool) -> Result<()> {
        let track = self.track_mut(track_id)?;
        if track.looping != looping {
            track.looping = looping;
            self.mark_as_edited();
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Media
    // ---------------------------------------------------------------------

    /// Append a media item to a track
    pub fn add_media(&mut self, track_id: TrackId, media: Media) -> Result<MediaId> {
        let id = media.id;
        if self.media(id).is_some() {
            tracing::warn!("Media {:?} is already on the timeline", id);
            return Ok(id);
        }
        self.track_mut(track_id)?.media.push(media);
        self.on_tracks_changed();
        self.mark_as_edited();
        Ok(id)
    }

    /// Remove a media item from its track
    pub fn remove_media(&mut self, media_id: MediaId) -> Option<Media> {
        let track = self.tracks.iter_mut().find(|t| t.contains_media(media_id))?;
        let index = track.media.iter().position(|m| m.id == media_id)?;
        let media = track.media.remove(index);

        let pruned = self.selection.remove(SelectionTarget::Media(media_id));
        self.on_tracks_changed();
        if pruned {
            self.events.emit(TimelineEvent::SelectionChanged);
        }
        self.mark_as_edited();
        Some(media)
    }

    /// Move or resize a media item
    pub fn set_media_range(
        &mut self,
        media_id: MediaId,
        start_frame: i32,
        duration_frames: i32,
    ) -> Result<()> {
        let scale = self.time_scale();
        let track = self
            .tracks
            .iter_mut()
            .find(|t| t.contains_media(media_id))
            .ok_or(TimelineError::MediaNotFound(media_id))?;
        let row = track.layout.bounds;
        let visible = track.layout.visible;
        let media = track
            .media_item_mut(media_id)
            .ok_or(TimelineError::MediaNotFound(media_id))?;
        media.set_range(start_frame, duration_frames);
        media.update_position(&scale);
        media.apply_row(visible, row);
        let bounds = media.bounds();

        self.view.set_media_layout(media_id, visible, bounds);
        self.mark_as_edited();
        Ok(())
    }

    /// Find a media item anywhere on the timeline
    pub fn media(&self, media_id: MediaId) -> Option<&Media> {
        self.tracks.iter().find_map(|t| t.media_item(media_id))
    }

    /// Track owning a media item
    pub fn media_track(&self, media_id: MediaId) -> Option<TrackId> {
        self.tracks
            .iter()
            .find(|t| t.contains_media(media_id))
            .map(|t| t.id)
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected tracks in selection order
    pub fn selected_tracks(&self) -> &[TrackId] {
        self.selection.tracks()
    }

    /// Selected media in selection order
    pub fn selected_media(&self) -> &[MediaId] {
        self.selection.media()
    }

    fn target_exists(&self, target: SelectionTarget) -> bool {
        match target {
            SelectionTarget::Track(id) => self.track(id).is_some(),
            SelectionTarget::Media(id) => self.media(id).is_some(),
        }
    }

    /// Select a track or media item
    ///
    /// Without `add_to_selection` the whole selection is replaced, unless the
    /// target is already the only selected item.
    pub fn select(&mut self, target: SelectionTarget, add_to_selection: bool) {
        if !self.target_exists(target) {
            return;
        }
        if add_to_selection {
            if !self.selection.add(target) {
                return;
            }
        } else {
            if self.selection.is_sole(target) {
                return;
            }
            self.selection.clear();
            self.selection.add(target);
        }
        tracing::debug!(?target, add_to_selection, "Selection changed");
        self.events.emit(TimelineEvent::SelectionChanged);
    }

    /// Remove one item from the selection
    pub fn deselect(&mut self, target: SelectionTarget) {
        if self.selection.remove(target) {
            self.events.emit(TimelineEvent::SelectionChanged);
        }
    }

    /// Clear the selection
    pub fn deselect_all(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.events.emit(TimelineEvent::SelectionChanged);
    }

    /// Select every track, replacing the selection
    pub fn select_all_tracks(&mut self) {
        let mut selection = Selection::new();
        for track in &self.tracks {
            selection.add(SelectionTarget::Track(track.id));
        }
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.events.emit(TimelineEvent::SelectionChanged);
    }

    // ---------------------------------------------------------------------
    // Playback
    // ---------------------------------------------------------------------

    /// Playback state
    pub fn playback_state(&self) -> PlaybackState {
        self.playback_state
    }

    /// Cached transport button state
    pub fn playback_buttons(&self) -> PlaybackButtons {
        self.buttons
    }

    /// Start playback
    pub fn play(&mut self) {
        self.events.emit(TimelineEvent::Play);
        self.set_playback_state(PlaybackState::Playing);
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.events.emit(TimelineEvent::Pause);
        self.set_playback_state(PlaybackState::Paused);
    }

    /// Stop playback and rewind
    pub fn stop(&mut self) {
        self.events.emit(TimelineEvent::Stop);
        self.set_playback_state(PlaybackState::Stopped);
        self.set_current_frame(0);
    }

    /// Play or pause depending on what the play button currently shows
    pub fn toggle_play(&mut self) {
        if self.buttons.is_pause() {
            self.pause();
        } else {
            self.play();
        }
    }

    fn set_playback_state(&mut self, state: PlaybackState) {
        tracing::info!("Timeline playback: {}", state.status_text());
        self.playback_state = state;
        self.buttons = PlaybackButtons::for_state(state);
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Recompute visibility and bounds of every track and media item
    pub fn arrange_tracks(&mut self) {
        let scale = self.time_scale();
        let duration = self.duration();
        self.placeholder_visible = self.tracks.is_empty();
        self.extent = layout::arrange_tracks(
            &mut self.tracks,
            &self.settings,
            &scale,
            duration,
            self.view.as_mut(),
        );
    }

    /// Background and scroll size from the last layout pass
    pub fn content_extent(&self) -> ContentExtent {
        self.extent
    }

    /// Whether the "no tracks" placeholder is shown
    pub fn is_placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// Structural change: refresh layout then notify
    fn on_tracks_changed(&mut self) {
        self.invalidate_children_index();
        self.arrange_tracks();
        self.events.emit(TimelineEvent::TracksChanged);
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(TimelineSettings::default())
    }
}
