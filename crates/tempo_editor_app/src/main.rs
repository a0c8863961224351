// SPDX-License-Identifier: MIT OR Apache-2.0
//! Headless driver for the Tempo Editor timeline.
//!
//! Builds a small timeline from registered track archetypes, runs a few edits
//! and logs the resulting layout. An optional first argument names a RON
//! settings file.

use std::path::Path;
use tempo_editor_timeline::{
    ArchetypeRegistry, Media, SelectionTarget, TimeDisplayMode, Timeline, TimelineEvent,
    TimelineSettings, TimelineView, TrackArchetype, TrackId, TrackLayout,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// View that logs the layout it receives
struct LogView;

impl TimelineView for LogView {
    fn set_placeholder_visible(&mut self, visible: bool) {
        tracing::debug!(visible, "Placeholder");
    }

    fn set_track_layout(&mut self, track: TrackId, layout: &TrackLayout) {
        tracing::debug!(
            ?track,
            x = layout.x_offset,
            y = layout.bounds.min.y,
            visible = layout.visible,
            "Track row"
        );
    }

    fn scroll_to_track(&mut self, track: TrackId) {
        tracing::debug!(?track, "Scroll to track");
    }
}

fn load_settings() -> TimelineSettings {
    let Some(path) = std::env::args().nth(1) else {
        return TimelineSettings::default();
    };
    match TimelineSettings::load(Path::new(&path)) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Using default settings: {}", err);
            TimelineSettings::default()
        }
    }
}

fn register_archetypes() -> ArchetypeRegistry {
    let mut registry = ArchetypeRegistry::new();
    registry.register(TrackArchetype::simple("Folder").with_color([120, 120, 140]));
    registry.register(TrackArchetype::simple("Animation").with_color([100, 150, 255]));
    registry.register(TrackArchetype::simple("Audio").with_color([200, 100, 255]));
    registry
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tempo_editor_timeline=debug,tempo_editor_app=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = load_settings();
    let registry = register_archetypes();
    let mut timeline = Timeline::with_view(settings, Box::new(LogView));
    timeline.subscribe(|event| {
        if *event != TimelineEvent::Modified {
            tracing::info!(?event, "Timeline event");
        }
    });

    let mut folder = None;
    for archetype in registry.iter() {
        let id = timeline.add_track_from(archetype);
        match folder {
            None => folder = Some(id),
            Some(parent) => {
                if let Err(err) = timeline.set_track_parent(id, Some(parent)) {
                    tracing::error!("Failed to nest track: {}", err);
                }
            }
        }
    }
    if let Some(animation) = registry.get("Animation") {
        timeline.add_track_from(animation);
    }

    let clip_track = timeline.tracks().last().map(|t| t.id);
    if let Some(track) = clip_track {
        match timeline.add_media(track, Media::new(15, 45)) {
            Ok(media) => timeline.select(SelectionTarget::Media(media), false),
            Err(err) => tracing::error!("Failed to add media: {}", err),
        }
    }

    if let Some(folder) = folder {
        if let Err(err) = timeline.set_track_expanded(folder, false) {
            tracing::error!("Failed to collapse folder: {}", err);
        }
    }

    timeline.set_time_display_mode(TimeDisplayMode::Time);
    timeline.play();
    timeline.set_current_frame(42);
    timeline.pause();

    for track in timeline.tracks() {
        tracing::info!(
            "{:<12} indent {:>5.1} visible {:<5} media {}",
            track.name(),
            track.layout().x_offset,
            track.layout().visible,
            track.media().len()
        );
    }
    let extent = timeline.content_extent();
    tracing::info!(
        "Duration {:.2}s at {} fps, position {}, content {}x{}",
        timeline.duration(),
        timeline.frames_per_second(),
        timeline.position_text(),
        extent.scroll_size.x,
        extent.scroll_size.y
    );
}
