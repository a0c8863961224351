// SPDX-License-Identifier: MIT OR Apache-2.0
//! Registered track archetypes.
//!
//! An archetype is a named factory for one kind of track. The host registers
//! archetypes once and the timeline invokes them when the user adds a track.

use crate::track::Track;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Options passed to an archetype factory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackCreateOptions {
    /// Row height for the new track
    pub height: f32,
    /// Create the track muted
    pub mute: bool,
    /// Create the track looping
    pub looping: bool,
}

type CreateFn = Arc<dyn Fn(&TrackCreateOptions) -> Track + Send + Sync>;
type SpawnFn = Arc<dyn Fn(&mut Track) + Send + Sync>;

/// A descriptor and factory for one kind of track
#[derive(Clone)]
pub struct TrackArchetype {
    /// Archetype name, also used as the registry key
    pub name: String,
    /// Default color for created tracks
    pub color: [u8; 3],
    create: CreateFn,
    on_spawned: Option<SpawnFn>,
}

impl TrackArchetype {
    /// Create an archetype from a factory
    pub fn new(
        name: impl Into<String>,
        create: impl Fn(&TrackCreateOptions) -> Track + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            color: [150, 150, 150],
            create: Arc::new(create),
            on_spawned: None,
        }
    }

    /// Archetype whose tracks are plain rows named after the archetype
    pub fn simple(name: impl Into<String>) -> Self {
        let name = name.into();
        let default_name = name.clone();
        Self::new(name, move |options| Track::new(default_name.clone(), options.height))
    }

    /// Set the default track color
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set the hook run after a created track joins a timeline
    pub fn with_on_spawned(mut self, hook: impl Fn(&mut Track) + Send + Sync + 'static) -> Self {
        self.on_spawned = Some(Arc::new(hook));
        self
    }

    /// Invoke the factory
    pub fn create(&self, options: &TrackCreateOptions) -> Track {
        let mut track = (self.create)(options);
        track.archetype = self.name.clone();
        track.color = self.color;
        track.muted = options.mute;
        track.looping = options.looping;
        track
    }

    /// Run spawn-time initialization on a track that was just added
    pub fn spawned(&self, track: &mut Track) {
        if let Some(hook) = &self.on_spawned {
            hook(track);
        }
    }
}

impl fmt::Debug for TrackArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackArchetype")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("on_spawned", &self.on_spawned.is_some())
            .finish_non_exhaustive()
    }
}

/// Registry of archetypes in registration order
#[derive(Debug, Clone, Default)]
pub struct ArchetypeRegistry {
    archetypes: IndexMap<String, TrackArchetype>,
}

impl ArchetypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an archetype, replacing any with the same name
    pub fn register(&mut self, archetype: TrackArchetype) {
        tracing::debug!("Registered track archetype {}", archetype.name);
        self.archetypes.insert(archetype.name.clone(), archetype);
    }

    /// Look up an archetype by name
    pub fn get(&self, name: &str) -> Option<&TrackArchetype> {
        self.archetypes.get(name)
    }

    /// All archetypes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TrackArchetype> {
        self.archetypes.values()
    }

    /// Number of registered archetypes
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> TrackCreateOptions {
        TrackCreateOptions {
            height: 30.0,
            mute: true,
            looping: false,
        }
    }

    #[test]
    fn test_archetype_create() {
        let archetype = TrackArchetype::simple("Audio").with_color([200, 100, 255]);
        let track = archetype.create(&options());
        assert_eq!(track.name(), "Audio");
        assert_eq!(track.archetype, "Audio");
        assert_eq!(track.color, [200, 100, 255]);
        assert_eq!(track.height, 30.0);
        assert!(track.is_muted());
        assert!(!track.is_looping());
    }

    #[test]
    fn test_spawn_hook() {
        let archetype = TrackArchetype::simple("Folder").with_on_spawned(|track| track.expanded = false);
        let mut track = archetype.create(&options());
        assert!(track.is_expanded());
        archetype.spawned(&mut track);
        assert!(!track.is_expanded());
    }

    #[test]
    fn test_registry_order() {
        let mut registry = ArchetypeRegistry::new();
        registry.register(TrackArchetype::simple("Folder"));
        registry.register(TrackArchetype::simple("Event"));
        registry.register(TrackArchetype::simple("Folder").with_color([1, 2, 3]));

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Folder", "Event"]);
        assert_eq!(registry.get("Folder").map(|a| a.color), Some([1, 2, 3]));
        assert!(registry.get("Camera").is_none());
    }
}
