// SPDX-License-Identifier: MIT OR Apache-2.0
//! Track timeline core for Tempo Editor.
//!
//! This crate provides the bookkeeping behind the timeline widget:
//! - Ordered tracks nested through parent links
//! - Time-ranged media items on tracks
//! - Track and media selection
//! - Frame, second and pixel conversion
//! - Layout of rows and media for a host view
//! - Playback state notifications
//!
//! ## Architecture
//!
//! [`Timeline`] owns every track and is the only way to mutate them. Layout
//! results are pushed into a [`TimelineView`] supplied by the host, and changes
//! are announced through [`TimelineEvent`] listeners. Rendering is left to the
//! host.

pub mod archetype;
pub mod error;
pub mod events;
pub mod layout;
pub mod media;
pub mod playback;
pub mod selection;
pub mod settings;
pub mod timeline;
pub mod track;
pub mod units;
pub mod view;

pub use archetype::{ArchetypeRegistry, TrackArchetype, TrackCreateOptions};
pub use error::{Result, TimelineError};
pub use events::{EventBus, ListenerId, TimelineEvent};
pub use layout::ContentExtent;
pub use media::{Media, MediaId};
pub use playback::{PlayButtonIcon, PlaybackButtons, PlaybackState};
pub use selection::{Selection, SelectionTarget};
pub use settings::TimelineSettings;
pub use timeline::{Timeline, TimelineId, MAX_FRAMES_PER_SECOND, MIN_FRAMES_PER_SECOND};
pub use track::{Track, TrackId, TrackLayout};
pub use units::{TimeDisplayMode, TimeScale};
pub use view::{NullView, TimelineView};
