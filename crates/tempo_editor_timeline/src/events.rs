// SPDX-License-Identifier: MIT OR Apache-2.0
//! Change notifications raised by the timeline.

use std::fmt;

/// Notification fired by a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Tracks were added, removed, reparented or edited
    TracksChanged,
    /// Track or media selection changed
    SelectionChanged,
    /// Duration in frames changed
    DurationChanged,
    /// Frame rate changed
    FramesPerSecondChanged,
    /// Horizontal zoom changed
    ZoomChanged,
    /// Playback position changed
    PositionChanged,
    /// Timeline was marked as edited
    Modified,
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Playback stopped
    Stop,
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&TimelineEvent)>;

/// Listener list invoked in registration order
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl EventBus {
    /// Create a bus with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: impl FnMut(&TimelineEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener
    pub fn emit(&mut self, event: TimelineEvent) {
        tracing::trace!(?event, "timeline event");
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = Rc::clone(&log);
        bus.subscribe(move |event| first.borrow_mut().push((1, *event)));
        let second = Rc::clone(&log);
        bus.subscribe(move |event| second.borrow_mut().push((2, *event)));

        bus.emit(TimelineEvent::Play);
        assert_eq!(
            *log.borrow(),
            [(1, TimelineEvent::Play), (2, TimelineEvent::Play)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();

        let counter = Rc::clone(&count);
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);
        bus.emit(TimelineEvent::Modified);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(TimelineEvent::Modified);

        assert_eq!(*count.borrow(), 1);
        assert!(bus.is_empty());
    }
}
