use std::collections::VecDeque;

use crate::frame::Frame;

/// Lifecycle events kept per mount session.
///
/// Scroll and frame ticks are deliberately not recorded; the log stays small
/// enough to dump when a session fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    Mount,
    Load,
    Resize,
    Teardown,
    Failure,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Mount => "mount",
            EventKind::Load => "load",
            EventKind::Resize => "resize",
            EventKind::Teardown => "teardown",
            EventKind::Failure => "failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: EventKind,
    pub message: String,
}

/// Bounded event log; the oldest entries are dropped past `capacity`.
#[derive(Debug)]
pub struct EventBus {
    events: VecDeque<Event>,
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn emit(&mut self, frame: Frame, kind: EventKind, message: impl Into<String>) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(Event {
            frame_index: frame.index,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// One line per event, oldest first, for failure logs.
    pub fn dump(&self) -> String {
        self.events
            .iter()
            .map(|e| format!("#{} {}: {}", e.frame_index, e.kind.as_str(), e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn drain(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, EventKind};
    use crate::frame::Frame;

    #[test]
    fn records_events_with_frame_index() {
        let mut bus = EventBus::new();
        bus.emit(Frame::new(2), EventKind::Mount, "hello");
        let events: Vec<_> = bus.events().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].frame_index, 2);
        assert_eq!(events[0].kind.as_str(), "mount");
    }

    #[test]
    fn drops_oldest_past_capacity() {
        let mut bus = EventBus::with_capacity(2);
        bus.emit(Frame::new(0), EventKind::Resize, "a");
        bus.emit(Frame::new(1), EventKind::Resize, "b");
        bus.emit(Frame::new(2), EventKind::Teardown, "c");
        let messages: Vec<_> = bus.events().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["b", "c"]);
        assert_eq!(bus.count(EventKind::Resize), 1);
    }

    #[test]
    fn dump_lists_events_in_order() {
        let mut bus = EventBus::new();
        bus.emit(Frame::new(0), EventKind::Mount, "mounting");
        bus.emit(Frame::new(3), EventKind::Failure, "bump: 404");
        assert_eq!(bus.dump(), "#0 mount: mounting\n#3 failure: bump: 404");
        assert_eq!(EventBus::new().dump(), "");
    }

    #[test]
    fn drain_clears_events() {
        let mut bus = EventBus::new();
        bus.emit(Frame::default(), EventKind::Load, "m");
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(bus.events().count(), 0);
    }
}
