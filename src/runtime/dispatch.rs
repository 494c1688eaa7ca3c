use std::collections::VecDeque;

use crate::runtime::event::Event;

/// FIFO of pending events.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    queue: VecDeque<Event>,
}

impl Dispatcher {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue at the back.
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Take the oldest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    /// Pending event count.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<Event> for Dispatcher {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/dispatch.rs"]
mod tests;
