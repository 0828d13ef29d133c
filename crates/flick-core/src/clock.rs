//! Cancellable deadline timers.
//!
//! The engine never blocks: completion work is parked here and drained by
//! the embedder's animation tick. Entries are id-keyed so a superseding
//! transition can cancel the previous completion before it fires.

use std::cell::{Cell, RefCell};

pub type TimerId = u64;

struct TimerEntry {
    id: TimerId,
    deadline_ms: f64,
    callback: Box<dyn FnOnce()>,
}

/// Deadline-ordered callback queue with interior mutability.
///
/// Callbacks are returned to the caller by `take_due` rather than invoked
/// under the internal borrow, so a fired callback is free to schedule or
/// cancel further timers on the same queue.
pub struct TimerQueue {
    next_id: Cell<TimerId>,
    entries: RefCell<Vec<TimerEntry>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Parks `callback` to fire once the tick clock reaches `deadline_ms`.
    pub fn schedule(&self, deadline_ms: f64, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push(TimerEntry {
            id,
            deadline_ms,
            callback,
        });
        id
    }

    /// Removes a parked entry. Unknown ids (already fired or cancelled) are
    /// ignored.
    pub fn cancel(&self, id: TimerId) {
        let mut entries = self.entries.borrow_mut();
        if let Some(index) = entries.iter().position(|entry| entry.id == id) {
            entries.remove(index);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.entries.borrow().is_empty()
    }

    /// Extracts every callback whose deadline has passed, in deadline order.
    /// The internal borrow is released before returning, so callers invoke
    /// the callbacks borrow-free.
    pub fn take_due(&self, now_ms: f64) -> Vec<Box<dyn FnOnce()>> {
        let mut due = Vec::new();
        {
            let mut entries = self.entries.borrow_mut();
            let mut index = 0;
            while index < entries.len() {
                if entries[index].deadline_ms <= now_ms {
                    due.push(entries.remove(index));
                } else {
                    index += 1;
                }
            }
        }
        due.sort_by(|a, b| a.deadline_ms.total_cmp(&b.deadline_ms));
        due.into_iter().map(|entry| entry.callback).collect()
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
