//! Commit & notify: turns a stream of mapped values into change events.

use crate::surface::{Paint, Surface};
use smallvec::SmallVec;
use std::fmt;

/// Outward notification payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueChange {
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Observer = Box<dyn FnMut(ValueChange)>;

/// Tracks the last committed value and the observers waiting on changes.
pub struct Committer {
    last: u32,
    observers: SmallVec<[(SubscriptionId, Observer); 2]>,
    next_id: u64,
}

impl Committer {
    pub fn new(initial: u32) -> Self {
        Self {
            last: initial,
            observers: SmallVec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Commits `value` if it differs from the last one: readout, emphasis,
    /// then one notification per observer, all before returning. Repeats are
    /// dropped silently.
    pub fn commit(&mut self, value: u32, surface: &mut dyn Surface) -> Option<ValueChange> {
        if value == self.last {
            return None;
        }
        self.last = value;
        surface.paint(Paint::Readout { value });
        surface.paint(Paint::Emphasis);

        let change = ValueChange { value };
        for (_, observer) in self.observers.iter_mut() {
            observer(change);
        }
        Some(change)
    }
}

impl fmt::Debug for Committer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Committer")
            .field("last", &self.last)
            .field("observers", &self.observers.len())
            .finish()
    }
}
