//! Outside-interaction tracking with explicit subscribe/unsubscribe.
//!
//! Each open-able widget registers the region it occupies. A pointer press is
//! dispatched with the region it landed in; every listener whose region differs
//! is reported back so the owner can dismiss it. Hovering and typing never
//! dismiss anything.

use std::collections::BTreeMap;

/// A UI region (one selector's trigger + dropdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

/// Handle returned by [`InteractionHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A user interaction, tagged with the region it happened in (`None` = no region).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    PointerDown { target: Option<RegionId> },
    Hover { target: Option<RegionId> },
    Typing { target: Option<RegionId> },
}

#[derive(Debug, Default)]
pub struct InteractionHub {
    next_id: u64,
    listeners: BTreeMap<ListenerId, RegionId>,
}

impl InteractionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, region: RegionId) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, region);
        id
    }

    /// Returns `false` if the listener was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Listeners the interaction fell outside of, in subscription order.
    pub fn dispatch(&self, interaction: Interaction) -> Vec<ListenerId> {
        let Interaction::PointerDown { target } = interaction else {
            return Vec::new();
        };
        self.listeners
            .iter()
            .filter(|(_, region)| Some(**region) != target)
            .map(|(id, _)| *id)
            .collect()
    }
}
