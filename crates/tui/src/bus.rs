//! Page-scoped publish/subscribe channel for the active selection.
//!
//! The navigator, the module sections, and the footer are mounted
//! independently: no component owns the others, and none is the exclusive
//! owner of the "currently active section" value. This module provides the
//! synchronization channel between them: a broker constructed once per
//! session and passed by reference to each component at construction.
//! Ownership of the selection is distributed by convention: last publish
//! wins, and every mounted listener converges on the published value.
//!
//! The bus is single-threaded and in-memory. It records no history: a
//! listener that subscribes after a publish only sees its own initialized
//! default until the next publish.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;
use trailhead_types::SectionId;

type Listener = Rc<dyn Fn(SectionId)>;

#[derive(Default)]
struct BusInner {
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// The selection broker. Cheap to clone; clones share the listener list.
#[derive(Clone, Default)]
pub struct SelectionBus {
    inner: Rc<RefCell<BusInner>>,
}

impl SelectionBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every currently subscribed listener of `selection`,
    /// synchronously, on this turn.
    ///
    /// Dispatch iterates a snapshot of the listener list, so a listener
    /// that subscribes, unsubscribes, or publishes during delivery cannot
    /// corrupt the iteration. A listener added mid-dispatch is not
    /// notified of the in-flight value.
    pub fn publish(&self, selection: SectionId) {
        trace!(selection = %selection, "selection published");
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(selection);
        }
    }

    /// Register `listener` to be invoked on every future publish.
    ///
    /// The returned [`Subscription`] deregisters the listener when
    /// explicitly unsubscribed or dropped.
    pub fn subscribe(&self, listener: impl Fn(SectionId) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
            active: true,
        }
    }

    /// Number of currently subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl std::fmt::Debug for SelectionBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Capability to deregister a listener from a [`SelectionBus`].
///
/// `unsubscribe` is idempotent: calling it more than once is a no-op after
/// the first call. Dropping the subscription unsubscribes as well, so a
/// component that holds its subscription stops receiving updates exactly
/// when it is dropped.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
    active: bool,
}

impl Subscription {
    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(inner) = self.bus.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
