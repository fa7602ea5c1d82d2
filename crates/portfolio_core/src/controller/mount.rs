//! Scoped scroll/pointer listener registration.
//!
//! # Responsibility
//! - Attach the two global listeners the page needs when the view mounts.
//! - Detach them when the view unmounts, including on early drop.
//!
//! # Invariants
//! - Each `Subscription` removes its listener at most once.
//! - A live `MountGuard` holds exactly one scroll and one pointer listener.
//! - Hosts keep the guard next to their page session; dropping it detaches both.

use log::debug;

/// Global event streams the page listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    Scroll,
    PointerMove,
}

impl ListenerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::PointerMove => "mousemove",
        }
    }
}

/// Host-assigned handle for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Host listener registry (window events in a browser).
///
/// Methods take `&self`; hosts keep their registry behind interior
/// mutability so guards can share it.
pub trait EventBus {
    fn add_listener(&self, kind: ListenerKind) -> ListenerId;
    fn remove_listener(&self, kind: ListenerKind, id: ListenerId);
}

/// One attached listener, detached on drop.
#[must_use = "dropping a subscription detaches its listener"]
pub struct Subscription<'b, B: EventBus + ?Sized> {
    bus: &'b B,
    kind: ListenerKind,
    id: Option<ListenerId>,
}

impl<'b, B: EventBus + ?Sized> Subscription<'b, B> {
    pub fn attach(bus: &'b B, kind: ListenerKind) -> Self {
        let id = bus.add_listener(kind);
        debug!(
            "event=listener_attached module=mount kind={} id={}",
            kind.as_str(),
            id.0
        );
        Self {
            bus,
            kind,
            id: Some(id),
        }
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Detaches now instead of at drop.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.bus.remove_listener(self.kind, id);
            debug!(
                "event=listener_detached module=mount kind={} id={}",
                self.kind.as_str(),
                id.0
            );
        }
    }
}

impl<B: EventBus + ?Sized> Drop for Subscription<'_, B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Listeners held for one mounted page view.
#[must_use = "dropping the guard unmounts the page listeners"]
pub struct MountGuard<'b, B: EventBus + ?Sized> {
    scroll: Subscription<'b, B>,
    pointer: Subscription<'b, B>,
}

impl<B: EventBus + ?Sized> MountGuard<'_, B> {
    pub fn is_mounted(&self) -> bool {
        self.scroll.is_attached() && self.pointer.is_attached()
    }

    /// Explicit unmount; equivalent to dropping the guard.
    pub fn unmount(mut self) {
        self.scroll.release();
        self.pointer.release();
    }
}

/// Attaches the page's scroll and pointer listeners.
pub fn mount<B: EventBus + ?Sized>(bus: &B) -> MountGuard<'_, B> {
    MountGuard {
        scroll: Subscription::attach(bus, ListenerKind::Scroll),
        pointer: Subscription::attach(bus, ListenerKind::PointerMove),
    }
}
