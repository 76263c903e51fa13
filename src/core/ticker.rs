//! Shared per-frame callback registry.
//!
//! Consumers register a callback and get back a handle; the registry runs
//! live callbacks once per frame in registration order. The web driver owns
//! the actual requestAnimationFrame loop and keeps it alive only while at
//! least one consumer is registered, so no frame work happens while idle.

use std::cell::RefCell;
use std::rc::Rc;

pub type TickFn = Box<dyn FnMut(f32)>;

/// Opaque registration handle. Unregistering an unknown or already-removed
/// handle is a no-op.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickerHandle(u64);

struct Slot {
    id: u64,
    cb: Option<TickFn>,
}

#[derive(Default)]
pub struct Ticker {
    slots: Vec<Slot>,
    // Registrations made while a frame is running start on the next frame.
    pending: Vec<Slot>,
    // Removals requested while a frame is running; applied at end_tick.
    dead: Vec<u64>,
    next_id: u64,
    ticking: bool,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, cb: TickFn) -> TickerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let slot = Slot { id, cb: Some(cb) };
        if self.ticking {
            self.pending.push(slot);
        } else {
            self.slots.push(slot);
        }
        TickerHandle(id)
    }

    pub fn unregister(&mut self, handle: TickerHandle) {
        if self.ticking {
            if self.slots.iter().any(|s| s.id == handle.0) && !self.dead.contains(&handle.0) {
                self.dead.push(handle.0);
            }
            self.pending.retain(|s| s.id != handle.0);
        } else {
            self.slots.retain(|s| s.id != handle.0);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len() + self.pending.len()
    }

    // The frame protocol below lets the driver release its borrow of the
    // registry while each callback runs, so callbacks may register and
    // unregister freely. Slots added mid-frame are not visible until the
    // next begin_tick.

    /// Start a frame; returns the number of slots eligible this frame.
    pub fn begin_tick(&mut self) -> usize {
        self.ticking = true;
        self.slots.len()
    }

    /// Take the callback at `index`, or None if the slot was removed.
    pub fn take_slot(&mut self, index: usize) -> Option<TickFn> {
        let slot = self.slots.get_mut(index)?;
        if self.dead.contains(&slot.id) {
            return None;
        }
        slot.cb.take()
    }

    /// Return a callback taken with `take_slot`. Dropped instead if the
    /// consumer unregistered itself during the call.
    pub fn restore_slot(&mut self, index: usize, cb: TickFn) {
        if let Some(slot) = self.slots.get_mut(index) {
            if !self.dead.contains(&slot.id) {
                slot.cb = Some(cb);
            }
        }
    }

    /// Finish a frame: apply deferred removals, then deferred additions.
    pub fn end_tick(&mut self) {
        self.ticking = false;
        if !self.dead.is_empty() {
            let dead = std::mem::take(&mut self.dead);
            self.slots.retain(|s| !dead.contains(&s.id));
        }
        self.slots.append(&mut self.pending);
    }

    /// Run one frame over a shared registry. Callbacks may re-borrow the
    /// registry (register/unregister) because the borrow is released around
    /// each call.
    pub fn tick_shared(ticker: &Rc<RefCell<Ticker>>, dt: f32) {
        let count = ticker.borrow_mut().begin_tick();
        for i in 0..count {
            let taken = ticker.borrow_mut().take_slot(i);
            if let Some(mut cb) = taken {
                cb(dt);
                ticker.borrow_mut().restore_slot(i, cb);
            }
        }
        ticker.borrow_mut().end_tick();
    }
}
