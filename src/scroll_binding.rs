//! Glue between a scroll range and a progress consumer.
//!
//! Scroll events only set the target; when scrub smoothing is on, the
//! binding registers a transient ticker consumer that low-passes toward the
//! target and unregisters itself from inside its own frame callback once it
//! converges. With scrub off, progress is applied synchronously on the
//! event.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{ScrollRange, Scrub, TickerHandle};
use crate::frame::Scheduler;

/// Receives (scrubbed progress, raw document scroll offset).
pub type ApplyFn = Box<dyn FnMut(f32, f32)>;

struct BindingInner {
    range: ScrollRange,
    scrub: Scrub,
    target: f32,
    scroll_y: f32,
    apply: ApplyFn,
    handle: Option<TickerHandle>,
}

#[derive(Clone)]
pub struct ScrollBinding {
    scheduler: Scheduler,
    inner: Rc<RefCell<BindingInner>>,
}

impl ScrollBinding {
    pub fn new(scheduler: Scheduler, range: ScrollRange, scrub_tau: f32, apply: ApplyFn) -> Self {
        Self {
            scheduler,
            inner: Rc::new(RefCell::new(BindingInner {
                range,
                scrub: Scrub::new(scrub_tau),
                target: 0.0,
                scroll_y: 0.0,
                apply,
                handle: None,
            })),
        }
    }

    pub fn on_scroll(&self, scroll_y: f32) {
        let mut need_tick = false;
        {
            let mut b = self.inner.borrow_mut();
            b.scroll_y = scroll_y;
            b.target = b.range.progress(scroll_y);
            if b.scrub.tau <= 0.0 {
                let target = b.target;
                b.scrub.snap(target);
                (b.apply)(target, scroll_y);
            } else if b.handle.is_none() {
                need_tick = true;
            }
        }
        if need_tick {
            self.start_scrubbing();
        }
    }

    /// Swap in a freshly measured range (resize rebuild) and re-apply at the
    /// current offset without a catch-up animation.
    pub fn refresh(&self, range: ScrollRange, scroll_y: f32) {
        let mut b = self.inner.borrow_mut();
        b.range = range;
        b.scroll_y = scroll_y;
        b.target = b.range.progress(scroll_y);
        let target = b.target;
        b.scrub.snap(target);
        (b.apply)(target, scroll_y);
    }

    fn start_scrubbing(&self) {
        let inner = self.inner.clone();
        let scheduler = self.scheduler.clone();
        let handle = self.scheduler.register(Box::new(move |dt| {
            let mut b = inner.borrow_mut();
            let target = b.target;
            let value = b.scrub.step(target, dt);
            let scroll_y = b.scroll_y;
            (b.apply)(value, scroll_y);
            if b.scrub.settled(target) {
                if let Some(h) = b.handle.take() {
                    drop(b);
                    scheduler.unregister(h);
                }
            }
        }));
        self.inner.borrow_mut().handle = Some(handle);
    }
}
