//! requestAnimationFrame driver for the shared ticker.
//!
//! Exactly one rAF loop exists, and only while at least one consumer is
//! registered: the loop starts on the 0 -> 1 registration transition and
//! stops itself on the frame after the last consumer leaves. Ticks are
//! skipped while the tab is hidden; the clock re-bases when it becomes
//! visible again so the first frame back doesn't integrate the whole
//! absence.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::constants::MAX_FRAME_DT;
use crate::core::{TickFn, Ticker, TickerHandle};

struct SchedulerInner {
    last_instant: Instant,
    raf_active: bool,
    hidden: bool,
}

#[derive(Clone)]
pub struct Scheduler {
    ticker: Rc<RefCell<Ticker>>,
    inner: Rc<RefCell<SchedulerInner>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        let scheduler = Self {
            ticker: Rc::new(RefCell::new(Ticker::new())),
            inner: Rc::new(RefCell::new(SchedulerInner {
                last_instant: Instant::now(),
                raf_active: false,
                hidden: false,
            })),
            tick: Rc::new(RefCell::new(None)),
        };
        scheduler.install_tick();
        scheduler.wire_visibility();
        scheduler
    }

    /// Register a per-frame callback; starts the shared loop if it was idle.
    pub fn register(&self, cb: TickFn) -> TickerHandle {
        let was_empty = self.ticker.borrow().is_empty();
        let handle = self.ticker.borrow_mut().register(cb);
        let start = {
            let mut inner = self.inner.borrow_mut();
            if was_empty && !inner.raf_active {
                inner.raf_active = true;
                inner.last_instant = Instant::now();
                true
            } else {
                false
            }
        };
        if start {
            self.request_frame();
        }
        handle
    }

    /// Unknown handles are ignored. The loop notices an empty registry at
    /// the end of the current frame and stops scheduling.
    pub fn unregister(&self, handle: TickerHandle) {
        self.ticker.borrow_mut().unregister(handle);
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().raf_active
    }

    fn install_tick(&self) {
        let ticker = self.ticker.clone();
        let inner = self.inner.clone();
        let tick_for_closure = self.tick.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let (dt, hidden) = {
                let mut s = inner.borrow_mut();
                let now = Instant::now();
                let dt = (now - s.last_instant).as_secs_f32().min(MAX_FRAME_DT);
                s.last_instant = now;
                (dt, s.hidden)
            };
            if !hidden {
                Ticker::tick_shared(&ticker, dt);
            }
            let again = {
                let mut s = inner.borrow_mut();
                if ticker.borrow().is_empty() {
                    s.raf_active = false;
                    false
                } else {
                    true
                }
            };
            if again {
                if let Some(w) = web::window() {
                    _ = w.request_animation_frame(
                        tick_for_closure
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    );
                }
            }
        }) as Box<dyn FnMut()>));
    }

    fn request_frame(&self) {
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }

    fn wire_visibility(&self) {
        let Some(document) = crate::dom::window_document() else {
            return;
        };
        let inner = self.inner.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let hidden = doc.visibility_state() == web::VisibilityState::Hidden;
            let mut s = inner.borrow_mut();
            s.hidden = hidden;
            if !hidden {
                // Catch-up protection: don't integrate the hidden interval.
                s.last_instant = Instant::now();
            }
        }) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
