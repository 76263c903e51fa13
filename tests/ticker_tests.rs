// Host-side tests for the frame-callback registry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/ticker.rs"]
mod ticker;

use std::cell::RefCell;
use std::rc::Rc;
use ticker::*;

#[test]
fn runs_callbacks_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let ticker = Rc::new(RefCell::new(Ticker::new()));
    for tag in [1, 2, 3] {
        let order = order.clone();
        ticker
            .borrow_mut()
            .register(Box::new(move |_| order.borrow_mut().push(tag)));
    }
    Ticker::tick_shared(&ticker, 0.016);
    assert_eq!(*order.borrow(), vec![1, 2, 3]);
    Ticker::tick_shared(&ticker, 0.016);
    assert_eq!(*order.borrow(), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn empty_after_register_then_unregister() {
    let mut ticker = Ticker::new();
    let h = ticker.register(Box::new(|_| {}));
    assert!(!ticker.is_empty());
    ticker.unregister(h);
    assert!(ticker.is_empty());
}

#[test]
fn unregistering_unknown_handle_is_a_noop() {
    let mut ticker = Ticker::new();
    let h = ticker.register(Box::new(|_| {}));
    ticker.unregister(h);
    // Second removal of the same handle must not panic or remove others.
    ticker.unregister(h);
    assert!(ticker.is_empty());

    let h2 = ticker.register(Box::new(|_| {}));
    ticker.unregister(h);
    assert_eq!(ticker.len(), 1);
    ticker.unregister(h2);
    assert!(ticker.is_empty());
}

#[test]
fn callback_can_unregister_itself_mid_frame() {
    let ticker = Rc::new(RefCell::new(Ticker::new()));
    let count = Rc::new(RefCell::new(0));

    let handle_cell: Rc<RefCell<Option<TickerHandle>>> = Rc::new(RefCell::new(None));
    let h = {
        let ticker = ticker.clone();
        let count = count.clone();
        let handle_cell = handle_cell.clone();
        ticker.clone().borrow_mut().register(Box::new(move |_| {
            *count.borrow_mut() += 1;
            if let Some(h) = handle_cell.borrow_mut().take() {
                ticker.borrow_mut().unregister(h);
            }
        }))
    };
    *handle_cell.borrow_mut() = Some(h);

    Ticker::tick_shared(&ticker, 0.016);
    Ticker::tick_shared(&ticker, 0.016);
    assert_eq!(*count.borrow(), 1);
    assert!(ticker.borrow().is_empty());
}

#[test]
fn callback_can_unregister_a_later_consumer_mid_frame() {
    let ticker = Rc::new(RefCell::new(Ticker::new()));
    let ran_second = Rc::new(RefCell::new(false));

    let second_handle: Rc<RefCell<Option<TickerHandle>>> = Rc::new(RefCell::new(None));
    {
        let ticker = ticker.clone();
        let second_handle = second_handle.clone();
        ticker.clone().borrow_mut().register(Box::new(move |_| {
            if let Some(h) = second_handle.borrow_mut().take() {
                ticker.borrow_mut().unregister(h);
            }
        }));
    }
    let h2 = {
        let ran_second = ran_second.clone();
        ticker
            .borrow_mut()
            .register(Box::new(move |_| *ran_second.borrow_mut() = true))
    };
    *second_handle.borrow_mut() = Some(h2);

    // The removal lands within the same frame: the second callback is
    // skipped, and the registry ends the frame with one consumer.
    Ticker::tick_shared(&ticker, 0.016);
    assert!(!*ran_second.borrow());
    assert_eq!(ticker.borrow().len(), 1);
}

#[test]
fn registration_mid_frame_starts_next_frame() {
    let ticker = Rc::new(RefCell::new(Ticker::new()));
    let ran_new = Rc::new(RefCell::new(0));

    {
        let ticker_inner = ticker.clone();
        let ran_new = ran_new.clone();
        let registered = Rc::new(RefCell::new(false));
        ticker.borrow_mut().register(Box::new(move |_| {
            if !*registered.borrow() {
                *registered.borrow_mut() = true;
                let ran_new = ran_new.clone();
                ticker_inner
                    .borrow_mut()
                    .register(Box::new(move |_| *ran_new.borrow_mut() += 1));
            }
        }));
    }

    Ticker::tick_shared(&ticker, 0.016);
    assert_eq!(*ran_new.borrow(), 0);
    Ticker::tick_shared(&ticker, 0.016);
    assert_eq!(*ran_new.borrow(), 1);
    assert_eq!(ticker.borrow().len(), 2);
}

#[test]
fn dt_is_passed_through() {
    let ticker = Rc::new(RefCell::new(Ticker::new()));
    let seen = Rc::new(RefCell::new(0.0f32));
    {
        let seen = seen.clone();
        ticker
            .borrow_mut()
            .register(Box::new(move |dt| *seen.borrow_mut() = dt));
    }
    Ticker::tick_shared(&ticker, 0.25);
    assert_eq!(*seen.borrow(), 0.25);
}
