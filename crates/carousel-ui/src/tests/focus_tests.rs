use crate::{DragState, FocusListeners};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn listeners_run_in_subscription_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut listeners = FocusListeners::new();
    {
        let log = Rc::clone(&log);
        listeners.subscribe(move |index| log.borrow_mut().push(("a", index)));
    }
    {
        let log = Rc::clone(&log);
        listeners.subscribe(move |index| log.borrow_mut().push(("b", index)));
    }

    listeners.notify(2);
    listeners.notify(2);

    assert_eq!(
        log.borrow().as_slice(),
        &[("a", 2), ("b", 2), ("a", 2), ("b", 2)]
    );
}

#[test]
fn unsubscribe_removes_only_that_listener() {
    let hits = Rc::new(RefCell::new(0));
    let mut listeners = FocusListeners::new();
    let first = {
        let hits = Rc::clone(&hits);
        listeners.subscribe(move |_| *hits.borrow_mut() += 1)
    };
    let _second = {
        let hits = Rc::clone(&hits);
        listeners.subscribe(move |_| *hits.borrow_mut() += 10)
    };

    assert!(listeners.unsubscribe(first));
    assert!(!listeners.unsubscribe(first));
    assert_eq!(listeners.len(), 1);

    listeners.notify(0);
    assert_eq!(*hits.borrow(), 10);
}

#[test]
fn drag_state_is_a_plain_flag() {
    let mut drag = DragState::new();
    assert!(!drag.is_dragging());
    drag.end();
    assert!(!drag.is_dragging());
    drag.begin();
    drag.begin();
    assert!(drag.is_dragging());
    drag.end();
    assert!(!drag.is_dragging());
}
