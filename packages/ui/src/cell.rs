//! Mutable state shared between a view and the async actions it spawns.
//!
//! Actions only touch state inside short synchronous closures, so no borrow is
//! ever held across an `.await`. Views pass a [`Signal`]; tests pass a
//! [`RefCell`].

use std::cell::RefCell;

use dioxus::prelude::*;

/// A cell whose contents can be updated in place.
pub trait StateCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for RefCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}
