// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

type Handler<Arguments> = Box<dyn FnMut(&Arguments)>;

/// A list of handlers notified with the same arguments, for the single UI thread.
///
/// Handlers may register further handlers while being invoked; those are
/// called from the next [`Callback::invoke`] on.
pub struct Callback<Arguments: ?Sized> {
    handlers: RefCell<Vec<Handler<Arguments>>>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handlers: Default::default() }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, f: impl FnMut(&Arguments) + 'static) {
        self.handlers.borrow_mut().push(Box::new(f));
    }

    pub fn invoke(&self, a: &Arguments) {
        let mut handlers = self.handlers.take();

        for handler in handlers.iter_mut() {
            handler(a);
        }

        let mut registered = self.handlers.borrow_mut();
        handlers.append(&mut registered);
        *registered = handlers;
    }
}
