//! Optional event handlers for widgets.
//!
//! Widgets notify their owner synchronously, from inside the input call that
//! caused the event. Instead of repeating `Option<Box<dyn FnMut(T)>>` in
//! every widget, they hold a `Callback<T>`.
//!
//! ```ignore
//! use panelkit_ui::Callback;
//!
//! let mut on_select: Callback<(usize, i32)> = Callback::none();
//! on_select.call((0, 7)); // nothing registered, nothing happens
//!
//! on_select.set(|(index, value)| log::info!("picked {index} -> {value}"));
//! on_select.call((1, 9));
//! ```
//!
//! A handler cannot reach back into the widget that owns it: the widget is
//! mutably borrowed for the whole input call, so re-entrant mutation is
//! rejected at compile time. Handlers that need to drive the widget should
//! record what they want and let the owner apply it after the call returns.

use std::fmt;

/// An optional handler invoked with a value of type `T`.
pub struct Callback<T> {
    f: Option<Box<dyn FnMut(T)>>,
}

impl<T> Callback<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// An empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Register or replace the handler. It fires for every later event.
    pub fn set<F>(&mut self, f: F)
    where
        F: FnMut(T) + 'static,
    {
        self.f = Some(Box::new(f));
    }

    /// Remove the handler.
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// Invoke the handler if one is registered. Returns whether it ran.
    pub fn call(&mut self, value: T) -> bool {
        match self.f.as_mut() {
            Some(f) => {
                f(value);
                true
            }
            None => false,
        }
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_set", &self.f.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_none_is_noop() {
        let mut cb: Callback<i32> = Callback::none();
        assert!(cb.is_none());
        assert!(!cb.call(5));
    }

    #[test]
    fn test_set_later_fires_from_then_on() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cb: Callback<i32> = Callback::default();
        cb.call(1);

        let sink = Rc::clone(&seen);
        cb.set(move |v| sink.borrow_mut().push(v));
        assert!(cb.call(2));
        assert!(cb.call(3));

        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_clear_removes_handler() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut cb = Callback::new(move |_: ()| *sink.borrow_mut() += 1);
        assert!(cb.call(()));
        cb.clear();
        assert!(!cb.call(()));
        assert!(cb.is_none());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_debug_does_not_expose_closure() {
        let cb = Callback::new(|_: u8| {});
        assert_eq!(format!("{:?}", cb), "Callback { is_set: true }");
    }
}
