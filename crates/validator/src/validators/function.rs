//! Function validators
//!
//! Callbacks in configuration (click handlers, formatters) are checked for
//! being callable and handed back untouched. They are never invoked here.

use crate::foundation::{Callback, Value};

crate::validator! {
    /// Accepts callable values, returning the same [`Callback`].
    ///
    /// # Examples
    ///
    /// ```
    /// use perch_validator::prelude::*;
    ///
    /// let on_click = Callback::new(|_| Value::Null);
    /// let parsed = function().parse(&Value::from(on_click.clone())).unwrap();
    /// assert!(parsed.ptr_eq(&on_click));
    /// ```
    pub FunctionValidator expects "function";
    parse(input) -> Callback {
        match input {
            Value::Function(f) => Some(f.clone()),
            _ => None,
        }
    }
    fn function();
}
