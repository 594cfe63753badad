use std::cell::RefCell;
use std::fmt::Display;
use std::thread;

use quote::ToTokens;
use syn::Error;

/// Collects diagnostics raised while walking the derive input so a single
/// expansion can report every shape problem at once. Must be consumed with
/// [`Context::check`] before it goes out of scope.
pub struct Context {
    errors: RefCell<Option<Vec<Error>>>,
}

impl Context {
    pub fn new() -> Self {
        Context {
            errors: RefCell::new(Some(Vec::new())),
        }
    }

    pub fn error_spanned_by<O: ToTokens, T: Display>(&self, object: O, message: T) {
        self.errors
            .borrow_mut()
            .as_mut()
            .unwrap()
            .push(Error::new_spanned(object.into_token_stream(), message));
    }

    pub fn check(self) -> Result<(), Vec<Error>> {
        let errors = self.errors.borrow_mut().take().unwrap();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if self.errors.borrow().is_some() && !thread::panicking() {
            panic!("diagnostics were recorded but never checked");
        }
    }
}
