//! Two-step booking form: basic info, then safety info and submission.
//!
//! The form is a plain state machine driven by [`FormEvent`]s; rendering and
//! the network call live elsewhere and only consume the resulting
//! [`Effect`]s.

pub use draft::*;
pub use machine::*;
pub use validation::*;

mod draft;
mod machine;
mod validation;
