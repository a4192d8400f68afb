//! Template expander for the poke variant/type-guard library.
//!
//! Renders each registered tera template once per arity in 1..=8 and
//! writes the resulting Java sources into fixed destination trees. The
//! whole tool is a single sequential pass over the registry; there is
//! no state between runs beyond the output files, which are fully
//! regenerated on every invocation.
#![deny(unsafe_code)]

pub mod error;
pub mod expand;
pub mod registry;

pub use error::{Error, Result};
pub use expand::expand_all;
